// 🌱 Seed Data - sample records as data, not code
// The driver's catalog, clients and lookup targets live in data/seed.json

use crate::entities::{Client, ClientRegistry, Item, ItemStore};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// Identifiers the driver looks up after loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookups {
    pub item_id: i32,
    pub client_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub items: Vec<Item>,

    #[serde(default)]
    pub clients: Vec<Client>,

    pub lookups: Lookups,
}

impl SeedData {
    /// Parse seed data from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(content)
            .context("Failed to parse seed JSON")?;

        info!(
            items = seed.items.len(),
            clients = seed.clients.len(),
            "seed data loaded"
        );

        Ok(seed)
    }

    /// The sample data bundled with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_SEED).context("Bundled data/seed.json is invalid")
    }

    /// Fresh catalog holding every seed item, in file order
    pub fn item_store(&self) -> ItemStore {
        self.items.iter().cloned().collect()
    }

    /// Fresh registry holding every seed client, in file order
    pub fn client_registry(&self) -> ClientRegistry {
        self.clients.iter().cloned().collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
