// 🏷️ Item Entity - priced catalog entry
//
// "The id is IDENTITY (fixed at construction), name and price are VALUES"

use crate::store::{Identifiable, VecStore};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ITEM ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    id: i32,

    // ========================================================================
    // VALUES (can change)
    // ========================================================================
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(id: i32, name: impl Into<String>, price: f64) -> Self {
        Item {
            id,
            name: name.into(),
            price,
        }
    }
}

impl Identifiable for Item {
    const KIND: &'static str = "item";

    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Item Name: {}, Item Price: {}",
            self.id, self.name, self.price
        )
    }
}

// ============================================================================
// ITEM STORE
// ============================================================================

/// Catalog of priced items
pub type ItemStore = VecStore<Item>;

// ============================================================================
// TESTS
// ============================================================================
