// 👤 Client Entity - addressed client entry

use crate::store::{Identifiable, VecStore};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: i32,
    pub name: String,
    pub address: String,
}

impl Client {
    pub fn new(id: i32, name: impl Into<String>, address: impl Into<String>) -> Self {
        Client {
            id,
            name: name.into(),
            address: address.into(),
        }
    }
}

impl Identifiable for Client {
    const KIND: &'static str = "client";

    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Client Name: {}, Client Address: {}",
            self.id, self.name, self.address
        )
    }
}

/// Registry of known clients
pub type ClientRegistry = VecStore<Client>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    fn registry() -> ClientRegistry {
        vec![
            Client::new(1, "Johnson", "Maple Street"),
            Client::new(2, "Smith", "Elm Street"),
            Client::new(3, "Williams", "Oak Street"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_client_display() {
        let client = Client::new(3, "Williams", "Oak Street");
        assert_eq!(
            client.to_string(),
            "ID: 3, Client Name: Williams, Client Address: Oak Street"
        );
    }

    #[test]
    fn test_registry_lookup() {
        let registry = registry();

        assert_eq!(registry.find_by_id(3).unwrap().name, "Williams");
        assert!(registry.find_by_id(4).is_none());
    }

    #[test]
    fn test_rename_client_in_place() {
        let mut registry = registry();

        let smith = registry.find_by_id_mut(2).unwrap();
        smith.address = "Birch Street".to_string();

        assert_eq!(registry.find_by_id(2).unwrap().address, "Birch Street");
        assert_eq!(registry.find_by_id(2).unwrap().id(), 2);
    }

    #[test]
    fn test_remove_client() {
        let mut registry = registry();
        let johnson = Client::new(1, "Johnson", "Maple Street");

        assert_eq!(registry.remove(&johnson), Some(johnson.clone()));
        assert!(registry.find_by_id(1).is_none());
        assert_eq!(registry.len(), 2);

        // Second removal is a no-op
        assert_eq!(registry.remove(&johnson), None);
    }
}
