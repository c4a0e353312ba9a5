// Entity Models
//
// Each entity has:
// - Stable integer identity assigned at construction
// - Mutable values (name, price, address)
// - A store alias over VecStore

pub mod item;
pub mod client;

pub use item::{Item, ItemStore};
pub use client::{Client, ClientRegistry};
