// Record Store - Core Library
// Generic keyed storage plus the replicate and comparison capabilities

pub mod error;
pub mod store;
pub mod entities;
pub mod replicate;
pub mod compare;
pub mod seed;
pub mod driver;

// Re-export commonly used types
pub use error::{RecordError, Result};
pub use store::{Identifiable, RecordStore, VecStore};
pub use entities::{
    Item, ItemStore,
    Client, ClientRegistry,
};
pub use replicate::{Replicate, Dot, Quadrilateral, clone_object};
pub use compare::{Assess, ComplexNumber, Ratio, compare_values};
pub use seed::{SeedData, Lookups};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
