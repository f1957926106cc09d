//! Infrastructure layer: storage adapters and configuration.

pub mod config;
pub mod snapshot;
pub mod store;

pub use config::{ConfigError, EngineConfig};
pub use snapshot::{SnapshotError, StoreSnapshot};
pub use store::InMemoryDemandStore;
