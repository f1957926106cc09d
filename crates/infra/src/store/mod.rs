//! Demand history storage backing the planning engine.

pub mod in_memory;

pub use in_memory::InMemoryDemandStore;
