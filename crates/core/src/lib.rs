//! `stockcast-core` — shared building blocks for the planning engine.
//!
//! This crate contains **pure** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, UserId};
pub use value_object::ValueObject;
