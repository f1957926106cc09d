//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Derived planning results (forecast points, replenishment parameters) carry
/// no identity of their own: two results with the same numbers are the same
/// result. They are recomputed on every call and never mutated in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
