//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one with the new values.
///
/// Example:
/// - `Email("ada@example.com")` is a value object
/// - `User { id: UserId(1), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
