//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; they carry no
/// identity of their own and usually live inside an [`Entity`](crate::Entity).
/// They expose read access only. To "change" one, build a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
