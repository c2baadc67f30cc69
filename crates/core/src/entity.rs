//! Entity trait: identity + continuity across state changes.
//!
//! Two entities are the same entity when their identifiers match, whatever
//! their other attributes say. Implementors wire `PartialEq`, `Eq` and `Hash`
//! through [`impl_identity_eq!`](crate::impl_identity_eq) so that equality and
//! hashing never look past the identifier.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Whether `self` and `other` denote the same entity.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for an [`Entity`] using only its id.
///
/// Note that this masks divergence: two values sharing an id compare equal even
/// when every other field differs.
#[macro_export]
macro_rules! impl_identity_eq {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::same_identity(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&$crate::Entity::id(self), state);
            }
        }
    };
}
