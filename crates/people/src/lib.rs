//! People domain module.
//!
//! Defines the immutable [`Person`] entity, the [`PersonBuilder`] that stages
//! and validates it, and the [`older_than`] predicate factory. Pure domain
//! logic: no IO, no storage.

pub mod builder;
pub mod hobbies;
pub mod person;
pub mod predicate;

pub use builder::PersonBuilder;
pub use hobbies::Hobbies;
pub use person::Person;
pub use predicate::{OlderThan, older_than};
pub use roster_core::{DomainError, DomainResult, PersonId};
