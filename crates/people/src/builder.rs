use rust_decimal::Decimal;

use roster_core::{DomainResult, PersonId};

use crate::hobbies::Hobbies;
use crate::person::Person;

/// Staging area for a [`Person`].
///
/// Setters only record values; every rule is checked once, in [`build`](Self::build).
/// An unset `id` or `age` defaults to `0`, unset hobbies to the empty set.
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    id: PersonId,
    name: Option<String>,
    surname: Option<String>,
    age: i32,
    salary: Option<Decimal>,
    hobbies: Option<Hobbies>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<PersonId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn salary(mut self, salary: Decimal) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Record the hobbies. The items are collected here into the set the built
    /// person will own; `build` moves that set rather than copying it again.
    pub fn hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies = Some(hobbies.into_iter().collect());
        self
    }

    /// Validate the staged values and produce the person.
    ///
    /// Fails with [`DomainError::InvalidArgument`](roster_core::DomainError::InvalidArgument)
    /// on the first broken rule; no partially valid person is ever returned.
    pub fn build(self) -> DomainResult<Person> {
        let id = self.id;
        let result = Person::validated(
            id,
            self.name,
            self.surname,
            self.age,
            self.salary,
            self.hobbies.unwrap_or_default(),
        );

        match &result {
            Ok(_) => tracing::debug!(person_id = %id, "person built"),
            Err(e) => tracing::debug!(person_id = %id, field = e.field().unwrap_or("-"), "person rejected: {e}"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::DomainError;

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn complete() -> PersonBuilder {
        PersonBuilder::new()
            .id(5)
            .name("Ann")
            .surname("Smith")
            .age(31)
            .salary(money("100.00"))
    }

    #[test]
    fn setters_chain_and_build() {
        let person = complete().build().unwrap();
        assert_eq!(person.id(), PersonId::new(5));
        assert_eq!(person.name(), "Ann");
    }

    #[test]
    fn setters_never_validate() {
        // Every value below is invalid, yet staging them is fine.
        let builder = PersonBuilder::new().surname("O'Brien").age(-1).salary(money("-5"));
        assert!(builder.build().is_err());
    }

    #[test]
    fn later_setter_call_overrides_earlier_one() {
        let person = complete().age(-4).age(40).build().unwrap();
        assert_eq!(person.age(), 40);
    }

    #[test]
    fn empty_builder_reports_missing_name_first() {
        let err = PersonBuilder::new().build().unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn builder_can_be_reused_via_clone() {
        let base = complete();
        let first = base.clone().id(1).build().unwrap();
        let second = base.id(2).build().unwrap();
        assert_ne!(first, second);
        assert_eq!(first.surname(), second.surname());
    }

    #[test]
    fn build_surfaces_validation_error_unchanged() {
        let err = complete().salary(Decimal::ZERO).build().unwrap_err();
        match err {
            DomainError::InvalidArgument { field: "salary", .. } => {}
            other => panic!("Expected salary InvalidArgument, got {other:?}"),
        }
    }
}
