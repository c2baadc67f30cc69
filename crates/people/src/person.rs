use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use roster_core::{DomainError, DomainResult, Entity, PersonId, impl_identity_eq};

use crate::builder::PersonBuilder;
use crate::hobbies::Hobbies;
use crate::predicate::OlderThan;

static SURNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z]+$").expect("surname pattern is a valid regex"));

/// Entity: Person.
///
/// Immutable once built; the only way in is [`Person::builder`]. Equality and
/// hashing look at `id` alone, so two people sharing an id are equal even when
/// every other field differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    id: PersonId,
    name: String,
    surname: String,
    age: u32,
    salary: Decimal,
    hobbies: Hobbies,
}

impl Person {
    pub fn builder() -> PersonBuilder {
        PersonBuilder::new()
    }

    /// Check every construction rule in order and assemble the person.
    pub(crate) fn validated(
        id: PersonId,
        name: Option<String>,
        surname: Option<String>,
        age: i32,
        salary: Option<Decimal>,
        hobbies: Hobbies,
    ) -> DomainResult<Self> {
        let name = name.ok_or_else(|| DomainError::invalid_argument("name", "is required"))?;

        let surname =
            surname.ok_or_else(|| DomainError::invalid_argument("surname", "is required"))?;
        if !SURNAME_PATTERN.is_match(&surname) {
            return Err(DomainError::invalid_argument(
                "surname",
                format!("must match [a-zA-Z]+, got {surname:?}"),
            ));
        }

        let age = u32::try_from(age).map_err(|_| {
            DomainError::invalid_argument("age", format!("must not be negative, got {age}"))
        })?;

        let salary =
            salary.ok_or_else(|| DomainError::invalid_argument("salary", "is required"))?;
        if salary <= Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "salary",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            id,
            name,
            surname,
            age,
            salary,
            hobbies,
        })
    }

    /// Predicate matching people strictly older than `age`.
    pub fn older_than(age: i32) -> OlderThan {
        OlderThan::new(age)
    }

    /// Builder pre-filled with this person's values, for deriving an edited copy.
    pub fn to_builder(&self) -> PersonBuilder {
        PersonBuilder::new()
            .id(self.id)
            .name(self.name.clone())
            .surname(self.surname.clone())
            .age(i32::try_from(self.age).unwrap_or(i32::MAX))
            .salary(self.salary)
            .hobbies(self.hobbies.iter())
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Hash code derived from the id alone: the id itself.
    pub fn identity_hash(&self) -> i32 {
        self.id.get()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    pub fn hobbies(&self) -> &Hobbies {
        &self.hobbies
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> PersonId {
        self.id
    }
}

impl_identity_eq!(Person);

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Person{{id={}, name='{}', surname='{}'}}",
            self.id, self.name, self.surname
        )
    }
}

/// Wire shape accepted by `Deserialize`; converted through the builder so the
/// same rules apply to decoded input.
#[derive(Debug, Deserialize)]
struct PersonRecord {
    #[serde(default)]
    id: PersonId,
    name: Option<String>,
    surname: Option<String>,
    #[serde(default)]
    age: i32,
    salary: Option<Decimal>,
    hobbies: Option<Vec<String>>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = DomainError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let mut builder = Person::builder().id(record.id).age(record.age);
        if let Some(name) = record.name {
            builder = builder.name(name);
        }
        if let Some(surname) = record.surname {
            builder = builder.surname(surname);
        }
        if let Some(salary) = record.salary {
            builder = builder.salary(salary);
        }
        if let Some(hobbies) = record.hobbies {
            builder = builder.hobbies(hobbies);
        }
        builder.build()
    }
}
