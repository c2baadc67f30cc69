//! Age-based filtering.

use crate::person::Person;

/// Stateless predicate matching people strictly older than a threshold.
///
/// Holds only the threshold, so it is `Copy` and can be shared freely
/// across threads and reused for any number of evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OlderThan {
    threshold: i32,
}

/// Build an [`OlderThan`] predicate for `age`.
pub fn older_than(age: i32) -> OlderThan {
    OlderThan::new(age)
}

impl OlderThan {
    pub const fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    pub const fn threshold(&self) -> i32 {
        self.threshold
    }

    /// True iff a person is present and their age is strictly above the threshold.
    ///
    /// Accepts `&Person` as well as `Option<&Person>`; `None` is never a match.
    pub fn test<'a>(&self, person: impl Into<Option<&'a Person>>) -> bool {
        person
            .into()
            .is_some_and(|p| i64::from(p.age()) > i64::from(self.threshold))
    }

    /// Closure form for `Iterator::filter` over `&Person` items.
    ///
    /// ```ignore
    /// let seniors: Vec<&Person> = people.iter().filter(older_than(65).as_fn()).collect();
    /// ```
    pub fn as_fn(self) -> impl Fn(&&Person) -> bool + Copy + Send + Sync {
        move |person: &&Person| self.test(*person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn aged(id: i32, age: i32) -> Person {
        Person::builder()
            .id(id)
            .name("Ann")
            .surname("Smith")
            .age(age)
            .salary(Decimal::ONE)
            .build()
            .unwrap()
    }

    #[test]
    fn strictly_older_matches() {
        let pred = older_than(30);
        assert!(pred.test(&aged(1, 31)));
        assert!(!pred.test(&aged(2, 30)));
        assert!(!pred.test(&aged(3, 29)));
    }

    #[test]
    fn absent_person_never_matches() {
        assert!(!older_than(30).test(None::<&Person>));
        assert!(!older_than(i32::MIN).test(None::<&Person>));
    }

    #[test]
    fn negative_threshold_matches_every_person() {
        assert!(older_than(-1).test(&aged(1, 0)));
        assert!(older_than(i32::MIN).test(&aged(1, 0)));
    }

    #[test]
    fn associated_factory_matches_free_function() {
        assert_eq!(Person::older_than(18), older_than(18));
        assert_eq!(Person::older_than(18).threshold(), 18);
    }

    #[test]
    fn filters_a_collection_and_is_reusable() {
        let people = vec![aged(1, 10), aged(2, 40), aged(3, 65), aged(4, 41)];
        let pred = older_than(40);

        let ids: Vec<i32> = people
            .iter()
            .filter(pred.as_fn())
            .map(|p| p.id().get())
            .collect();
        assert_eq!(ids, vec![3, 4]);

        // Same predicate, second pass.
        assert_eq!(people.iter().filter(pred.as_fn()).count(), 2);
    }

    #[test]
    fn shared_across_threads() {
        let pred = older_than(30);
        let person = aged(1, 31);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| pred.test(&person))).collect();
            for handle in handles {
                assert!(handle.join().unwrap());
            }
        });
    }
}
