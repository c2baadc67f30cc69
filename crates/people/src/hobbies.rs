use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use roster_core::ValueObject;

/// Deduplicated, unordered set of hobby names owned by a single person.
///
/// Read-only: there is no `&mut` access. [`Hobbies::to_set`] hands out an
/// independent copy for callers that need to edit one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hobbies(HashSet<String>);

impl Hobbies {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, hobby: &str) -> bool {
        self.0.contains(hobby)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Owned copy of the underlying set; mutating it never touches `self`.
    pub fn to_set(&self) -> HashSet<String> {
        self.0.clone()
    }
}

impl ValueObject for Hobbies {}

impl<S: Into<String>> FromIterator<S> for Hobbies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Hobbies {
    type Item = &'a String;
    type IntoIter = std::collections::hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let hobbies: Hobbies = ["chess", "reading", "chess"].into_iter().collect();
        assert_eq!(hobbies.len(), 2);
        assert!(hobbies.contains("chess"));
        assert!(hobbies.contains("reading"));
    }

    #[test]
    fn copy_is_detached_from_the_original() {
        let hobbies: Hobbies = ["chess"].into_iter().collect();
        let mut copy = hobbies.to_set();
        copy.insert("golf".to_string());
        copy.remove("chess");

        assert_eq!(hobbies.len(), 1);
        assert!(hobbies.contains("chess"));
        assert!(!hobbies.contains("golf"));
    }

    #[test]
    fn empty_by_default() {
        assert!(Hobbies::default().is_empty());
        assert_eq!(Hobbies::empty().iter().count(), 0);
    }
}
