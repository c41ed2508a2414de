//! Person roster - the state owned by the cards container
//!
//! The roster is an ordered list of people. Order comes from the seed list
//! and only changes through two operations:
//! - `rename`: replace a name in place (looked up by id)
//! - `remove_at`: remove the record at a rendered position
//!
//! Ids are generated fresh on every start and never persisted.

mod emphasis;

pub use emphasis::Emphasis;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a person record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            age,
        }
    }

    /// Card paragraph text
    pub fn introduction(&self) -> String {
        format!("I'm {} and I am {} years old!", self.name, self.age)
    }
}

/// Seed entry for building a roster (ids are assigned on construction)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSeed {
    pub name: String,
    pub age: u32,
}

impl PersonSeed {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// The built-in seed list
pub fn default_seeds() -> Vec<PersonSeed> {
    vec![
        PersonSeed::new("Andi", 23),
        PersonSeed::new("Peter", 25),
        PersonSeed::new("John", 27),
        PersonSeed::new("Moni", 21),
    ]
}

/// Ordered collection of person records
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Roster {
    persons: Vec<Person>,
}

impl Roster {
    /// Roster with the built-in people
    pub fn seeded() -> Self {
        Self::from_seeds(&default_seeds())
    }

    /// Build a roster from seeds, generating a fresh id for each record
    pub fn from_seeds(seeds: &[PersonSeed]) -> Self {
        let persons = seeds
            .iter()
            .map(|s| Person::new(s.name.clone(), s.age))
            .collect();
        Self { persons }
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.persons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    /// Rendered position of the record with this id
    pub fn position(&self, id: PersonId) -> Option<usize> {
        self.persons.iter().position(|p| p.id == id)
    }

    /// Replace the name of the record with `id`, keeping its position.
    ///
    /// Any text is accepted, including the empty string. Returns `false`
    /// when no record has that id.
    pub fn rename(&mut self, id: PersonId, name: impl Into<String>) -> bool {
        let Some(person) = self.persons.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        person.name = name.into();
        true
    }

    /// Remove the record at `index`; later records shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<Person> {
        if index < self.persons.len() {
            Some(self.persons.remove(index))
        } else {
            None
        }
    }

    /// Emphasis classes for the current length
    pub fn emphasis(&self) -> Emphasis {
        Emphasis::for_len(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roster: &Roster) -> Vec<&str> {
        roster.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn seeded_roster_keeps_insertion_order() {
        let roster = Roster::seeded();
        assert_eq!(names(&roster), vec!["Andi", "Peter", "John", "Moni"]);
        let ages: Vec<u32> = roster.iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![23, 25, 27, 21]);
    }

    #[test]
    fn ids_are_unique_and_regenerated() {
        let a = Roster::seeded();
        let b = Roster::seeded();

        let mut ids: Vec<PersonId> = a.iter().map(|p| p.id).collect();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        assert_eq!(ids.len(), a.len());

        // A fresh roster never reuses ids from a previous one
        assert!(a.iter().all(|p| b.position(p.id).is_none()));
    }

    #[test]
    fn rename_touches_only_the_target() {
        let mut roster = Roster::seeded();
        let before = roster.clone();
        let john = roster.get(2).unwrap().id;

        assert!(roster.rename(john, "Johnny"));

        assert_eq!(names(&roster), vec!["Andi", "Peter", "Johnny", "Moni"]);
        assert_eq!(roster.get(2).unwrap().id, john);
        assert_eq!(roster.get(2).unwrap().age, 27);
        for i in [0, 1, 3] {
            assert_eq!(roster.get(i), before.get(i));
        }
    }

    #[test]
    fn rename_accepts_empty_name() {
        let mut roster = Roster::seeded();
        let andi = roster.get(0).unwrap().id;
        assert!(roster.rename(andi, ""));
        assert_eq!(roster.get(0).unwrap().name, "");
        assert_eq!(roster.get(0).unwrap().introduction(), "I'm  and I am 23 years old!");
    }

    #[test]
    fn rename_unknown_id_is_noop() {
        let mut roster = Roster::seeded();
        let before = roster.clone();
        assert!(!roster.rename(PersonId::new(), "Nobody"));
        assert!(roster.iter().eq(before.iter()));
    }

    #[test]
    fn remove_at_shifts_later_records() {
        let mut roster = Roster::seeded();
        let removed = roster.remove_at(1).unwrap();
        assert_eq!(removed.name, "Peter");
        assert_eq!(names(&roster), vec!["Andi", "John", "Moni"]);

        roster.remove_at(0);
        assert_eq!(names(&roster), vec!["John", "Moni"]);
    }

    #[test]
    fn remove_at_out_of_range_is_noop() {
        let mut roster = Roster::seeded();
        assert!(roster.remove_at(4).is_none());
        assert_eq!(roster.len(), 4);

        let mut empty = Roster::default();
        assert!(empty.remove_at(0).is_none());
    }

    #[test]
    fn emphasis_follows_length() {
        let mut roster = Roster::seeded();
        assert_eq!(roster.emphasis().class_name(), "");
        roster.remove_at(0);
        assert_eq!(roster.emphasis().class_name(), "");
        roster.remove_at(0);
        assert_eq!(roster.emphasis().class_name(), "red");
        roster.remove_at(0);
        assert_eq!(roster.emphasis().class_name(), "red bold");
        roster.remove_at(0);
        assert_eq!(roster.emphasis().class_name(), "red bold");
    }

    #[test]
    fn serializes_as_plain_array() {
        let roster = Roster::from_seeds(&[PersonSeed::new("Ada", 36)]);
        let json = serde_json::to_value(&roster).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["name"], "Ada");
        assert_eq!(arr[0]["age"], 36);
        assert!(arr[0]["id"].is_string());
    }
}
