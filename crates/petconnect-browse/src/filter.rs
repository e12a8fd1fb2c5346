//! Filter criteria and matching.
//!
//! Four independent optional constraints, all conjunctive: species, age and
//! gender are case-insensitive exact matches, the name search is a
//! case-insensitive substring match. An empty field imposes no constraint.

use petconnect_core::Animal;
use serde::Serialize;

/// One of the four filter fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Species,
    Age,
    Gender,
    /// Free-text search against the animal's name.
    Search,
}

/// Active filter criteria. Empty fields impose no constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub species: String,
    pub age: String,
    pub gender: String,
    pub search: String,
}

impl FilterCriteria {
    /// Replace the value of a single field.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Species => self.species = value,
            FilterField::Age => self.age = value,
            FilterField::Gender => self.gender = value,
            FilterField::Search => self.search = value,
        }
    }

    /// Reset all four fields to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
            && self.age.is_empty()
            && self.gender.is_empty()
            && self.search.is_empty()
    }

    /// Whether a record satisfies every non-empty constraint.
    pub fn matches(&self, animal: &Animal) -> bool {
        fn exact(filter: &str, value: &str) -> bool {
            filter.is_empty() || filter.eq_ignore_ascii_case(value)
        }

        exact(&self.species, &animal.species)
            && exact(&self.age, &animal.age)
            && exact(&self.gender, &animal.gender)
            && (self.search.is_empty()
                || animal
                    .name
                    .to_lowercase()
                    .contains(&self.search.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn animal(name: &str, species: &str, age: &str, gender: &str) -> Animal {
        serde_json::from_value(json!({
            "id": name.len() as u64,
            "name": name,
            "species": species,
            "age": age,
            "gender": gender,
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&animal("Rex", "Dog", "Young", "Male")));
    }

    #[test]
    fn test_exact_fields_are_case_insensitive() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Species, "dog");
        criteria.set(FilterField::Gender, "MALE");

        assert!(criteria.matches(&animal("Rex", "Dog", "Young", "Male")));
        assert!(!criteria.matches(&animal("Mia", "Cat", "Young", "Male")));
    }

    #[test]
    fn test_search_is_substring_case_insensitive() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Search, "ex");
        assert!(criteria.matches(&animal("Rex", "Dog", "Young", "Male")));
        assert!(!criteria.matches(&animal("Mia", "Cat", "Adult", "Female")));

        criteria.set(FilterField::Search, "REX");
        assert!(criteria.matches(&animal("Rex", "Dog", "Young", "Male")));
    }

    #[test]
    fn test_all_constraints_are_conjunctive() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Species, "Dog");
        criteria.set(FilterField::Age, "Young");

        // Species matches, age does not
        assert!(!criteria.matches(&animal("Rex", "Dog", "Senior", "Male")));
        assert!(criteria.matches(&animal("Rex", "Dog", "Young", "Male")));
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut criteria = FilterCriteria::default();
        criteria.set(FilterField::Species, "Dog");
        criteria.set(FilterField::Age, "Young");
        criteria.set(FilterField::Gender, "Male");
        criteria.set(FilterField::Search, "Rex");

        criteria.clear();
        assert!(criteria.is_empty());
    }
}
