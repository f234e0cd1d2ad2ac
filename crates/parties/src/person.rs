use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use stocktake_core::{NameAndCopy, ValueObject};

const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

/// Person responsible for a revision.
///
/// A person is identified by first and last name only: two records with the
/// same name but different birth data compare (and hash) equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    birth_year: i32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            birth_year: birth_date.year(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Set the birth date; the birth year follows it.
    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = birth_date;
        self.birth_year = birth_date.year();
    }

    /// Override the birth year without touching the birth date.
    pub fn set_birth_year(&mut self, birth_year: i32) {
        self.birth_year = birth_year;
    }

    pub fn to_short_string(&self) -> String {
        format!("First Name: {}, Last Name: {}", self.first_name, self.last_name)
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new("Default", "Person", NaiveDate::default())
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first_name.hash(state);
        self.last_name.hash(state);
    }
}

impl ValueObject for Person {}

impl NameAndCopy for Person {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}", self.first_name, self.last_name))
    }

    /// Splits on whitespace; needs at least a first and a last name, extra
    /// words are dropped. Anything shorter leaves the person unchanged.
    fn set_name(&mut self, name: &str) {
        let mut parts = name.split_whitespace();
        if let (Some(first), Some(last)) = (parts.next(), parts.next()) {
            self.first_name = first.to_string();
            self.last_name = last.to_string();
        }
    }

    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "First Name: {}, Last Name: {}, Birth Date: {}, Birth Year: {}",
            self.first_name,
            self.last_name,
            self.birth_date.format(BIRTH_DATE_FORMAT),
            self.birth_year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hash_of(person: &Person) -> u64 {
        let mut hasher = DefaultHasher::new();
        person.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn birth_year_is_derived_from_birth_date() {
        let mut person = Person::new("John", "Doe", date(1990, 4, 12));
        assert_eq!(person.birth_year(), 1990);

        person.set_birth_date(date(1985, 1, 1));
        assert_eq!(person.birth_year(), 1985);
    }

    #[test]
    fn birth_year_can_be_overridden_independently() {
        let mut person = Person::new("John", "Doe", date(1990, 4, 12));
        person.set_birth_year(2000);

        assert_eq!(person.birth_year(), 2000);
        assert_eq!(person.birth_date(), date(1990, 4, 12));
    }

    #[test]
    fn equality_ignores_birth_data() {
        let a = Person::new("Jane", "Smith", date(1990, 4, 12));
        let b = Person::new("Jane", "Smith", date(1970, 1, 1));

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Person::new("Jane", "Smyth", date(1990, 4, 12)));
    }

    #[test]
    fn deep_copy_is_independent() {
        let original = Person::new("Jane", "Smith", date(1990, 4, 12));
        let mut copy = original.deep_copy();
        assert_eq!(copy, original);

        copy.set_first_name("Janet");
        copy.set_birth_date(date(1991, 1, 1));
        assert_eq!(original.first_name(), "Jane");
        assert_eq!(original.birth_year(), 1990);
    }

    #[test]
    fn name_joins_first_and_last() {
        let person = Person::new("Jane", "Smith", date(1990, 4, 12));
        assert_eq!(person.name(), "Jane Smith");
    }

    #[test]
    fn set_name_needs_two_words() {
        let mut person = Person::new("Jane", "Smith", date(1990, 4, 12));

        person.set_name("Cher");
        assert_eq!(person.name(), "Jane Smith");

        person.set_name("  Ada   Lovelace  Byron ");
        assert_eq!(person.first_name(), "Ada");
        assert_eq!(person.last_name(), "Lovelace");
    }

    #[test]
    fn renderings() {
        let person = Person::new("John", "Doe", date(1990, 4, 12));
        assert_eq!(
            person.to_string(),
            "First Name: John, Last Name: Doe, Birth Date: 12.04.1990, Birth Year: 1990"
        );
        assert_eq!(person.to_short_string(), "First Name: John, Last Name: Doe");
    }

    #[test]
    fn default_person() {
        let person = Person::default();
        assert_eq!(person.first_name(), "Default");
        assert_eq!(person.last_name(), "Person");
        assert_eq!(person.birth_year(), 1970);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a copy equals its source, and mutating the copy never
            /// reaches the source.
            #[test]
            fn deep_copy_equal_and_isolated(
                first in "[A-Za-z]{1,20}",
                last in "[A-Za-z]{1,20}",
                days in 0u64..40_000,
                year in any::<i32>(),
            ) {
                let born = NaiveDate::default() + chrono::Days::new(days);
                let original = Person::new(first.clone(), last.clone(), born);
                let mut copy = original.deep_copy();
                prop_assert_eq!(&copy, &original);

                copy.set_last_name(format!("{last}-copy"));
                copy.set_birth_year(year);
                prop_assert_eq!(original.last_name(), last.as_str());
                prop_assert_eq!(original.birth_year(), born.year());
            }
        }
    }
}
