//! Filter specification for the member directory query.
//!
//! The caller builds a `MemberFilter` and hands it to the repository;
//! nothing here touches the database.

use chrono::{Days, Months, NaiveDate};

use crate::models::Gender;

/// Sort order for the member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    /// Newest accounts first.
    Created,
    /// Most recently active first.
    #[default]
    LastActive,
}

impl OrderBy {
    /// Parse a sort key from the query string; unknown values fall back
    /// to the default.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "created" => OrderBy::Created,
            _ => OrderBy::LastActive,
        }
    }
}

/// Everything the directory query filters and sorts on.
#[derive(Debug, Clone)]
pub struct MemberFilter {
    /// The requesting member, excluded from their own results.
    pub current_username: String,
    pub gender: Option<Gender>,
    pub min_age: u32,
    pub max_age: u32,
    pub order_by: OrderBy,
}

impl MemberFilter {
    /// Inclusive date-of-birth window for the age range as of `today`.
    ///
    /// A member aged exactly `max_age` today was born no earlier than
    /// `today - (max_age + 1) years + 1 day`; one aged exactly `min_age`
    /// was born no later than `today - min_age years`.
    pub fn dob_window(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let min_dob = today - Months::new((self.max_age + 1) * 12) + Days::new(1);
        let max_dob = today - Months::new(self.min_age * 12);
        (min_dob, max_dob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn filter(min_age: u32, max_age: u32) -> MemberFilter {
        MemberFilter {
            current_username: "lisa".to_string(),
            gender: None,
            min_age,
            max_age,
            order_by: OrderBy::default(),
        }
    }

    #[test]
    fn dob_window_for_age_range_25_to_35() {
        let (min_dob, max_dob) = filter(25, 35).dob_window(date(2024, 6, 15));
        assert_eq!(min_dob, date(1988, 6, 16));
        assert_eq!(max_dob, date(1999, 6, 15));
    }

    #[test]
    fn dob_window_for_single_age() {
        // Exactly 30-year-olds: born within the year ending today.
        let (min_dob, max_dob) = filter(30, 30).dob_window(date(2024, 6, 15));
        assert_eq!(min_dob, date(1993, 6, 16));
        assert_eq!(max_dob, date(1994, 6, 15));
    }

    #[test]
    fn order_by_parses_known_keys_and_defaults() {
        assert_eq!(OrderBy::from_str("created"), OrderBy::Created);
        assert_eq!(OrderBy::from_str("Created"), OrderBy::Created);
        assert_eq!(OrderBy::from_str("last_active"), OrderBy::LastActive);
        assert_eq!(OrderBy::from_str("whatever"), OrderBy::LastActive);
        assert_eq!(OrderBy::default(), OrderBy::LastActive);
    }
}
