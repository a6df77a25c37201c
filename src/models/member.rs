use chrono::{Datelike, NaiveDate};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Member gender, used as an equality filter on the directory.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl Gender {
    /// Parse gender from a query/request string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Member document stored in MongoDB.
///
/// `date_of_birth` serializes as an ISO `YYYY-MM-DD` string, so BSON
/// range comparisons on it order chronologically.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password_hash: String,
    pub known_as: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looking_for: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    pub created: mongodb::bson::DateTime,
    pub last_active: mongodb::bson::DateTime,
}

/// Full years between `dob` and `today`; the birthday itself counts.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn age_counts_the_birthday_itself() {
        assert_eq!(age_on(date(2000, 6, 15), date(2024, 6, 15)), 24);
        assert_eq!(age_on(date(2000, 6, 16), date(2024, 6, 15)), 23);
        assert_eq!(age_on(date(2000, 6, 14), date(2024, 6, 15)), 24);
    }

    #[test]
    fn age_at_dob_window_boundaries() {
        // [25, 35] on 2024-06-15 admits births 1988-06-16 ..= 1999-06-15
        assert_eq!(age_on(date(1988, 6, 16), date(2024, 6, 15)), 35);
        assert_eq!(age_on(date(1999, 6, 15), date(2024, 6, 15)), 25);
        assert_eq!(age_on(date(1988, 6, 15), date(2024, 6, 15)), 36);
        assert_eq!(age_on(date(1999, 6, 16), date(2024, 6, 15)), 24);
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!(Gender::from_str("Female"), Some(Gender::Female));
        assert_eq!(Gender::from_str("MALE"), Some(Gender::Male));
        assert_eq!(Gender::from_str("other"), None);
    }

    #[test]
    fn gender_opposite_flips() {
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert_eq!(Gender::Female.opposite(), Gender::Male);
    }
}
