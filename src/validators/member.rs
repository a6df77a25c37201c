//! Member-related custom validators.

use chrono::{NaiveDate, Utc};
use validator::ValidationError;

use crate::models::member::age_on;

/// Custom validator for the gender field.
pub fn validate_gender(gender: &str) -> Result<(), ValidationError> {
    match gender.to_lowercase().as_str() {
        "male" | "female" => Ok(()),
        _ => {
            let mut error = ValidationError::new("invalid_gender");
            error.message = Some("Gender must be either 'male' or 'female'".into());
            Err(error)
        }
    }
}

/// Custom validator for the date of birth: members must be 18 or older.
pub fn validate_date_of_birth(date_of_birth: &NaiveDate) -> Result<(), ValidationError> {
    if age_on(*date_of_birth, Utc::now().date_naive()) < 18 {
        let mut error = ValidationError::new("underage");
        error.message = Some("You must be at least 18 years old".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    #[test]
    fn accepts_known_genders_case_insensitively() {
        assert!(validate_gender("male").is_ok());
        assert!(validate_gender("Female").is_ok());
        assert!(validate_gender("other").is_err());
        assert!(validate_gender("").is_err());
    }

    #[test]
    fn rejects_members_under_eighteen() {
        let today = Utc::now().date_naive();
        assert!(validate_date_of_birth(&(today - Months::new(17 * 12))).is_err());
        assert!(validate_date_of_birth(&(today - Months::new(18 * 12))).is_ok());
        assert!(validate_date_of_birth(&(today - Months::new(40 * 12))).is_ok());
    }
}
