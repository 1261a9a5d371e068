//! Validation module
//!
//! Sort columns are interpolated into SQL text verbatim, so every entry of a
//! sort allow-list must be a plain or dot-qualified identifier.

use std::fmt;
use thiserror::Error;

/// Reasons a sort column identifier is refused
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("sort column '{0}' may only contain ASCII letters, digits and underscores")]
    InvalidCharacters(String),

    #[error("sort column '{name}' has a {length} character segment (max {max_length})")]
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },

    #[error("sort column or one of its segments is empty")]
    Empty,

    #[error("sort column '{0}' must start with a letter or underscore")]
    InvalidStartCharacter(String),

    #[error("sort column '{0}' is a reserved SQL keyword")]
    ReservedKeyword(String),
}

/// A sort column name that is safe to place in an ORDER BY clause
///
/// Accepts `column` and `table.column`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedSortField(String);

impl ValidatedSortField {
    /// MySQL identifier length limit
    const MAX_LENGTH: usize = 64;

    /// Create a new validated sort field
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::Empty);
        }

        for segment in name.split('.') {
            Self::validate_segment(name, segment)?;
        }

        Ok(Self(name.to_string()))
    }

    /// Get the validated name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the validated name as a String
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_segment(name: &str, segment: &str) -> Result<(), ValidationError> {
        // Catches "a..b", ".a" and "a."
        let first_char = segment.chars().next().ok_or(ValidationError::Empty)?;

        if segment.len() > Self::MAX_LENGTH {
            return Err(ValidationError::TooLong {
                name: name.to_string(),
                length: segment.len(),
                max_length: Self::MAX_LENGTH,
            });
        }

        if !first_char.is_ascii_alphabetic() && first_char != '_' {
            return Err(ValidationError::InvalidStartCharacter(name.to_string()));
        }

        if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::InvalidCharacters(name.to_string()));
        }

        if Self::is_reserved_keyword(segment) {
            return Err(ValidationError::ReservedKeyword(name.to_string()));
        }

        Ok(())
    }

    /// Keywords that change the meaning of an ORDER BY / LIMIT tail
    fn is_reserved_keyword(name: &str) -> bool {
        const RESERVED_KEYWORDS: &[&str] = &[
            "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "ON", "AS",
            "AND", "OR", "NOT", "NULL", "IN", "LIKE", "BETWEEN", "ORDER", "BY", "GROUP",
            "HAVING", "LIMIT", "OFFSET", "UNION", "ALL", "DISTINCT", "ASC", "DESC",
            "CREATE", "DROP", "ALTER", "TABLE", "INTO", "VALUES", "SET", "CASE", "WHEN",
            "THEN", "ELSE", "END", "EXISTS", "TRUE", "FALSE",
        ];

        RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
    }
}

impl fmt::Display for ValidatedSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sort_fields() {
        let long = "a".repeat(64);
        let valid_names = [
            "id",
            "created_at",
            "CreatedAt",
            "_rank",
            "users.id",
            "u.name2",
            long.as_str(),
        ];

        for name in valid_names {
            assert!(
                ValidatedSortField::new(name).is_ok(),
                "Should accept valid name: {}",
                name
            );
        }
    }

    #[test]
    fn test_invalid_sort_fields() {
        let test_cases = [
            ("", ValidationError::Empty),
            ("users.", ValidationError::Empty),
            (".id", ValidationError::Empty),
            (
                "1st",
                ValidationError::InvalidStartCharacter("1st".to_string()),
            ),
            (
                "id; DROP TABLE users",
                ValidationError::InvalidCharacters("id; DROP TABLE users".to_string()),
            ),
            (
                "name DESC",
                ValidationError::InvalidCharacters("name DESC".to_string()),
            ),
            ("order", ValidationError::ReservedKeyword("order".to_string())),
            (
                "t.SELECT",
                ValidationError::ReservedKeyword("t.SELECT".to_string()),
            ),
        ];

        for (name, expected_error) in test_cases {
            let result = ValidatedSortField::new(name);
            assert!(result.is_err(), "Should reject invalid name: {}", name);
            assert_eq!(result.unwrap_err(), expected_error);
        }
    }

    #[test]
    fn test_too_long_segment() {
        let long_name = format!("t.{}", "a".repeat(65));
        match ValidatedSortField::new(&long_name).unwrap_err() {
            ValidationError::TooLong {
                length, max_length, ..
            } => {
                assert_eq!(length, 65);
                assert_eq!(max_length, 64);
            }
            other => panic!("Expected TooLong error, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let field = ValidatedSortField::new("users.id").unwrap();
        assert_eq!(format!("{}", field), "users.id");
        assert_eq!(field.into_string(), "users.id");
    }
}
