//! Project name validation
//!
//! Names become directory names and npm package name prefixes, so they are
//! restricted to characters safe in both. Runs before any generation.

use thiserror::Error;

/// Longest accepted project name
const MAX_NAME_LENGTH: usize = 64;

#[derive(Debug, Error, PartialEq)]
pub enum NameError {
    #[error("project name cannot be empty")]
    Empty,

    #[error("project name must be {0} characters or less")]
    TooLong(usize),

    #[error("project name '{0}' contains invalid characters; use alphanumerics, '-' and '_'")]
    InvalidCharacters(String),
}

/// Check that a project name is non-empty and filesystem-safe
pub fn validate_project_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(NameError::TooLong(MAX_NAME_LENGTH));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(NameError::InvalidCharacters(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_project_name("my-app").is_ok());
        assert!(validate_project_name("my_app").is_ok());
        assert!(validate_project_name("myapp123").is_ok());
        assert!(validate_project_name("a").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_project_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_too_long_name() {
        let name = "a".repeat(65);
        assert_eq!(validate_project_name(&name), Err(NameError::TooLong(64)));

        let name = "a".repeat(64);
        assert!(validate_project_name(&name).is_ok());
    }

    #[test]
    fn test_unsafe_names() {
        for name in ["my app", "my.app", "my/app", "..", "a/../b", "my@app"] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(NameError::InvalidCharacters(_))
                ),
                "accepted: {name}"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NameError::Empty.to_string(),
            "project name cannot be empty"
        );
        assert_eq!(
            NameError::TooLong(64).to_string(),
            "project name must be 64 characters or less"
        );
    }
}
