use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Game not found: {0}")]
    NotFound(u32),

    #[error("Genre lookup failed: {0}")]
    LookupFailure(String),

    #[error("Genre lookup inconsistency: {0}")]
    LookupInconsistency(String),

    #[error("No game ids left to assign")]
    IdsExhausted,
}

impl CatalogError {
    /// Whether the presentation layer should show this error to the user.
    ///
    /// A lookup inconsistency means a stored game points at a genre that
    /// does not exist, which is a defect rather than bad input.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, CatalogError::LookupInconsistency(_))
    }

    /// Short message suitable for a form or list view.
    pub fn user_message(&self) -> &'static str {
        match self {
            CatalogError::InvalidArgument(_) => "Please select a genre",
            CatalogError::NotFound(_) => "Game not found",
            CatalogError::LookupFailure(_) => "The selected genre does not exist",
            CatalogError::LookupInconsistency(_) => "Something went wrong",
            CatalogError::IdsExhausted => "The catalog cannot hold any more games",
        }
    }
}

impl From<ValidationErrors> for CatalogError {
    fn from(errors: ValidationErrors) -> Self {
        Self::InvalidArgument(errors.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        assert_eq!(CatalogError::NotFound(7).to_string(), "Game not found: 7");
        assert_eq!(
            CatalogError::LookupFailure("genre 9".to_string()).to_string(),
            "Genre lookup failed: genre 9"
        );
    }

    #[test]
    fn test_inconsistency_is_not_user_facing() {
        assert!(CatalogError::NotFound(1).is_user_facing());
        assert!(CatalogError::InvalidArgument(String::new()).is_user_facing());
        assert!(!CatalogError::LookupInconsistency("x".to_string()).is_user_facing());
        assert!(CatalogError::IdsExhausted.is_user_facing());
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(CatalogError::NotFound(3).user_message(), "Game not found");
        assert_eq!(
            CatalogError::InvalidArgument("genre".to_string()).user_message(),
            "Please select a genre"
        );
    }

    #[test]
    fn test_validation_errors_become_invalid_argument() {
        use validator::{ValidationError, ValidationErrors};

        let mut errors = ValidationErrors::new();
        errors.add("genre_id", ValidationError::new("required"));

        let error = CatalogError::from(errors);
        assert!(matches!(&error, CatalogError::InvalidArgument(msg) if msg.contains("genre_id")));
        assert_eq!(error.user_message(), "Please select a genre");
    }

    #[test]
    fn test_error_serialization() {
        let error = CatalogError::NotFound(4);
        let json = serde_json::to_string(&error).unwrap();
        let back: CatalogError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, error);
    }
}
