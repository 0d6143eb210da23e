use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // An active loan references state the inventory no longer has. This is never caused by
    // caller input and must be surfaced loudly.
    Consistency {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn consistency(message: &str) -> LibraryError {
        LibraryError::Consistency { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn is_fatal(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            LibraryError::Consistency { .. } => { true }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::Serialization { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Consistency { message } => {
                write!(f, "system inconsistency: {}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for inventory and lending operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

// PatronTier decides which fee policy applies to a late return.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum PatronTier {
    Standard,
    Vip,
}

impl Display for PatronTier {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PatronTier::Standard => write!(f, "Standard"),
            PatronTier::Vip => write!(f, "Vip"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookStatus, LibraryError, PatronTier};

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[test]
    fn test_should_create_consistency_error() {
        assert!(matches!(LibraryError::consistency("test"), LibraryError::Consistency{ message: _ }));
    }

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[test]
    fn test_should_flag_only_consistency_as_fatal() {
        assert!(!LibraryError::not_found("test").is_fatal());
        assert!(LibraryError::consistency("test").is_fatal());
        assert!(!LibraryError::duplicate_key("test").is_fatal());
        assert!(!LibraryError::serialization("test").is_fatal());
    }

    #[test]
    fn test_should_format_consistency_error() {
        let err = LibraryError::consistency("copy X missing");
        assert_eq!("system inconsistency: copy X missing", err.to_string());
    }

    #[test]
    fn test_should_format_book_status() {
        assert_eq!("Available", BookStatus::Available.to_string());
        assert_eq!("Borrowed", BookStatus::Borrowed.to_string());
    }

    #[test]
    fn test_should_format_patron_tier() {
        assert_eq!("Standard", PatronTier::Standard.to_string());
        assert_eq!("Vip", PatronTier::Vip.to_string());
    }
}
