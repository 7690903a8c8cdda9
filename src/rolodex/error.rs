use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    #[error("The {0} is already removed or not set")]
    AlreadyEmpty(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

/// Coarse classification of [`RolodexError`], for callers that only care
/// about what went wrong rather than the details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed phone, birthday or email.
    Validation,
    /// A contact or phone the operation referred to does not exist.
    NotFound,
    /// Removal of an optional field that is not set.
    AlreadyEmpty,
    /// Reading or writing the snapshot or config failed.
    Storage,
    /// The request itself was malformed.
    Usage,
}

impl RolodexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RolodexError::Validation(_) => ErrorKind::Validation,
            RolodexError::ContactNotFound(_) | RolodexError::PhoneNotFound(_) => {
                ErrorKind::NotFound
            }
            RolodexError::AlreadyEmpty(_) => ErrorKind::AlreadyEmpty,
            RolodexError::Io(_) | RolodexError::Serialization(_) => ErrorKind::Storage,
            RolodexError::Config(_) | RolodexError::Api(_) => ErrorKind::Usage,
        }
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_errors() {
        let err: RolodexError = ValidationError::InvalidEmail("nope".into()).into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            RolodexError::ContactNotFound("Ann".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            RolodexError::PhoneNotFound("123456789".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            RolodexError::AlreadyEmpty("email").kind(),
            ErrorKind::AlreadyEmpty
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            RolodexError::AlreadyEmpty("email").to_string(),
            "The email is already removed or not set"
        );
        assert_eq!(
            RolodexError::PhoneNotFound("0501234567".into()).to_string(),
            "Phone number 0501234567 not found"
        );
    }
}
