use thiserror::Error;

/// Errors raised while building or generating sigils
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigilError {
    /// Nothing survived letter filtering.
    #[error("No valid letters in input ({rejected} rejected). Expected at least one letter A-Z")]
    InvalidInput { rejected: usize },
    #[error("Invalid render config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SigilError>;
