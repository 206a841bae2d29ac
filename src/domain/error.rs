use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown draft field `{name}` (expected `title` or `body`)")]
    UnknownField { name: String },
    #[error("invalid post identifier `{value}`")]
    InvalidPostId { value: String },
}

impl DomainError {
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    pub fn invalid_post_id(value: impl Into<String>) -> Self {
        Self::InvalidPostId {
            value: value.into(),
        }
    }
}
