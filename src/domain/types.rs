//! Identifiers and small enumerations shared across the board.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Server-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId(u64);

impl PostId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::invalid_post_id(s))
    }
}

/// Editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Body,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Body => "body",
        }
    }
}

impl FromStr for DraftField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(DraftField::Title),
            "body" => Ok(DraftField::Body),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}

/// What submitting the form will do. Derived from the edit target, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(PostId),
}

impl FormMode {
    pub fn from_edit_target(target: Option<PostId>) -> Self {
        match target {
            Some(id) => FormMode::Update(id),
            None => FormMode::Create,
        }
    }
}
