//! Board entities as held by the state store.

use postboard_api_types::{CommentWire, PostPayload, PostWire};

use crate::domain::types::{DraftField, PostId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<PostWire> for Post {
    fn from(wire: PostWire) -> Self {
        Self {
            id: PostId::new(wire.id),
            title: wire.title,
            body: wire.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub name: String,
    pub body: String,
}

impl From<CommentWire> for Comment {
    fn from(wire: CommentWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            body: wire.body,
        }
    }
}

/// Working value of the form. Carries no identifier; the edit target does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Copy of this draft with one field replaced.
    #[must_use]
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            DraftField::Title => Self {
                title: value,
                body: self.body.clone(),
            },
            DraftField::Body => Self {
                title: self.title.clone(),
                body: value,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    pub fn to_payload(&self) -> PostPayload {
        PostPayload {
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }
}

impl From<&Post> for Draft {
    fn from(post: &Post) -> Self {
        Self::new(post.title.clone(), post.body.clone())
    }
}
