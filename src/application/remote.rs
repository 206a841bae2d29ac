//! Remote resource traits describing the posts API adapter.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Comment, Draft, Post};
use crate::domain::types::PostId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    FetchPosts,
    CreatePost,
    UpdatePost,
    DeletePost,
    FetchComments,
}

impl RemoteOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            RemoteOperation::FetchPosts => "fetch_posts",
            RemoteOperation::CreatePost => "create_post",
            RemoteOperation::UpdatePost => "update_post",
            RemoteOperation::DeletePost => "delete_post",
            RemoteOperation::FetchComments => "fetch_comments",
        }
    }
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("invalid request url: {0}")]
    Url(String),
}

impl RemoteError {
    pub fn transport(err: impl fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

/// One call per REST verb against the posts collection and its comments.
///
/// Implementations hold no board state; results are handed back to the
/// caller, which decides what to store.
#[async_trait]
pub trait PostsRemote: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, RemoteError>;

    /// The returned post carries the server-assigned id. Reference servers may
    /// only echo the payload, so it is not evidence of durable storage.
    async fn create_post(&self, draft: &Draft) -> Result<Post, RemoteError>;

    async fn update_post(&self, id: PostId, draft: &Draft) -> Result<Post, RemoteError>;

    async fn delete_post(&self, id: PostId) -> Result<(), RemoteError>;

    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, RemoteError>;
}
