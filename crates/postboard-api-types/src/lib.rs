//! Wire shapes for the `posts` collection and its `comments` sub-resource.
//!
//! Field names follow the JSON the reference API emits (`userId`, `postId`).
//! Fields the board never reads are kept optional so that echo responses from
//! create/update, which omit them, still decode.

#![deny(clippy::all, clippy::pedantic)]

use serde::{Deserialize, Serialize};

/// Element of `GET /posts`, and the body returned by `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWire {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// Request body for `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub body: String,
}

/// Element of `GET /posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWire {
    pub id: u64,
    pub name: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
