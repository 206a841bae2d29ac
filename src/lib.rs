//! postboard: a terminal board over a JSON REST `posts` resource.
//!
//! The board lists posts, creates, updates and deletes them, and fetches
//! each post's comments on demand. State lives in
//! [`application::store::BoardStore`]; [`application::board::BoardController`]
//! turns user intents into remote calls and mutations; [`runtime::EventLoop`]
//! serializes everything on one task.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod runtime;
