//! HTTP adapters for the posts REST resource.

pub mod client;

pub use client::HttpPostsClient;
