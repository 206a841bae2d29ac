use async_trait::async_trait;
use postboard_api_types::{CommentWire, PostPayload, PostWire};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;

use crate::application::remote::{PostsRemote, RemoteError};
use crate::config::RemoteSettings;
use crate::domain::entities::{Comment, Draft, Post};
use crate::domain::types::PostId;
use crate::infra::error::InfraError;

const COLLECTION: &str = "posts";

/// reqwest-backed client for the `posts` collection and its comments.
#[derive(Clone, Debug)]
pub struct HttpPostsClient {
    client: Client,
    base: Url,
}

impl HttpPostsClient {
    pub fn new(settings: &RemoteSettings) -> Result<Self, InfraError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|err| InfraError::http_client(err.to_string()))?;
        Ok(Self {
            client,
            base: directory_url(settings.base_url.clone()),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url(&self, path: &str) -> Result<Url, RemoteError> {
        self.base
            .join(path)
            .map_err(|err| RemoteError::Url(err.to_string()))
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&PostPayload>,
    ) -> Result<T, RemoteError> {
        let url = self.url(path)?;
        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await.map_err(RemoteError::transport)?;
        Self::handle(resp).await
    }

    async fn request_no_body(&self, method: Method, path: &str) -> Result<(), RemoteError> {
        let url = self.url(path)?;
        let resp = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(RemoteError::transport)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, RemoteError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(RemoteError::transport)?;
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        serde_json::from_slice(&bytes).map_err(RemoteError::decode)
    }
}

#[async_trait]
impl PostsRemote for HttpPostsClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, RemoteError> {
        let posts: Vec<PostWire> = self.request(Method::GET, COLLECTION, None).await?;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    async fn create_post(&self, draft: &Draft) -> Result<Post, RemoteError> {
        let payload = draft.to_payload();
        let post: PostWire = self
            .request(Method::POST, COLLECTION, Some(&payload))
            .await?;
        Ok(Post::from(post))
    }

    async fn update_post(&self, id: PostId, draft: &Draft) -> Result<Post, RemoteError> {
        let payload = draft.to_payload();
        let path = format!("{COLLECTION}/{id}");
        let post: PostWire = self.request(Method::PUT, &path, Some(&payload)).await?;
        Ok(Post::from(post))
    }

    async fn delete_post(&self, id: PostId) -> Result<(), RemoteError> {
        let path = format!("{COLLECTION}/{id}");
        self.request_no_body(Method::DELETE, &path).await
    }

    async fn fetch_comments(&self, post_id: PostId) -> Result<Vec<Comment>, RemoteError> {
        let path = format!("{COLLECTION}/{post_id}/comments");
        let comments: Vec<CommentWire> = self.request(Method::GET, &path, None).await?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

/// Ensure the base ends with `/` so relative joins keep any path prefix.
fn directory_url(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
