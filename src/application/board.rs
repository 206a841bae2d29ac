//! Board controller: turns user intents into store mutations and remote calls.
//!
//! Local intents (editing the form, starting an edit) mutate the store
//! immediately. Remote intents become a [`PendingRequest`]; the caller runs it
//! with [`BoardController::perform`] and feeds the resulting [`Completion`]
//! back through [`BoardController::apply`]. Nothing mutates the store while a
//! request is outstanding, and overlapping requests land in whatever order
//! they resolve.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::error::RemoteRequestFailed;
use crate::application::remote::{PostsRemote, RemoteOperation};
use crate::application::store::BoardStore;
use crate::domain::entities::{Comment, Draft, Post};
use crate::domain::types::{DraftField, FormMode, PostId};

const SOURCE: &str = "application::board::BoardController";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Fetch the collection, as happens once when the board opens.
    Load,
    Edit(PostId),
    Delete(PostId),
    ViewComments(PostId),
    SetField(DraftField, String),
    Submit,
    Clear,
    Render,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    FetchPosts,
    CreatePost(Draft),
    UpdatePost { id: PostId, draft: Draft },
    DeletePost(PostId),
    FetchComments(PostId),
}

impl PendingRequest {
    pub fn operation(&self) -> RemoteOperation {
        match self {
            PendingRequest::FetchPosts => RemoteOperation::FetchPosts,
            PendingRequest::CreatePost(_) => RemoteOperation::CreatePost,
            PendingRequest::UpdatePost { .. } => RemoteOperation::UpdatePost,
            PendingRequest::DeletePost(_) => RemoteOperation::DeletePost,
            PendingRequest::FetchComments(_) => RemoteOperation::FetchComments,
        }
    }
}

/// Result of running one [`PendingRequest`].
#[derive(Debug)]
pub enum Completion {
    PostsLoaded(Vec<Post>),
    PostCreated(Post),
    PostUpdated { id: PostId, post: Post },
    PostDeleted(PostId),
    CommentsLoaded {
        post_id: PostId,
        comments: Vec<Comment>,
    },
    Failed(RemoteRequestFailed),
}

/// What the event loop should do after handing an intent to the controller.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The store changed; re-render.
    Applied,
    /// Nothing changed.
    Ignored,
    /// Run this request and apply its completion later.
    Request(PendingRequest),
    /// Re-render without a change.
    Render,
    Quit,
}

#[derive(Clone)]
pub struct BoardController {
    remote: Arc<dyn PostsRemote>,
}

impl BoardController {
    pub fn new(remote: Arc<dyn PostsRemote>) -> Self {
        Self { remote }
    }

    pub fn handle(&self, store: &mut BoardStore, intent: Intent) -> Dispatch {
        match intent {
            Intent::Load => Dispatch::Request(PendingRequest::FetchPosts),
            Intent::Edit(id) => match store.post(id).cloned() {
                Some(post) => {
                    store.begin_edit(&post);
                    debug!(target = SOURCE, post_id = %id, "editing post");
                    Dispatch::Applied
                }
                None => {
                    warn!(target = SOURCE, post_id = %id, "edit ignored: post not on the board");
                    Dispatch::Ignored
                }
            },
            Intent::Delete(id) => Dispatch::Request(PendingRequest::DeletePost(id)),
            Intent::ViewComments(id) => Dispatch::Request(PendingRequest::FetchComments(id)),
            Intent::SetField(field, value) => {
                debug!(target = SOURCE, field = field.as_str(), "draft field updated");
                store.update_draft_field(field, value);
                Dispatch::Applied
            }
            Intent::Submit => {
                let draft = store.draft().clone();
                match store.form_mode() {
                    FormMode::Create => Dispatch::Request(PendingRequest::CreatePost(draft)),
                    FormMode::Update(id) => {
                        Dispatch::Request(PendingRequest::UpdatePost { id, draft })
                    }
                }
            }
            Intent::Clear => {
                store.clear_draft();
                Dispatch::Applied
            }
            Intent::Render => Dispatch::Render,
            Intent::Quit => Dispatch::Quit,
        }
    }

    /// Run a request against the remote. Never touches the store.
    pub async fn perform(&self, request: PendingRequest) -> Completion {
        let operation = request.operation();
        debug!(target = SOURCE, operation = operation.as_str(), "issuing request");

        let result = match request {
            PendingRequest::FetchPosts => self
                .remote
                .fetch_posts()
                .await
                .map(Completion::PostsLoaded),
            PendingRequest::CreatePost(draft) => self
                .remote
                .create_post(&draft)
                .await
                .map(Completion::PostCreated),
            PendingRequest::UpdatePost { id, draft } => self
                .remote
                .update_post(id, &draft)
                .await
                .map(|post| Completion::PostUpdated { id, post }),
            PendingRequest::DeletePost(id) => self
                .remote
                .delete_post(id)
                .await
                .map(|()| Completion::PostDeleted(id)),
            PendingRequest::FetchComments(post_id) => self
                .remote
                .fetch_comments(post_id)
                .await
                .map(|comments| Completion::CommentsLoaded { post_id, comments }),
        };

        result.unwrap_or_else(|cause| Completion::Failed(RemoteRequestFailed::new(operation, cause)))
    }

    /// Apply a completion to the store. Returns whether the store changed.
    pub fn apply(&self, store: &mut BoardStore, completion: Completion) -> bool {
        match completion {
            Completion::PostsLoaded(posts) => {
                info!(target = SOURCE, count = posts.len(), "posts loaded");
                store.set_posts(posts);
            }
            Completion::PostCreated(post) => {
                info!(target = SOURCE, post_id = %post.id, "post created");
                store.append_post(post);
                store.clear_draft();
            }
            Completion::PostUpdated { id, post } => {
                if !store.replace_post(id, post) {
                    warn!(target = SOURCE, post_id = %id, "updated post no longer on the board");
                }
                info!(target = SOURCE, post_id = %id, "post updated");
                store.clear_draft();
            }
            Completion::PostDeleted(id) => {
                let removed = store.remove_post(id);
                info!(target = SOURCE, post_id = %id, removed, "post deleted");
            }
            Completion::CommentsLoaded { post_id, comments } => {
                info!(
                    target = SOURCE,
                    post_id = %post_id,
                    count = comments.len(),
                    "comments loaded"
                );
                store.set_comments(post_id, comments);
            }
            Completion::Failed(failure) => {
                failure.report();
                return false;
            }
        }
        true
    }

    /// Handle an intent and, if it needs the remote, wait for the response and
    /// apply it before returning. Returns whether the store changed.
    pub async fn dispatch_and_wait(&self, store: &mut BoardStore, intent: Intent) -> bool {
        match self.handle(store, intent) {
            Dispatch::Applied => true,
            Dispatch::Ignored | Dispatch::Render | Dispatch::Quit => false,
            Dispatch::Request(request) => {
                let completion = self.perform(request).await;
                self.apply(store, completion)
            }
        }
    }
}
