use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::application::store::BoardStore;
use crate::domain::entities::{Comment, Post};
use crate::domain::types::{FormMode, PostId};

pub const BOARD_HEADING: &str = "Posts";
pub const TITLE_PLACEHOLDER: &str = "Title";
pub const BODY_PLACEHOLDER: &str = "Body";

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) origin: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            origin,
            public_message,
            error,
        }
    }

    pub fn origin(&self) -> &'static str {
        self.origin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Edit,
    Delete,
    ViewComments,
}

impl PostAction {
    pub const ALL: [PostAction; 3] = [PostAction::Edit, PostAction::Delete, PostAction::ViewComments];

    pub fn label(self) -> &'static str {
        match self {
            PostAction::Edit => "Edit",
            PostAction::Delete => "Delete",
            PostAction::ViewComments => "View Comments",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            PostAction::Edit => "edit",
            PostAction::Delete => "delete",
            PostAction::ViewComments => "comments",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostActionView {
    pub action: PostAction,
    pub label: &'static str,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub name: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEntryView {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub actions: Vec<PostActionView>,
    pub show_comments: bool,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub mode: FormMode,
    pub heading: &'static str,
    pub title: String,
    pub body: String,
    pub title_placeholder: &'static str,
    pub body_placeholder: &'static str,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub heading: &'static str,
    pub posts: Vec<PostEntryView>,
    pub form: FormView,
}

#[derive(Template)]
#[template(path = "board.txt")]
pub struct BoardTemplate<'a> {
    pub view: &'a BoardView,
}

/// Derive the display tree from the current board state.
pub fn board_view(store: &BoardStore) -> BoardView {
    let posts = store
        .posts()
        .iter()
        .map(|post| post_entry(post, store.comments(post.id)))
        .collect();

    BoardView {
        heading: BOARD_HEADING,
        posts,
        form: form_view(store),
    }
}

fn post_entry(post: &Post, comments: Option<&[Comment]>) -> PostEntryView {
    let actions = PostAction::ALL
        .into_iter()
        .map(|action| PostActionView {
            action,
            label: action.label(),
            command: format!("{} {}", action.verb(), post.id),
        })
        .collect();

    PostEntryView {
        id: post.id,
        title: post.title.clone(),
        body: post.body.clone(),
        actions,
        show_comments: comments.is_some(),
        comments: comments
            .unwrap_or_default()
            .iter()
            .map(|comment| CommentView {
                name: comment.name.clone(),
                body: comment.body.clone(),
            })
            .collect(),
    }
}

fn form_view(store: &BoardStore) -> FormView {
    let mode = store.form_mode();
    let (heading, submit_label) = match mode {
        FormMode::Create => ("Create Post", "Create"),
        FormMode::Update(_) => ("Update Post", "Update"),
    };
    let draft = store.draft();

    FormView {
        mode,
        heading,
        title: draft.title.clone(),
        body: draft.body.clone(),
        title_placeholder: TITLE_PLACEHOLDER,
        body_placeholder: BODY_PLACEHOLDER,
        submit_label,
    }
}

pub fn render_board(view: &BoardView) -> Result<String, TemplateRenderError> {
    BoardTemplate { view }.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_board",
            "Board rendering failed",
            err,
        )
    })
}
