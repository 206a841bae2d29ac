//! Owned board state: posts, the form draft, the edit target, and loaded comments.
//!
//! The store is mutated only through `&mut self`, so every mutation is applied
//! in full before anyone can read it again.

use std::collections::HashMap;

use crate::domain::entities::{Comment, Draft, Post};
use crate::domain::types::{DraftField, FormMode, PostId};

#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    posts: Vec<Post>,
    draft: Draft,
    edit_target: Option<PostId>,
    comments: HashMap<PostId, Vec<Comment>>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn edit_target(&self) -> Option<PostId> {
        self.edit_target
    }

    pub fn form_mode(&self) -> FormMode {
        FormMode::from_edit_target(self.edit_target)
    }

    pub fn comments(&self, post_id: PostId) -> Option<&[Comment]> {
        self.comments.get(&post_id).map(Vec::as_slice)
    }

    pub fn has_comments(&self, post_id: PostId) -> bool {
        self.comments.contains_key(&post_id)
    }

    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft = self.draft.with_field(field, value);
    }

    pub fn append_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Replace every post whose id matches. Returns `false` when none matched.
    pub fn replace_post(&mut self, id: PostId, post: Post) -> bool {
        let mut replaced = false;
        for slot in self.posts.iter_mut().filter(|existing| existing.id == id) {
            *slot = post.clone();
            replaced = true;
        }
        replaced
    }

    /// Drop every post with this id and its loaded comments. Returns how many
    /// posts were removed.
    pub fn remove_post(&mut self, id: PostId) -> usize {
        let before = self.posts.len();
        self.posts.retain(|post| post.id != id);
        self.comments.remove(&id);
        before - self.posts.len()
    }

    pub fn set_comments(&mut self, post_id: PostId, comments: Vec<Comment>) {
        self.comments.insert(post_id, comments);
    }

    pub fn begin_edit(&mut self, post: &Post) {
        self.draft = Draft::from(post);
        self.edit_target = Some(post.id);
    }

    pub fn clear_draft(&mut self) {
        self.draft = Draft::default();
        self.edit_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, body: &str) -> Post {
        Post::new(PostId::new(id), title, body)
    }

    fn comment(id: u64, name: &str) -> Comment {
        Comment {
            id,
            name: name.to_string(),
            body: format!("{name} body"),
        }
    }

    #[test]
    fn set_posts_replaces_collection_in_order() {
        let mut store = BoardStore::new();
        store.set_posts(vec![post(9, "z", "z")]);
        store.set_posts(vec![post(2, "b", "b"), post(1, "a", "a")]);

        let ids: Vec<u64> = store.posts().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn append_post_grows_by_one_at_the_end() {
        let mut store = BoardStore::new();
        store.set_posts(vec![post(1, "a", "a")]);
        store.append_post(post(101, "new", "n"));

        assert_eq!(store.posts().len(), 2);
        assert_eq!(store.posts().last(), Some(&post(101, "new", "n")));
    }

    #[test]
    fn replace_post_is_noop_for_unknown_id() {
        let mut store = BoardStore::new();
        store.set_posts(vec![post(1, "a", "a")]);

        assert!(!store.replace_post(PostId::new(5), post(5, "x", "x")));
        assert_eq!(store.posts(), &[post(1, "a", "a")]);

        assert!(store.replace_post(PostId::new(1), post(1, "B", "b")));
        assert_eq!(store.posts(), &[post(1, "B", "b")]);
    }

    #[test]
    fn replace_post_rewrites_every_duplicate() {
        let mut store = BoardStore::new();
        store.set_posts(vec![
            post(101, "one", "1"),
            post(2, "keep", "k"),
            post(101, "two", "2"),
        ]);

        assert!(store.replace_post(PostId::new(101), post(101, "B", "b")));
        assert_eq!(
            store.posts(),
            &[post(101, "B", "b"), post(2, "keep", "k"), post(101, "B", "b")]
        );
    }

    #[test]
    fn remove_post_drops_every_duplicate() {
        let mut store = BoardStore::new();
        store.set_posts(vec![post(101, "one", "1"), post(2, "keep", "k"), post(101, "two", "2")]);

        assert_eq!(store.remove_post(PostId::new(101)), 2);
        assert_eq!(store.posts(), &[post(2, "keep", "k")]);
    }

    #[test]
    fn remove_post_drops_its_comments() {
        let mut store = BoardStore::new();
        store.set_posts(vec![post(1, "a", "a"), post(2, "b", "b")]);
        store.set_comments(PostId::new(1), vec![comment(1, "c1")]);
        store.set_comments(PostId::new(2), vec![comment(2, "c2")]);

        assert_eq!(store.remove_post(PostId::new(1)), 1);
        assert!(store.post(PostId::new(1)).is_none());
        assert!(!store.has_comments(PostId::new(1)));
        assert!(store.has_comments(PostId::new(2)));
    }

    #[test]
    fn remove_post_clears_comments_even_without_post() {
        let mut store = BoardStore::new();
        store.set_comments(PostId::new(4), vec![comment(1, "c")]);

        assert_eq!(store.remove_post(PostId::new(4)), 0);
        assert!(!store.has_comments(PostId::new(4)));
    }

    #[test]
    fn set_comments_overwrites_and_preserves_order() {
        let mut store = BoardStore::new();
        store.set_comments(PostId::new(1), vec![comment(1, "old")]);
        store.set_comments(PostId::new(1), vec![comment(3, "c"), comment(2, "b")]);

        let names: Vec<&str> = store
            .comments(PostId::new(1))
            .unwrap_or_default()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[test]
    fn begin_edit_then_clear_draft() {
        let mut store = BoardStore::new();
        store.update_draft_field(DraftField::Title, "typed");

        store.begin_edit(&post(1, "A", "a"));
        assert_eq!(store.draft(), &Draft::new("A", "a"));
        assert_eq!(store.edit_target(), Some(PostId::new(1)));
        assert_eq!(store.form_mode(), FormMode::Update(PostId::new(1)));

        store.clear_draft();
        assert!(store.draft().is_empty());
        assert_eq!(store.edit_target(), None);
        assert_eq!(store.form_mode(), FormMode::Create);
    }

    #[test]
    fn update_draft_field_merges_one_field() {
        let mut store = BoardStore::new();
        store.update_draft_field(DraftField::Title, "T");
        store.update_draft_field(DraftField::Body, "B");
        store.update_draft_field(DraftField::Title, "T2");

        assert_eq!(store.draft(), &Draft::new("T2", "B"));
        assert_eq!(store.edit_target(), None);
    }
}
