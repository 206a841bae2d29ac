mod support;

use httpmock::MockServer;
use postboard::application::remote::{PostsRemote, RemoteError};
use postboard::config::DEFAULT_USER_AGENT;
use postboard::domain::entities::{Comment, Draft, Post};
use postboard::domain::types::PostId;
use serde_json::json;

#[tokio::test]
async fn fetch_posts_keeps_server_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("GET")
                .path("/posts")
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"userId": 1, "id": 2, "title": "second", "body": "b"},
                    {"userId": 1, "id": 1, "title": "first", "body": "a"}
                ]));
        })
        .await;

    let posts = support::client(&server)
        .fetch_posts()
        .await
        .expect("fetch posts");

    mock.assert_async().await;
    assert_eq!(
        posts,
        vec![
            Post::new(PostId::new(2), "second", "b"),
            Post::new(PostId::new(1), "first", "a"),
        ]
    );
}

#[tokio::test]
async fn create_posts_draft_and_returns_echo() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("POST")
                .path("/posts")
                .json_body(json!({"title": "T", "body": "B"}));
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({"id": 101, "title": "T", "body": "B"}));
        })
        .await;

    let created = support::client(&server)
        .create_post(&Draft::new("T", "B"))
        .await
        .expect("create post");

    mock.assert_async().await;
    assert_eq!(created, Post::new(PostId::new(101), "T", "B"));
}

#[tokio::test]
async fn update_puts_to_item_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("PUT")
                .path("/posts/1")
                .json_body(json!({"title": "B", "body": "b"}));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"id": 1, "title": "B", "body": "b"}));
        })
        .await;

    let updated = support::client(&server)
        .update_post(PostId::new(1), &Draft::new("B", "b"))
        .await
        .expect("update post");

    mock.assert_async().await;
    assert_eq!(updated, Post::new(PostId::new(1), "B", "b"));
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("DELETE").path("/posts/7");
            then.status(200).body("{}");
        })
        .await;

    support::client(&server)
        .delete_post(PostId::new(7))
        .await
        .expect("delete post");

    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_comments_hits_sub_resource() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method("GET").path("/posts/3/comments");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"postId": 3, "id": 12, "name": "z", "email": "z@x.io", "body": "last"},
                    {"postId": 3, "id": 11, "name": "y", "email": "y@x.io", "body": "first"}
                ]));
        })
        .await;

    let comments = support::client(&server)
        .fetch_comments(PostId::new(3))
        .await
        .expect("fetch comments");

    mock.assert_async().await;
    let names: Vec<&str> = comments.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["z", "y"]);
    assert_eq!(
        comments[1],
        Comment {
            id: 11,
            name: "y".into(),
            body: "first".into()
        }
    );
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("DELETE").path("/posts/9");
            then.status(404).body("missing");
        })
        .await;

    let err = support::client(&server)
        .delete_post(PostId::new(9))
        .await
        .expect_err("404 should fail");

    match err {
        RemoteError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "missing");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/posts");
            then.status(200).body("not json");
        })
        .await;

    let err = support::client(&server)
        .fetch_posts()
        .await
        .expect_err("bad body should fail");

    assert!(matches!(err, RemoteError::Decode(_)));
}
