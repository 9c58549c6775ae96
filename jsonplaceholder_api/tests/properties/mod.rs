//! Dataset properties shared by the test-double suite and the live suite.
//!
//! Each check runs against whatever server the given client points at, so
//! the same assertions pin down both the upstream service and our stand-in.

#![allow(dead_code)]

use std::collections::BTreeSet;

use jsonplaceholder_api::types::CreatePost;
use jsonplaceholder_api::{Client, CommentQuery, Error, PhotoQuery, TodoQuery};
use regex::Regex;

fn ids<T>(items: &[T], id: impl Fn(&T) -> i64) -> BTreeSet<i64> {
    items.iter().map(id).collect()
}

pub async fn dataset_sizes(client: &Client) {
    assert_eq!(client.get_posts().await.unwrap().data.len(), 100);
    assert_eq!(client.get_users().await.unwrap().data.len(), 10);
    assert_eq!(client.get_comments(None).await.unwrap().data.len(), 500);
    assert_eq!(client.get_albums().await.unwrap().data.len(), 100);
    assert_eq!(client.get_photos(None).await.unwrap().data.len(), 5000);
    assert_eq!(client.get_todos(None).await.unwrap().data.len(), 200);
}

pub async fn get_by_id_matches_requested_id(client: &Client) {
    for id in [1, 50, 100] {
        assert_eq!(client.get_post(id).await.unwrap().data.id, id);
        assert_eq!(client.get_album(id).await.unwrap().data.id, id);
    }
    for id in [1, 250, 500] {
        assert_eq!(client.get_comment(id).await.unwrap().data.id, id);
    }
    for id in [1, 2500, 5000] {
        assert_eq!(client.get_photo(id).await.unwrap().data.id, id);
    }
    for id in [1, 100, 200] {
        assert_eq!(client.get_todo(id).await.unwrap().data.id, id);
    }
    for id in 1..=10 {
        assert_eq!(client.get_user(id).await.unwrap().data.id, id);
    }
}

pub async fn ids_are_dense_from_one(client: &Client) {
    let posts = client.get_posts().await.unwrap().data;
    assert_eq!(ids(&posts, |p| p.id), (1..=100).collect());
    let users = client.get_users().await.unwrap().data;
    assert_eq!(ids(&users, |u| u.id), (1..=10).collect());
}

pub async fn filters_return_only_matching_children(client: &Client) {
    let comments = client
        .get_comments(Some(&CommentQuery::default().with_post_id(1)))
        .await
        .unwrap()
        .data;
    assert_eq!(comments.len(), 5);
    assert!(comments.iter().all(|c| c.post_id == 1));

    let photos = client
        .get_photos(Some(&PhotoQuery::default().with_album_id(1)))
        .await
        .unwrap()
        .data;
    assert_eq!(photos.len(), 50);
    assert!(photos.iter().all(|p| p.album_id == 1));

    let todos = client
        .get_todos(Some(&TodoQuery::default().with_user_id(1)))
        .await
        .unwrap()
        .data;
    assert_eq!(todos.len(), 20);
    assert!(todos.iter().all(|t| t.user_id == 1));
}

pub async fn combined_todo_filters_partition_user(client: &Client) {
    let query = TodoQuery::default().with_user_id(1);
    let open = client
        .get_todos(Some(&query.with_completed(false)))
        .await
        .unwrap()
        .data;
    let done = client
        .get_todos(Some(&query.with_completed(true)))
        .await
        .unwrap()
        .data;

    assert!(open.iter().all(|t| t.user_id == 1 && !t.completed));
    assert!(done.iter().all(|t| t.user_id == 1 && t.completed));

    let open_ids = ids(&open, |t| t.id);
    let done_ids = ids(&done, |t| t.id);
    assert!(open_ids.is_disjoint(&done_ids));
    assert_eq!(open_ids.len() + done_ids.len(), 20);
}

pub async fn nested_lists_equal_filtered_lists(client: &Client) {
    for user_id in [1, 5, 10] {
        let nested = client.get_user_todos(user_id).await.unwrap().data;
        let filtered = client
            .get_todos(Some(&TodoQuery::default().with_user_id(user_id)))
            .await
            .unwrap()
            .data;
        assert_eq!(ids(&nested, |t| t.id), ids(&filtered, |t| t.id));

        let posts = client.get_user_posts(user_id).await.unwrap().data;
        assert_eq!(posts.len(), 10);
        assert!(posts.iter().all(|p| p.user_id == user_id));
        let all_posts = client.get_posts().await.unwrap().data;
        let expected: BTreeSet<i64> = all_posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids(&posts, |p| p.id), expected);

        let albums = client.get_user_albums(user_id).await.unwrap().data;
        assert_eq!(albums.len(), 10);
        assert!(albums.iter().all(|a| a.user_id == user_id));
    }

    let photos = client.get_album_photos(2).await.unwrap().data;
    let filtered = client
        .get_photos(Some(&PhotoQuery::default().with_album_id(2)))
        .await
        .unwrap()
        .data;
    assert_eq!(photos.len(), 50);
    assert_eq!(ids(&photos, |p| p.id), ids(&filtered, |p| p.id));

    let comments = client.get_post_comments(3).await.unwrap().data;
    let filtered = client
        .get_comments(Some(&CommentQuery::default().with_post_id(3)))
        .await
        .unwrap()
        .data;
    assert_eq!(comments.len(), 5);
    assert_eq!(ids(&comments, |c| c.id), ids(&filtered, |c| c.id));
}

pub async fn foreign_keys_reference_existing_parents(client: &Client) {
    let user_ids = ids(&client.get_users().await.unwrap().data, |u| u.id);
    let post_ids = ids(&client.get_posts().await.unwrap().data, |p| p.id);
    let album_ids = ids(&client.get_albums().await.unwrap().data, |a| a.id);

    let posts = client.get_posts().await.unwrap().data;
    assert!(posts.iter().all(|p| user_ids.contains(&p.user_id)));
    let comments = client.get_comments(None).await.unwrap().data;
    assert!(comments.iter().all(|c| post_ids.contains(&c.post_id)));
    let photos = client.get_photos(None).await.unwrap().data;
    assert!(photos.iter().all(|p| album_ids.contains(&p.album_id)));
}

pub async fn emails_are_well_formed(client: &Client) {
    let email = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    for user in client.get_users().await.unwrap().data {
        assert!(email.is_match(&user.email), "bad user email {}", user.email);
    }
    for comment in client.get_comments(None).await.unwrap().data {
        assert!(
            email.is_match(&comment.email),
            "bad comment email {}",
            comment.email
        );
    }
}

pub async fn users_have_nested_address_and_company(client: &Client) {
    for user in client.get_users().await.unwrap().data {
        assert!(!user.address.city.is_empty());
        assert!(user.address.geo.coordinates().is_some());
        assert!(!user.company.name.is_empty());
    }
}

pub async fn writes_are_not_persisted(client: &Client) {
    let created = client
        .create_post(&CreatePost::new("foo", "bar", 1))
        .await
        .unwrap();
    assert_eq!(created.status, 201);
    assert_eq!(created.data.id, 101);
    assert_eq!(created.data.title, "foo");
    assert_eq!(created.data.body, "bar");
    assert_eq!(created.data.user_id, 1);
    assert_eq!(client.get_posts().await.unwrap().data.len(), 100);

    let deleted = client.delete_post(1).await.unwrap();
    assert_eq!(deleted.status, 200);
    assert_eq!(client.get_post(1).await.unwrap().data.id, 1);
}

pub async fn not_found_asymmetry(client: &Client) {
    let err = client.get_user(9999).await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
    assert!(client.get_user_posts(9999).await.unwrap().data.is_empty());
    assert_eq!(client.delete_post(9999).await.unwrap().status, 200);
}
