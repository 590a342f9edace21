use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::core::errors::Result;
use crate::core::helpers::now;
use crate::models::{Comment, Connection, ConnectionStatus, Post, User};
use crate::store::Snapshot;

/// Read a JSON snapshot from disk. Contents are taken as-is.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&raw)?;
    info!(
        path = %path.display(),
        users = snapshot.users.len(),
        posts = snapshot.posts.len(),
        "loaded seed"
    );
    Ok(snapshot)
}

fn user(id: &str, name: &str, posts: i64, followers: i64, following: i64) -> User {
    User {
        avatar: Some(format!("https://avatars.example/{}.png", id)),
        posts_count: posts,
        followers_count: followers,
        following_count: following,
        ..User::new(id, name)
    }
}

fn post(id: &str, author: &User, content: &str, created_at: DateTime<Utc>) -> Post {
    Post {
        id: id.to_string(),
        user_id: author.id.clone(),
        user_name: author.name.clone(),
        user_avatar: author.avatar.clone(),
        content: content.to_string(),
        image_url: None,
        likes_count: 0,
        comments_count: 0,
        shares_count: 0,
        is_liked: false,
        created_at,
    }
}

fn comment(id: &str, post: &Post, author: &User, content: &str, created_at: DateTime<Utc>) -> Comment {
    Comment {
        id: id.to_string(),
        post_id: post.id.clone(),
        user_id: author.id.clone(),
        user_name: author.name.clone(),
        user_avatar: author.avatar.clone(),
        content: content.to_string(),
        likes_count: 0,
        created_at,
    }
}

fn connection(id: &str, from: &User, to: &User, status: ConnectionStatus, created_at: DateTime<Utc>) -> Connection {
    Connection {
        id: id.to_string(),
        user_id: from.id.clone(),
        connected_user_id: to.id.clone(),
        status,
        created_at,
    }
}

/// Small consistent graph for demos: alice is the viewer, follows bob and is
/// followed by carol. bob has a pending request out to carol.
pub fn demo_seed() -> Snapshot {
    let now = now();

    let alice = user("user-alice", "Alice", 1, 1, 1);
    let mut bob = user("user-bob", "Bob", 2, 1, 0);
    bob.is_following = Some(true);
    let mut carol = user("user-carol", "Carol", 1, 0, 1);
    carol.is_following = Some(false);

    let alice_post = post(
        "post-alice-1",
        &alice,
        "Welcome to my board! Excited to share thoughts here.",
        now - Duration::days(3),
    );
    let mut bob_first = post(
        "post-bob-1",
        &bob,
        "Hey everyone! Just joined, looking forward to connecting with you all.",
        now - Duration::hours(30),
    );
    let mut bob_second = post(
        "post-bob-2",
        &bob,
        "Just finished an amazing project. Feeling productive today!",
        now - Duration::minutes(40),
    );
    bob_second.likes_count = 1;
    bob_second.is_liked = true;
    let carol_post = post(
        "post-carol-1",
        &carol,
        "Morning run done before the rain.",
        now - Duration::hours(5),
    );

    let comments = vec![
        comment(
            "comment-1",
            &bob_first,
            &alice,
            "Welcome aboard!",
            now - Duration::hours(29),
        ),
        comment(
            "comment-2",
            &bob_first,
            &carol,
            "Glad to have you here.",
            now - Duration::hours(20),
        ),
        comment(
            "comment-3",
            &bob_second,
            &alice,
            "Congrats, what was it?",
            now - Duration::minutes(10),
        ),
    ];
    bob_first.comments_count = 2;
    bob_second.comments_count = 1;

    let connections = vec![
        connection(
            "conn-1",
            &alice,
            &bob,
            ConnectionStatus::Accepted,
            now - Duration::days(10),
        ),
        connection(
            "conn-2",
            &carol,
            &alice,
            ConnectionStatus::Accepted,
            now - Duration::days(8),
        ),
        connection(
            "conn-3",
            &bob,
            &carol,
            ConnectionStatus::Pending,
            now - Duration::days(1),
        ),
    ];

    Snapshot {
        current_user: Some(alice.clone()),
        users: vec![alice, bob, carol],
        posts: vec![bob_second, carol_post, bob_first, alice_post],
        comments,
        connections,
    }
}
