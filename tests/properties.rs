use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use social_store::{Comment, Post, Snapshot, SocialStore, User};

const USERS: [&str; 3] = ["U1", "U2", "U3"];

#[derive(Debug, Clone)]
enum Op {
    Add { author: usize, minute: i64 },
    Delete { pick: usize },
    Like { pick: usize },
    Comment { pick: usize, minute: i64 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..USERS.len(), 0i64..10_000).prop_map(|(author, minute)| Op::Add { author, minute }),
        any::<usize>().prop_map(|pick| Op::Delete { pick }),
        any::<usize>().prop_map(|pick| Op::Like { pick }),
        (any::<usize>(), 0i64..10_000).prop_map(|(pick, minute)| Op::Comment { pick, minute }),
    ]
}

fn fresh_store() -> SocialStore {
    let users: Vec<User> = USERS.iter().map(|id| User::new(*id, *id)).collect();
    SocialStore::new(Snapshot {
        current_user: users.first().cloned(),
        users,
        ..Snapshot::default()
    })
}

fn new_post(n: usize, author: &str, minute: i64) -> Post {
    Post {
        id: format!("p{}", n),
        user_id: author.to_string(),
        user_name: author.to_string(),
        user_avatar: None,
        content: "content".to_string(),
        image_url: None,
        likes_count: 0,
        comments_count: 0,
        shares_count: 0,
        is_liked: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minute),
    }
}

fn pick_post(store: &SocialStore, pick: usize) -> Option<String> {
    let posts = store.posts();
    if posts.is_empty() {
        None
    } else {
        Some(posts[pick % posts.len()].id.clone())
    }
}

fn apply(store: &mut SocialStore, n: usize, op: &Op) {
    match op {
        Op::Add { author, minute } => {
            store.add_post(new_post(n, USERS[*author], *minute));
        }
        Op::Delete { pick } => {
            if let Some(id) = pick_post(store, *pick) {
                store.delete_post(&id);
            }
        }
        Op::Like { pick } => {
            if let Some(id) = pick_post(store, *pick) {
                store.toggle_like(&id);
            }
        }
        Op::Comment { pick, minute } => {
            if let Some(id) = pick_post(store, *pick) {
                store.add_comment(Comment {
                    id: format!("c{}", n),
                    post_id: id,
                    user_id: "U1".to_string(),
                    user_name: "U1".to_string(),
                    user_avatar: None,
                    content: "reply".to_string(),
                    likes_count: 0,
                    created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(*minute),
                });
            }
        }
    }
}

proptest! {
    #[test]
    fn posts_count_tracks_owned_posts(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = fresh_store();
        for (n, op) in ops.iter().enumerate() {
            apply(&mut store, n, op);
            for user in store.users() {
                let owned = store.posts().iter().filter(|p| p.user_id == user.id).count();
                prop_assert_eq!(user.posts_count as usize, owned);
            }
        }
    }

    #[test]
    fn queries_are_ordered(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = fresh_store();
        for (n, op) in ops.iter().enumerate() {
            apply(&mut store, n, op);
        }

        for user in USERS {
            let posts = store.get_user_posts(user);
            prop_assert!(posts.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        }
        let feed = store.feed();
        prop_assert!(feed.windows(2).all(|w| w[0].created_at >= w[1].created_at));

        for post in store.posts() {
            let comments = store.get_post_comments(&post.id);
            prop_assert!(comments.windows(2).all(|w| w[0].created_at <= w[1].created_at));
            prop_assert_eq!(post.comments_count as usize, comments.len());
        }
    }

    #[test]
    fn double_like_restores_post(ops in prop::collection::vec(op(), 1..30), pick in any::<usize>()) {
        let mut store = fresh_store();
        for (n, op) in ops.iter().enumerate() {
            apply(&mut store, n, op);
        }
        if let Some(id) = pick_post(&store, pick) {
            let before = store.post(&id).cloned();
            store.toggle_like(&id);
            store.toggle_like(&id);
            prop_assert_eq!(store.post(&id).cloned(), before);
        }
    }

    #[test]
    fn double_follow_restores_graph(target in 0..USERS.len(), times in 1usize..4) {
        let mut store = fresh_store();
        // some unrelated edges first
        for _ in 0..times {
            store.toggle_follow(USERS[(target + 1) % USERS.len()]);
        }
        let before = store.snapshot();
        let viewer = store.current_user().unwrap().id.clone();
        let target = USERS[target];
        let edge = |s: &SocialStore| s.connections().iter().any(|c| c.user_id == viewer && c.connected_user_id == target);
        let had_edge = edge(&store);

        store.toggle_follow(target);
        prop_assert_ne!(edge(&store), had_edge);
        store.toggle_follow(target);

        let after = store.snapshot();
        prop_assert_eq!(edge(&store), had_edge);
        for (a, b) in before.users.iter().zip(after.users.iter()) {
            prop_assert_eq!(a.followers_count, b.followers_count);
            prop_assert_eq!(a.following_count, b.following_count);
        }
    }
}
