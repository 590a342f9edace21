use tracing::{debug, warn};

use crate::config::{max_comment_length, COMMENT_ID_PREFIX};
use crate::core::errors::{Error, Result};
use crate::core::helpers::{clean_content, new_id, now};
use crate::models::{Comment, Outcome};
use crate::store::SocialStore;

impl SocialStore {
    /// Append `comment` and bump the parent post's `comments_count`.
    /// The comment is kept even when the post is unknown.
    pub fn add_comment(&mut self, comment: Comment) -> Outcome {
        let comment_id = comment.id.clone();
        let post_id = comment.post_id.clone();
        self.state.comments.push(comment);

        match self.post_mut(&post_id) {
            Some(post) => {
                post.comments_count += 1;
                debug!(%comment_id, %post_id, comments_count = post.comments_count, "comment added");
                Outcome::Applied
            }
            None => {
                warn!(%comment_id, %post_id, "comment added for unknown post");
                Outcome::Orphaned
            }
        }
    }

    /// Comments on `post_id` in reading order, oldest first.
    pub fn get_post_comments(&self, post_id: &str) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .state
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        comments
    }

    /// Build a comment by the current user on an existing post. Not inserted.
    pub fn compose_comment(&self, post_id: &str, content: &str) -> Result<Comment> {
        let author = self.current_user().ok_or(Error::NoCurrentUser)?;
        if self.post(post_id).is_none() {
            return Err(Error::PostNotFound(post_id.to_string()));
        }
        let content = clean_content(content, max_comment_length())?;

        Ok(Comment {
            id: new_id(COMMENT_ID_PREFIX),
            post_id: post_id.to_string(),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_avatar: author.avatar.clone(),
            content,
            likes_count: 0,
            created_at: now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::core::db::demo_seed;
    use crate::models::User;

    fn comment_at(id: &str, post_id: &str, minute: i64) -> Comment {
        Comment {
            id: id.to_string(),
            post_id: post_id.to_string(),
            user_id: "user-alice".to_string(),
            user_name: "Alice".to_string(),
            user_avatar: None,
            content: format!("comment {}", id),
            likes_count: 0,
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap() + Duration::minutes(minute),
        }
    }

    #[test]
    fn add_comment_to_unknown_post_is_kept() {
        let mut store = SocialStore::new(demo_seed());
        let before = store.comments().len();

        assert_eq!(store.add_comment(comment_at("c9", "missing", 0)), Outcome::Orphaned);
        assert_eq!(store.comments().len(), before + 1);
        assert_eq!(store.get_post_comments("missing").len(), 1);
    }

    #[test]
    fn post_comments_are_oldest_first() {
        let mut store = SocialStore::default();
        store.add_comment(comment_at("b", "p1", 10));
        store.add_comment(comment_at("a", "p1", 5));
        store.add_comment(comment_at("other", "p2", 0));
        store.add_comment(comment_at("c", "p1", 20));

        let ids: Vec<&str> = store.get_post_comments("p1").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn compose_comment_checks_post() {
        let store = SocialStore::new(demo_seed());
        assert!(matches!(
            store.compose_comment("missing", "hi"),
            Err(Error::PostNotFound(id)) if id == "missing"
        ));
    }

    #[test]
    fn compose_comment_uses_viewer() {
        let store = SocialStore::new(demo_seed());
        let comment = store.compose_comment("post-bob-1", " nice ").unwrap();
        assert!(comment.id.starts_with("comment-"));
        assert_eq!(comment.post_id, "post-bob-1");
        assert_eq!(comment.user_id, "user-alice");
        assert_eq!(comment.user_name, "Alice");
        assert_eq!(comment.content, "nice");
    }

    #[test]
    fn compose_comment_without_viewer() {
        let mut seed = demo_seed();
        seed.current_user = None;
        let store = SocialStore::new(seed);
        assert!(matches!(store.compose_comment("post-bob-1", "hi"), Err(Error::NoCurrentUser)));

        let mut store = store;
        store.set_current_user(User::new("user-bob", "Bob"));
        assert_eq!(store.compose_comment("post-bob-1", "hi").unwrap().user_name, "Bob");
    }
}
