use tracing::{debug, warn};

use crate::config::{max_post_length, POST_ID_PREFIX};
use crate::core::errors::{Error, Result};
use crate::core::helpers::{clean_content, new_id, now};
use crate::models::{Outcome, Post, PostUpdate};
use crate::store::SocialStore;

impl SocialStore {
    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.state.posts.iter().find(|p| p.id == post_id)
    }

    /// A post whose author is unknown is still stored, with no counter to bump.
    pub fn add_post(&mut self, post: Post) -> Outcome {
        let post_id = post.id.clone();
        let author_id = post.user_id.clone();
        self.state.posts.insert(0, post);

        match self.user_mut(&author_id) {
            Some(author) => {
                author.posts_count += 1;
                debug!(%post_id, user_id = %author_id, posts_count = author.posts_count, "post added");
                Outcome::Applied
            }
            None => {
                warn!(%post_id, user_id = %author_id, "post added for unknown author");
                Outcome::Orphaned
            }
        }
    }

    pub fn update_post(&mut self, post_id: &str, update: PostUpdate) -> Outcome {
        match self.post_mut(post_id) {
            Some(post) => {
                update.apply_to(post);
                debug!(%post_id, "post updated");
                Outcome::Applied
            }
            None => {
                debug!(%post_id, "update of unknown post ignored");
                Outcome::Missing
            }
        }
    }

    // comments of the post are kept
    pub fn delete_post(&mut self, post_id: &str) -> Outcome {
        let Some(idx) = self.state.posts.iter().position(|p| p.id == post_id) else {
            debug!(%post_id, "delete of unknown post ignored");
            return Outcome::Missing;
        };

        let post = self.state.posts.remove(idx);
        if let Some(author) = self.user_mut(&post.user_id) {
            author.posts_count = (author.posts_count - 1).max(0);
        }
        debug!(%post_id, user_id = %post.user_id, "post deleted");
        Outcome::Applied
    }

    pub fn toggle_like(&mut self, post_id: &str) -> Option<bool> {
        let Some(post) = self.post_mut(post_id) else {
            debug!(%post_id, "like of unknown post ignored");
            return None;
        };

        if post.is_liked {
            post.likes_count -= 1;
        } else {
            post.likes_count += 1;
        }
        post.is_liked = !post.is_liked;

        if post.likes_count < 0 {
            warn!(%post_id, likes_count = post.likes_count, "likes count went negative");
        }
        debug!(%post_id, is_liked = post.is_liked, likes_count = post.likes_count, "like toggled");
        Some(post.is_liked)
    }

    // newest first
    pub fn get_user_posts(&self, user_id: &str) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .state
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    pub fn feed(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.state.posts.iter().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Not inserted; hand the result to [`SocialStore::add_post`].
    pub fn compose_post(&self, content: &str, image_url: Option<String>) -> Result<Post> {
        let author = self.current_user().ok_or(Error::NoCurrentUser)?;
        let content = clean_content(content, max_post_length())?;

        Ok(Post {
            id: new_id(POST_ID_PREFIX),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_avatar: author.avatar.clone(),
            content,
            image_url: image_url.filter(|url| !url.trim().is_empty()),
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
            is_liked: false,
            created_at: now(),
        })
    }
}
