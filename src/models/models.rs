use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// `is_following` is viewer-relative and absent on the viewer's own record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub posts_count: i64,
    #[serde(default)]
    pub followers_count: i64,
    #[serde(default)]
    pub following_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_following: Option<bool>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
            posts_count: 0,
            followers_count: 0,
            following_count: 0,
            is_following: None,
        }
    }
}

/// `user_name` and `user_avatar` are a snapshot of the author at compose
/// time and are never refreshed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub comments_count: i64,
    #[serde(default)]
    pub shares_count: i64,
    #[serde(default)]
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    pub content: String,
    #[serde(default)]
    pub likes_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
}

// user_id follows connected_user_id
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub id: String,
    pub user_id: String,
    pub connected_user_id: String,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

impl Connection {
    pub fn is_accepted(&self) -> bool {
        self.status == ConnectionStatus::Accepted
    }
}

/// Partial post fields for `update_post`; unset fields are left alone.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PostUpdate {
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub user_name: Option<String>,
    pub user_avatar: Option<String>,
    pub likes_count: Option<i64>,
    pub comments_count: Option<i64>,
    pub shares_count: Option<i64>,
    pub is_liked: Option<bool>,
}

impl PostUpdate {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn apply_to(self, post: &mut Post) {
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(image_url) = self.image_url {
            post.image_url = Some(image_url);
        }
        if let Some(user_name) = self.user_name {
            post.user_name = user_name;
        }
        if let Some(user_avatar) = self.user_avatar {
            post.user_avatar = Some(user_avatar);
        }
        if let Some(likes_count) = self.likes_count {
            post.likes_count = likes_count;
        }
        if let Some(comments_count) = self.comments_count {
            post.comments_count = comments_count;
        }
        if let Some(shares_count) = self.shares_count {
            post.shares_count = shares_count;
        }
        if let Some(is_liked) = self.is_liked {
            post.is_liked = is_liked;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Stored, but the parent was absent so no counter moved.
    Orphaned,
    Missing,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}
