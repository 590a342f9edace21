use serde::{Deserialize, Serialize};

use crate::core::errors::Result;
use crate::models::{Comment, Connection, Post, User};

/// Bootstrap input of a store and the read model handed back to callers.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Snapshot {
    pub current_user: Option<User>,
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub connections: Vec<Connection>,
}

impl Snapshot {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// In-memory social graph of one viewer. A missing target degrades to a
/// no-op, never an error.
#[derive(Clone, Debug, Default)]
pub struct SocialStore {
    pub(crate) state: Snapshot,
}

impl SocialStore {
    // seed is taken as-is, no validation
    pub fn new(seed: Snapshot) -> Self {
        Self { state: seed }
    }

    pub fn users(&self) -> &[User] {
        &self.state.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.state.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.state.comments
    }

    pub fn connections(&self) -> &[Connection] {
        &self.state.connections
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.clone()
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.state
    }

    pub(crate) fn user_mut(&mut self, user_id: &str) -> Option<&mut User> {
        self.state.users.iter_mut().find(|u| u.id == user_id)
    }

    pub(crate) fn post_mut(&mut self, post_id: &str) -> Option<&mut Post> {
        self.state.posts.iter_mut().find(|p| p.id == post_id)
    }
}

impl From<Snapshot> for SocialStore {
    fn from(seed: Snapshot) -> Self {
        Self::new(seed)
    }
}
