use tracing::{debug, warn};

use crate::config::CONNECTION_ID_PREFIX;
use crate::core::helpers::{new_id, now};
use crate::models::{Connection, ConnectionStatus, User};
use crate::store::SocialStore;

impl SocialStore {
    /// Follow or unfollow `user_id` as the current user.
    ///
    /// The direction comes from the target's viewer-relative `is_following`
    /// flag. Following bumps the target's `followers_count` and the viewer's
    /// `following_count` and records an accepted edge unless one is already
    /// there; unfollowing reverses the counters (no floor) and drops the edge.
    ///
    /// Returns whether the viewer now follows the target, or `None` when
    /// there is no current user or no such user.
    pub fn toggle_follow(&mut self, user_id: &str) -> Option<bool> {
        let Some(viewer_id) = self.current_user_id().map(str::to_owned) else {
            debug!(%user_id, "follow without current user ignored");
            return None;
        };
        let Some(target) = self.user_mut(user_id) else {
            debug!(%user_id, "follow of unknown user ignored");
            return None;
        };

        if viewer_id == user_id {
            warn!(%user_id, "user is toggling a follow on themselves");
        }

        let was_following = target.is_following.unwrap_or(false);
        let delta = if was_following { -1 } else { 1 };
        target.is_following = Some(!was_following);
        target.followers_count += delta;
        if target.followers_count < 0 {
            warn!(%user_id, followers_count = target.followers_count, "followers count went negative");
        }

        if let Some(viewer) = self.user_mut(&viewer_id) {
            viewer.following_count += delta;
            if viewer.following_count < 0 {
                warn!(user_id = %viewer_id, following_count = viewer.following_count, "following count went negative");
            }
        }

        let existing = self
            .state
            .connections
            .iter()
            .position(|c| c.user_id == viewer_id && c.connected_user_id == user_id);

        match (was_following, existing) {
            (true, Some(idx)) => {
                let removed = self.state.connections.remove(idx);
                debug!(connection_id = %removed.id, follower = %viewer_id, followee = %user_id, "unfollowed");
            }
            (false, None) => {
                let connection = Connection {
                    id: new_id(CONNECTION_ID_PREFIX),
                    user_id: viewer_id.clone(),
                    connected_user_id: user_id.to_string(),
                    status: ConnectionStatus::Accepted,
                    created_at: now(),
                };
                debug!(connection_id = %connection.id, follower = %viewer_id, followee = %user_id, "followed");
                self.state.connections.push(connection);
            }
            _ => {
                // flag and edge disagree; counters moved, edge left alone
                debug!(follower = %viewer_id, followee = %user_id, was_following, "follow edge already in target state");
            }
        }

        Some(!was_following)
    }

    /// Whether an accepted edge runs from `follower_id` to `followee_id`.
    pub fn is_following(&self, follower_id: &str, followee_id: &str) -> bool {
        self.state
            .connections
            .iter()
            .any(|c| c.is_accepted() && c.user_id == follower_id && c.connected_user_id == followee_id)
    }

    /// Users with an accepted edge into `user_id`, in user-collection order.
    pub fn get_user_followers(&self, user_id: &str) -> Vec<&User> {
        self.state
            .users
            .iter()
            .filter(|u| self.is_following(&u.id, user_id))
            .collect()
    }

    /// Users `user_id` has an accepted edge to, in user-collection order.
    pub fn get_user_following(&self, user_id: &str) -> Vec<&User> {
        self.state
            .users
            .iter()
            .filter(|u| self.is_following(user_id, &u.id))
            .collect()
    }
}
