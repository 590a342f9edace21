use tracing::debug;

use crate::models::User;
use crate::store::SocialStore;

impl SocialStore {
    /// Replace the current-user pointer. No validation.
    pub fn set_current_user(&mut self, user: User) {
        debug!(user_id = %user.id, "current user set");
        self.state.current_user = Some(user);
    }

    /// The viewer's live record from the user collection, or the record as
    /// it was handed to [`SocialStore::set_current_user`] when the viewer is
    /// not a known user.
    pub fn current_user(&self) -> Option<&User> {
        let pointer = self.state.current_user.as_ref()?;
        self.user(&pointer.id).or(Some(pointer))
    }

    pub(crate) fn current_user_id(&self) -> Option<&str> {
        self.state.current_user.as_ref().map(|u| u.id.as_str())
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.state.users.iter().find(|u| u.id == user_id)
    }
}
