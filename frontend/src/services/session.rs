use gloo::storage::{SessionStorage, Storage};
use shared::UserId;
use yew::Callback;

use super::logging::Logger;

const USER_ID_KEY: &str = "currentUserId";

/// The signed-in user, if any. Lives in session storage so a page reload
/// keeps the user signed in until the tab closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    user_id: Option<UserId>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn for_user(user_id: UserId) -> Self {
        Self { user_id: Some(user_id) }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Load the session saved in browser session storage
    pub fn restore() -> Self {
        match SessionStorage::get::<UserId>(USER_ID_KEY) {
            Ok(user_id) => Self::for_user(user_id),
            Err(_) => Self::anonymous(),
        }
    }

    /// Write this session to browser session storage
    pub fn persist(&self) {
        match self.user_id {
            Some(user_id) => {
                if let Err(e) = SessionStorage::set(USER_ID_KEY, user_id) {
                    Logger::warn_with_component("session", &format!("Failed to persist session: {}", e));
                }
            }
            None => SessionStorage::delete(USER_ID_KEY),
        }
    }
}

/// Session plus the actions that change it, shared through a Yew context
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub session: Session,
    pub login: Callback<UserId>,
    pub logout: Callback<()>,
}

impl SessionHandle {
    pub fn user_id(&self) -> Option<UserId> {
        self.session.user_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_user_session() {
        let session = Session::for_user(42);
        assert!(session.is_authenticated());
        assert_eq!(session.user_id(), Some(42));
    }
}
