use crate::services::Session;

/// Top-level views of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    WorkoutLog,
    History,
    Progress,
    BodyStats,
    Goals,
}

impl Page {
    /// Pages listed in the header for a signed-in user
    pub const NAVIGATION: [Page; 6] = [
        Page::Dashboard,
        Page::WorkoutLog,
        Page::History,
        Page::Progress,
        Page::BodyStats,
        Page::Goals,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Dashboard => "Dashboard",
            Page::WorkoutLog => "Log Workout",
            Page::History => "History",
            Page::Progress => "Progress",
            Page::BodyStats => "Body Stats",
            Page::Goals => "Goals",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Page::Login | Page::Register)
    }
}

/// The page to actually show: anything behind auth falls back to login
/// when nobody is signed in.
pub fn resolve_page(requested: Page, session: &Session) -> Page {
    if requested.requires_auth() && !session.is_authenticated() {
        Page::Login
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_user_is_sent_to_login() {
        let session = Session::anonymous();
        for page in Page::NAVIGATION {
            assert_eq!(resolve_page(page, &session), Page::Login);
        }
        assert_eq!(resolve_page(Page::Register, &session), Page::Register);
        assert_eq!(resolve_page(Page::Login, &session), Page::Login);
    }

    #[test]
    fn test_signed_in_user_gets_requested_page() {
        let session = Session::for_user(1);
        for page in Page::NAVIGATION {
            assert_eq!(resolve_page(page, &session), page);
        }
    }

    #[test]
    fn test_navigation_excludes_auth_pages() {
        assert!(Page::NAVIGATION.iter().all(Page::requires_auth));
    }
}
