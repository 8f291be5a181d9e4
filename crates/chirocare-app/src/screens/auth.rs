//! Sign-in and password-reset screens

use chirocare_nav::{NavAction, Route};

/// Sign-in screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginScreen {
    /// Email typed so far
    pub email: String,
}

impl LoginScreen {
    /// Open the forgot-password notice
    pub fn forgot_password(&self) -> NavAction {
        NavAction::push(Route::ForgotPassword)
    }
}

/// Which password flow a notice belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetKind {
    /// Reached from the login screen
    Forgot,
    /// Reached from the dashboard while signed in
    Change,
}

/// Informational dead-end pointing the user at the emailed reset link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetNotice {
    kind: ResetKind,
}

impl PasswordResetNotice {
    /// Notice for `kind`
    pub fn new(kind: ResetKind) -> Self {
        Self { kind }
    }

    /// Flow this notice serves
    pub fn kind(&self) -> ResetKind {
        self.kind
    }

    /// Heading shown above the message
    pub fn heading(&self) -> &'static str {
        match self.kind {
            ResetKind::Forgot => "Forgot your password?",
            ResetKind::Change => "Change your password",
        }
    }

    /// Body text
    pub fn message(&self) -> &'static str {
        match self.kind {
            ResetKind::Forgot => {
                "We have emailed you a link to reset your password. \
                 Follow it, then sign in again."
            }
            ResetKind::Change => {
                "For your security, password changes happen through a link we email you. \
                 You will be signed out now."
            }
        }
    }

    /// Leave for the login screen. Both flows clear history so the notice
    /// cannot be reached again with back.
    pub fn go_to_login(&self) -> NavAction {
        NavAction::Reset(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_notices_clear_the_stack() {
        for kind in [ResetKind::Forgot, ResetKind::Change] {
            let notice = PasswordResetNotice::new(kind);
            assert_eq!(notice.go_to_login(), NavAction::Reset(Route::Login));
        }
    }

    #[test]
    fn test_notice_copy_differs_per_flow() {
        let forgot = PasswordResetNotice::new(ResetKind::Forgot);
        let change = PasswordResetNotice::new(ResetKind::Change);
        assert_ne!(forgot.heading(), change.heading());
        assert!(forgot.message().contains("emailed"));
    }
}
