//! # Screens
//!
//! Headless view-models for every route. Screens never hold the router:
//! user actions return a [`NavAction`](chirocare_nav::NavAction) which the
//! [`AppCore`](crate::AppCore) dispatches.

mod auth;
mod dashboard;
mod directory;
mod messages;

pub use auth::{LoginScreen, PasswordResetNotice, ResetKind};
pub use dashboard::{DashboardScreen, DashboardTile};
pub use directory::{BookingScreen, ChiroDirectoryScreen, ChiroProfileScreen};
pub use messages::{ConversationScreen, MessagesScreen};

use chirocare_nav::{NavResult, Route, RouteName, RouteTable};

/// Any screen the app can show
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Sign-in
    Login(LoginScreen),
    /// Forgot/change password notice
    PasswordReset(PasswordResetNotice),
    /// Dashboard shell
    Dashboard(DashboardScreen),
    /// Chiropractor directory
    Directory(ChiroDirectoryScreen),
    /// Chiropractor profile
    Profile(ChiroProfileScreen),
    /// Booking confirmation
    Booking(BookingScreen),
    /// Inbox
    Messages(MessagesScreen),
    /// Chat thread
    Conversation(ConversationScreen),
}

impl Screen {
    /// Build the screen for `route`
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Login => Screen::Login(LoginScreen::default()),
            Route::ForgotPassword => {
                Screen::PasswordReset(PasswordResetNotice::new(ResetKind::Forgot))
            }
            Route::ChangePassword => {
                Screen::PasswordReset(PasswordResetNotice::new(ResetKind::Change))
            }
            Route::Home => Screen::Dashboard(DashboardScreen::new()),
            Route::ChiroList => Screen::Directory(ChiroDirectoryScreen::new()),
            Route::ChiroProfile { id } => Screen::Profile(ChiroProfileScreen::new(*id)),
            Route::Booking { id } => Screen::Booking(BookingScreen::new(*id)),
            Route::Messages => Screen::Messages(MessagesScreen::new()),
            Route::Conversation { id } => {
                Screen::Conversation(ConversationScreen::new(id.clone()))
            }
        }
    }

    /// Title bar text
    pub fn title(&self) -> String {
        match self {
            Screen::Login(_) => "Sign in".to_string(),
            Screen::PasswordReset(notice) => notice.heading().to_string(),
            Screen::Dashboard(_) => "Home".to_string(),
            Screen::Directory(_) => "Chiropractors".to_string(),
            Screen::Profile(profile) => profile
                .chiropractor()
                .map(|chiro| chiro.name.clone())
                .unwrap_or_else(|| "Chiropractor not found".to_string()),
            Screen::Booking(booking) => format!("Booking #{}", booking.id()),
            Screen::Messages(_) => "Messages".to_string(),
            Screen::Conversation(conversation) => conversation
                .with()
                .unwrap_or("Conversation")
                .to_string(),
        }
    }
}

/// Route table with a factory for every route
pub fn route_table() -> NavResult<RouteTable<Screen>> {
    let mut builder = RouteTable::builder();
    for name in RouteName::all() {
        builder.register(*name, Screen::for_route)?;
    }
    Ok(builder.build())
}
