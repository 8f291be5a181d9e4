//! # Routes
//!
//! Typed destinations. A [`Route`] carries its parameters as typed fields,
//! validated when the route is built or parsed; the path form
//! (`"chiro_profile/3"`) exists only for deep links, logging and snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{NavError, NavResult};

/// Chiropractor identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChiroId(pub u32);

/// Appointment booking identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookingId(pub u32);

/// Chat conversation identifier.
///
/// Non-empty and free of `/` so it always survives a round trip through a
/// route path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConversationId(String);

impl ConversationId {
    /// Validate and wrap a conversation id
    pub fn new(id: impl Into<String>) -> NavResult<Self> {
        let id = id.into();
        if id.is_empty() || id.contains('/') {
            return Err(NavError::invalid_param(
                RouteName::Conversation.as_str(),
                "id",
                id,
            ));
        }
        Ok(Self(id))
    }

    /// Borrow the raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ConversationId {
    type Error = NavError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConversationId> for String {
    fn from(id: ConversationId) -> Self {
        id.0
    }
}

impl fmt::Display for ChiroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Route identifiers, one per registrable destination
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteName {
    /// Sign-in screen
    Login,
    /// "Forgot password" notice
    ForgotPassword,
    /// "Change password" notice
    ChangePassword,
    /// Dashboard shell
    Home,
    /// Chiropractor directory
    ChiroList,
    /// Single chiropractor profile
    ChiroProfile,
    /// Appointment booking
    Booking,
    /// Conversation list
    Messages,
    /// Single chat conversation
    Conversation,
}

impl RouteName {
    /// Stable string id used in paths and route-table logs
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Login => "login",
            RouteName::ForgotPassword => "forgot_password",
            RouteName::ChangePassword => "change_password",
            RouteName::Home => "home",
            RouteName::ChiroList => "chiro_list",
            RouteName::ChiroProfile => "chiro_profile",
            RouteName::Booking => "booking",
            RouteName::Messages => "messages",
            RouteName::Conversation => "conversation",
        }
    }

    /// Path pattern with parameter placeholders
    pub fn pattern(&self) -> &'static str {
        match self {
            RouteName::ChiroProfile => "chiro_profile/{id}",
            RouteName::Booking => "booking/{id}",
            RouteName::Conversation => "conversation/{id}",
            other => other.as_str(),
        }
    }

    /// Ordered parameter names the route expects
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            RouteName::ChiroProfile | RouteName::Booking | RouteName::Conversation => &["id"],
            _ => &[],
        }
    }

    /// Look a name up by its string id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|name| name.as_str() == id)
    }

    /// Every route name
    pub fn all() -> &'static [RouteName] {
        &[
            RouteName::Login,
            RouteName::ForgotPassword,
            RouteName::ChangePassword,
            RouteName::Home,
            RouteName::ChiroList,
            RouteName::ChiroProfile,
            RouteName::Booking,
            RouteName::Messages,
            RouteName::Conversation,
        ]
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigable destination with its bound parameters
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// Sign-in screen
    Login,
    /// "Forgot password" notice
    ForgotPassword,
    /// "Change password" notice
    ChangePassword,
    /// Dashboard shell
    Home,
    /// Chiropractor directory
    ChiroList,
    /// Profile of one chiropractor
    ChiroProfile {
        /// Chiropractor shown
        id: ChiroId,
    },
    /// Booking detail
    Booking {
        /// Booking shown
        id: BookingId,
    },
    /// Conversation list
    Messages,
    /// A single conversation
    Conversation {
        /// Conversation shown
        id: ConversationId,
    },
}

impl Route {
    /// Route name (the variant discriminant)
    pub fn name(&self) -> RouteName {
        match self {
            Route::Login => RouteName::Login,
            Route::ForgotPassword => RouteName::ForgotPassword,
            Route::ChangePassword => RouteName::ChangePassword,
            Route::Home => RouteName::Home,
            Route::ChiroList => RouteName::ChiroList,
            Route::ChiroProfile { .. } => RouteName::ChiroProfile,
            Route::Booking { .. } => RouteName::Booking,
            Route::Messages => RouteName::Messages,
            Route::Conversation { .. } => RouteName::Conversation,
        }
    }

    /// Bound parameters in pattern order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Route::ChiroProfile { id } => vec![("id", id.to_string())],
            Route::Booking { id } => vec![("id", id.to_string())],
            Route::Conversation { id } => vec![("id", id.to_string())],
            _ => Vec::new(),
        }
    }

    /// Value of a single parameter
    pub fn param(&self, name: &str) -> Option<String> {
        self.params()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Formatted path, e.g. `"conversation/abc"`
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().as_str())?;
        for (_, value) in self.params() {
            write!(f, "/{value}")?;
        }
        Ok(())
    }
}

impl FromStr for Route {
    type Err = NavError;

    /// Parse a route path such as `"chiro_profile/3"`.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let mut segments = path.split('/');
        let head = segments.next().unwrap_or_default();
        let name = RouteName::from_id(head).ok_or_else(|| NavError::unknown_route(path))?;

        let args: Vec<&str> = segments.collect();
        let expected = name.param_names();
        if args.len() != expected.len() {
            let param = expected.first().copied().unwrap_or("id");
            return Err(NavError::invalid_param(name.as_str(), param, path));
        }

        // Canonical decimal only, so the parsed route prints back as `path`
        let numeric = |raw: &str| {
            let canonical = !raw.is_empty()
                && raw.bytes().all(|b| b.is_ascii_digit())
                && (raw == "0" || !raw.starts_with('0'));
            canonical
                .then(|| raw.parse::<u32>().ok())
                .flatten()
                .ok_or_else(|| NavError::invalid_param(name.as_str(), "id", raw))
        };

        let route = match (name, args.as_slice()) {
            (RouteName::Login, []) => Route::Login,
            (RouteName::ForgotPassword, []) => Route::ForgotPassword,
            (RouteName::ChangePassword, []) => Route::ChangePassword,
            (RouteName::Home, []) => Route::Home,
            (RouteName::ChiroList, []) => Route::ChiroList,
            (RouteName::Messages, []) => Route::Messages,
            (RouteName::ChiroProfile, [id]) => Route::ChiroProfile {
                id: ChiroId(numeric(*id)?),
            },
            (RouteName::Booking, [id]) => Route::Booking {
                id: BookingId(numeric(*id)?),
            },
            (RouteName::Conversation, [id]) => Route::Conversation {
                id: ConversationId::new(*id)?,
            },
            _ => return Err(NavError::invalid_param(name.as_str(), "id", path)),
        };
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "home");
        assert_eq!(Route::ChiroProfile { id: ChiroId(3) }.path(), "chiro_profile/3");
        assert_eq!(Route::Booking { id: BookingId(12) }.path(), "booking/12");
        let conv = ConversationId::new("dr-lee").unwrap();
        assert_eq!(Route::Conversation { id: conv }.path(), "conversation/dr-lee");
    }

    #[test]
    fn test_parse_parameterized_route() {
        let route: Route = "chiro_profile/3".parse().unwrap();
        assert_eq!(route, Route::ChiroProfile { id: ChiroId(3) });
        assert_eq!(route.name(), RouteName::ChiroProfile);
        assert_eq!(route.param("id").as_deref(), Some("3"));
        assert_eq!(route.param("missing"), None);
    }

    #[test]
    fn test_parse_unknown_route() {
        let err = "nonexistent_route".parse::<Route>().unwrap_err();
        assert_eq!(err, NavError::unknown_route("nonexistent_route"));
        assert!(matches!(
            "".parse::<Route>(),
            Err(NavError::UnknownRoute { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_params() {
        assert!(matches!(
            "chiro_profile/abc".parse::<Route>(),
            Err(NavError::InvalidParam { .. })
        ));
        assert!(matches!(
            "chiro_profile".parse::<Route>(),
            Err(NavError::InvalidParam { .. })
        ));
        assert!(matches!(
            "home/1".parse::<Route>(),
            Err(NavError::InvalidParam { .. })
        ));
        assert!(matches!(
            "conversation/".parse::<Route>(),
            Err(NavError::InvalidParam { .. })
        ));
    }

    #[test]
    fn test_non_canonical_ids_are_rejected() {
        for path in [
            "chiro_profile/+3",
            "chiro_profile/003",
            "booking/-1",
            "booking/ 7",
            "booking/4294967296",
        ] {
            assert!(
                matches!(path.parse::<Route>(), Err(NavError::InvalidParam { .. })),
                "{path}"
            );
        }
        for path in ["chiro_profile/0", "chiro_profile/30", "booking/4294967295"] {
            assert_eq!(path.parse::<Route>().unwrap().path(), path);
        }
    }

    #[test]
    fn test_conversation_id_validation() {
        assert!(ConversationId::new("").is_err());
        assert!(ConversationId::new("a/b").is_err());
        assert_eq!(ConversationId::new("c42").unwrap().as_str(), "c42");
    }

    #[test]
    fn test_every_name_round_trips_through_id() {
        for name in RouteName::all() {
            assert_eq!(RouteName::from_id(name.as_str()), Some(*name));
        }
        assert_eq!(RouteName::from_id("dashboard"), None);
    }

    #[test]
    fn test_patterns_declare_params() {
        for name in RouteName::all() {
            let placeholders = name.pattern().matches('{').count();
            assert_eq!(placeholders, name.param_names().len(), "{name}");
        }
    }

    #[test]
    fn test_route_serde_shape() {
        let route = Route::ChiroProfile { id: ChiroId(7) };
        let json = serde_json::to_string(&route).unwrap();
        assert_eq!(json, r#"{"route":"chiro_profile","id":7}"#);

        let bad = r#"{"route":"conversation","id":""}"#;
        assert!(serde_json::from_str::<Route>(bad).is_err());
    }
}
