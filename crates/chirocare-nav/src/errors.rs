//! Navigation errors
//!
//! Every failure the navigation core can produce. None of these involve I/O,
//! so none are retryable: they point at a route-table misconfiguration or a
//! malformed route and must reach whoever initiated the navigation.

use serde::{Deserialize, Serialize};

/// Result alias for navigation operations
pub type NavResult<T> = Result<T, NavError>;

/// Errors raised by the route table, back stack and router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum NavError {
    /// Navigation requested to a route that is not registered
    #[error("Unknown route: {name}")]
    UnknownRoute {
        /// Route name or path that failed to resolve
        name: String,
    },

    /// The same route name was registered twice
    #[error("Duplicate route: {name}")]
    DuplicateRoute {
        /// Route name registered more than once
        name: String,
    },

    /// `pop`/`top` invoked on a stack that cannot satisfy it
    #[error("Back stack has no entry to remove or inspect")]
    EmptyStack,

    /// A route parameter is missing or malformed
    #[error("Invalid parameter `{param}` for route {route}: {value:?}")]
    InvalidParam {
        /// Route the parameter belongs to
        route: String,
        /// Parameter name
        param: String,
        /// Offending raw value
        value: String,
    },
}

impl NavError {
    /// Create an unknown route error
    pub fn unknown_route(name: impl Into<String>) -> Self {
        Self::UnknownRoute { name: name.into() }
    }

    /// Create a duplicate route error
    pub fn duplicate_route(name: impl Into<String>) -> Self {
        Self::DuplicateRoute { name: name.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid_param(
        route: impl Into<String>,
        param: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidParam {
            route: route.into(),
            param: param.into(),
            value: value.into(),
        }
    }

    /// Whether the error indicates a bug in the app rather than bad input.
    ///
    /// Route-table misconfiguration and stack invariant violations are
    /// programmer errors. A malformed parameter can come from a deep link.
    #[must_use]
    pub fn is_programmer_error(&self) -> bool {
        !matches!(self, Self::InvalidParam { .. })
    }

    /// Short label for log fields and host error reporting
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnknownRoute { .. } => "unknown_route",
            Self::DuplicateRoute { .. } => "duplicate_route",
            Self::EmptyStack => "empty_stack",
            Self::InvalidParam { .. } => "invalid_param",
        }
    }
}
