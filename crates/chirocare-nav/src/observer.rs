//! Navigation observers
//!
//! Observers are notified synchronously after each successful stack
//! mutation. Failed navigations and no-op backs notify nobody.

use serde::{Deserialize, Serialize};

use crate::route::Route;

/// What kind of mutation produced an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEventKind {
    /// A new entry was pushed
    Push,
    /// The top entry was popped
    Pop,
    /// The top entry was swapped in place
    Replace,
    /// History was discarded and a single entry remains
    Reset,
}

/// A completed navigation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEvent {
    /// Mutation kind
    pub kind: NavEventKind,
    /// Route active before the mutation
    pub from: Route,
    /// Route active after the mutation
    pub to: Route,
    /// Stack depth after the mutation
    pub depth: usize,
}

/// Receives [`NavEvent`]s from a router
pub trait NavigationObserver: Send + Sync {
    /// Called once per successful mutation
    fn on_navigate(&self, event: &NavEvent);
}

impl<F> NavigationObserver for F
where
    F: Fn(&NavEvent) + Send + Sync,
{
    fn on_navigate(&self, event: &NavEvent) {
        self(event);
    }
}
