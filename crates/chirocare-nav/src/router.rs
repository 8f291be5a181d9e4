//! # Router
//!
//! Public navigation API. Owns the route table and the back stack; screens
//! never touch the stack directly and instead call [`Router::navigate`],
//! [`Router::back`] or hand a [`NavAction`] to [`Router::dispatch`].
//!
//! Every operation is synchronous. Validation (route resolution) completes
//! before the stack is touched, so a failing call leaves the router exactly
//! as it was.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::NavResult;
use crate::observer::{NavEvent, NavEventKind, NavigationObserver};
use crate::route::Route;
use crate::stack::{BackStack, BackStackEntry};
use crate::table::RouteTable;

/// Per-call navigation options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavOptions {
    /// Discard the whole history and leave only the new entry
    pub clear_stack: bool,
    /// Swap the current entry instead of pushing; ignored when
    /// `clear_stack` is set
    pub replace_top: bool,
}

impl NavOptions {
    /// Options that clear the stack
    pub fn clear_stack() -> Self {
        Self {
            clear_stack: true,
            ..Self::default()
        }
    }

    /// Options that replace the current entry
    pub fn replace_top() -> Self {
        Self {
            replace_top: true,
            ..Self::default()
        }
    }
}

/// Navigation request in value form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    /// Go to a route
    Navigate(Route, NavOptions),
    /// Go back one entry (no-op at the root)
    Back,
    /// Clear history and go to a route
    Reset(Route),
}

impl NavAction {
    /// Push `route`
    pub fn push(route: Route) -> Self {
        Self::Navigate(route, NavOptions::default())
    }
}

/// Serializable view of the router state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSnapshot {
    /// Path of the active route
    pub current: String,
    /// Paths from root to top
    pub stack: Vec<String>,
}

/// Screen router
pub struct Router<S> {
    table: RouteTable<S>,
    stack: BackStack<S>,
    observers: Vec<Arc<dyn NavigationObserver>>,
}

impl<S> Router<S> {
    /// Create a router whose only entry is `start`, with unbounded history
    pub fn new(table: RouteTable<S>, start: Route) -> NavResult<Self> {
        Self::with_max_depth(table, start, None)
    }

    /// Create a router with an explicit depth cap (`None` = unbounded).
    ///
    /// Fails with `UnknownRoute` if `start` has no registered factory.
    pub fn with_max_depth(
        table: RouteTable<S>,
        start: Route,
        max_depth: Option<usize>,
    ) -> NavResult<Self> {
        let screen = table.create(&start)?;
        tracing::debug!(route = %start, "Router started");
        Ok(Self {
            stack: BackStack::new(BackStackEntry::new(start, screen), max_depth),
            table,
            observers: Vec::new(),
        })
    }

    /// Register an observer for future navigations
    pub fn subscribe(&mut self, observer: Arc<dyn NavigationObserver>) {
        self.observers.push(observer);
    }

    /// Navigate to `route`.
    ///
    /// Pushes a new entry, or with `options.clear_stack` replaces the whole
    /// history. Fails with `UnknownRoute` if the route is not registered, in
    /// which case nothing changes.
    pub fn navigate(&mut self, route: Route, options: NavOptions) -> NavResult<()> {
        let screen = match self.table.create(&route) {
            Ok(screen) => screen,
            Err(err) => {
                tracing::warn!(route = %route, error = %err, "Navigation rejected");
                return Err(err);
            }
        };
        let from = self.current_route().clone();
        let entry = BackStackEntry::new(route.clone(), screen);

        let kind = if options.clear_stack {
            let discarded = self.stack.replace_all(entry);
            tracing::debug!(route = %route, discarded, "Navigated with cleared history");
            NavEventKind::Reset
        } else if options.replace_top {
            self.stack.replace_top(entry);
            tracing::debug!(route = %route, depth = self.stack.len(), "Replaced current route");
            NavEventKind::Replace
        } else {
            self.stack.push(entry);
            tracing::debug!(route = %route, depth = self.stack.len(), "Pushed route");
            NavEventKind::Push
        };

        self.notify(kind, from);
        Ok(())
    }

    /// Parse `path` (e.g. `"conversation/c1"`) and navigate to it
    pub fn navigate_path(&mut self, path: &str, options: NavOptions) -> NavResult<()> {
        let route = match path.parse::<Route>() {
            Ok(route) => route,
            Err(err) => {
                tracing::warn!(path, error = %err, "Navigation rejected");
                return Err(err);
            }
        };
        self.navigate(route, options)
    }

    /// Go back one entry.
    ///
    /// Returns `false` and does nothing when only the root remains.
    pub fn back(&mut self) -> bool {
        if !self.stack.can_pop() {
            tracing::trace!(route = %self.current_route(), "Back at root ignored");
            return false;
        }
        match self.stack.pop() {
            Ok(popped) => {
                let (from, _) = popped.into_parts();
                tracing::debug!(route = %self.current_route(), depth = self.stack.len(), "Popped route");
                self.notify(NavEventKind::Pop, from);
                true
            }
            Err(_) => false,
        }
    }

    /// Clear history and make `route` the only entry
    pub fn replace_root(&mut self, route: Route) -> NavResult<()> {
        self.navigate(route, NavOptions::clear_stack())
    }

    /// Apply a navigation action
    pub fn dispatch(&mut self, action: NavAction) -> NavResult<()> {
        match action {
            NavAction::Navigate(route, options) => self.navigate(route, options),
            NavAction::Back => {
                self.back();
                Ok(())
            }
            NavAction::Reset(route) => self.replace_root(route),
        }
    }

    /// Route of the top entry
    pub fn current_route(&self) -> &Route {
        self.stack.top().route()
    }

    /// Screen of the top entry
    pub fn current_screen(&self) -> &S {
        self.stack.top().screen()
    }

    /// Mutable screen of the top entry
    pub fn current_screen_mut(&mut self) -> &mut S {
        self.stack.top_mut().screen_mut()
    }

    /// Whether [`back`](Self::back) would do anything
    pub fn can_go_back(&self) -> bool {
        self.stack.can_pop()
    }

    /// Stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Read-only view of the back stack
    pub fn history(&self) -> &BackStack<S> {
        &self.stack
    }

    /// Route table in use
    pub fn table(&self) -> &RouteTable<S> {
        &self.table
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            current: self.current_route().path(),
            stack: self.stack.iter().map(|entry| entry.route().path()).collect(),
        }
    }

    fn notify(&self, kind: NavEventKind, from: Route) {
        if self.observers.is_empty() {
            return;
        }
        let event = NavEvent {
            kind,
            from,
            to: self.current_route().clone(),
            depth: self.stack.len(),
        };
        for observer in &self.observers {
            observer.on_navigate(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NavError;
    use crate::route::{ChiroId, RouteName};
    use std::sync::Mutex;

    fn router_at(start: Route) -> Router<String> {
        let mut builder = RouteTable::builder();
        for name in [
            RouteName::Login,
            RouteName::ForgotPassword,
            RouteName::Home,
            RouteName::ChiroList,
            RouteName::ChiroProfile,
        ] {
            builder.register(name, |route: &Route| route.path()).unwrap();
        }
        Router::new(builder.build(), start).unwrap()
    }

    #[test]
    fn test_router_navigation() {
        let mut router = router_at(Route::Home);
        assert_eq!(router.current_route(), &Route::Home);
        assert!(!router.can_go_back());

        router.navigate(Route::ChiroList, NavOptions::default()).unwrap();
        assert_eq!(router.current_route(), &Route::ChiroList);
        assert_eq!(router.current_screen(), "chiro_list");
        assert!(router.can_go_back());

        assert!(router.back());
        assert_eq!(router.current_route(), &Route::Home);
        assert!(!router.back());
        assert_eq!(router.current_route(), &Route::Home);
    }

    #[test]
    fn test_parameterized_route_and_back() {
        let mut router = router_at(Route::Home);
        router
            .navigate_path("chiro_profile/3", NavOptions::default())
            .unwrap();
        assert_eq!(router.current_route(), &Route::ChiroProfile { id: ChiroId(3) });
        assert_eq!(router.current_route().param("id").as_deref(), Some("3"));
        assert_eq!(router.current_route().path(), "chiro_profile/3");

        router.back();
        assert_eq!(router.current_route(), &Route::Home);
    }

    #[test]
    fn test_clear_stack_navigation() {
        let mut router = router_at(Route::ForgotPassword);
        router.navigate(Route::Home, NavOptions::default()).unwrap();
        router.replace_root(Route::Login).unwrap();
        assert_eq!(router.depth(), 1);
        assert_eq!(router.snapshot().stack, vec!["login".to_string()]);
        assert!(!router.back());
        assert_eq!(router.current_route(), &Route::Login);
    }

    #[test]
    fn test_replace_top_option() {
        let mut router = router_at(Route::Home);
        router.navigate(Route::ChiroList, NavOptions::default()).unwrap();
        router
            .navigate(Route::ChiroProfile { id: ChiroId(1) }, NavOptions::replace_top())
            .unwrap();
        assert_eq!(router.depth(), 2);
        router.back();
        assert_eq!(router.current_route(), &Route::Home);
    }

    #[test]
    fn test_clear_stack_wins_over_replace_top() {
        let mut router = router_at(Route::Home);
        router.navigate(Route::ChiroList, NavOptions::default()).unwrap();
        let options = NavOptions {
            clear_stack: true,
            replace_top: true,
        };
        router.navigate(Route::Login, options).unwrap();
        assert_eq!(router.history().routes(), vec![Route::Login]);
    }

    #[test]
    fn test_unknown_route_leaves_stack_unchanged() {
        let mut router = router_at(Route::Home);
        router.navigate(Route::ChiroList, NavOptions::default()).unwrap();
        let before = router.snapshot();

        let err = router
            .navigate_path("nonexistent_route", NavOptions::default())
            .unwrap_err();
        assert!(matches!(err, NavError::UnknownRoute { .. }));

        // Valid path, but the route was never registered
        let err = router
            .navigate(Route::Messages, NavOptions::clear_stack())
            .unwrap_err();
        assert_eq!(err, NavError::unknown_route("messages"));

        assert_eq!(router.snapshot(), before);
    }

    #[test]
    fn test_unregistered_start_route_fails() {
        let table = RouteTable::<String>::builder().build();
        assert!(matches!(
            Router::new(table, Route::Home),
            Err(NavError::UnknownRoute { .. })
        ));
    }

    #[test]
    fn test_dispatch_actions() {
        let mut router = router_at(Route::Home);
        router
            .dispatch(NavAction::push(Route::ChiroList))
            .unwrap();
        router.dispatch(NavAction::Back).unwrap();
        assert_eq!(router.current_route(), &Route::Home);
        router.dispatch(NavAction::Back).unwrap();
        router.dispatch(NavAction::Reset(Route::Login)).unwrap();
        assert_eq!(router.history().routes(), vec![Route::Login]);
    }

    #[test]
    fn test_observers_see_successful_mutations_only() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let mut router = router_at(Route::Home);
        router.subscribe(Arc::new(move |event: &NavEvent| {
            sink.lock().unwrap().push((event.kind, event.to.path(), event.depth));
        }));

        router.navigate(Route::ChiroList, NavOptions::default()).unwrap();
        router.back();
        router.back();
        let _ = router.navigate(Route::Messages, NavOptions::default());
        router.replace_root(Route::Login).unwrap();

        let seen = events.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                (NavEventKind::Push, "chiro_list".to_string(), 2),
                (NavEventKind::Pop, "home".to_string(), 1),
                (NavEventKind::Reset, "login".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_current_screen_mut() {
        let mut router = router_at(Route::Home);
        router.current_screen_mut().push_str("!");
        assert_eq!(router.current_screen(), "home!");
    }
}
