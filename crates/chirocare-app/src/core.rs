//! # App Core
//!
//! The explicitly constructed owner of the router. Hosts create one
//! `AppCore`, run user actions against the current screen with
//! [`AppCore::interact`], and dispatch the navigation those actions return.

use std::sync::Arc;

use chirocare_nav::{NavAction, NavOptions, NavSnapshot, NavigationObserver, Route, Router};

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::screens::{self, Screen};

/// Back-button override resolved at call time.
///
/// Returning `None` falls through to the router's own back.
pub type BackHandler<'a> = &'a mut dyn FnMut() -> Option<NavAction>;

/// Headless application core
pub struct AppCore {
    config: AppConfig,
    router: Router<Screen>,
}

impl AppCore {
    /// Validate `config`, build the route table and open the start route
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;
        let start = config.start()?;
        let router = Router::with_max_depth(screens::route_table()?, start, config.max_history)?;
        tracing::info!(start = %router.current_route(), "App core ready");
        Ok(Self { config, router })
    }

    /// Configuration the core was built with
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Apply a navigation action
    pub fn dispatch(&mut self, action: NavAction) -> AppResult<()> {
        self.router.dispatch(action)?;
        Ok(())
    }

    /// Push `route`
    pub fn navigate(&mut self, route: Route) -> AppResult<()> {
        self.router.navigate(route, NavOptions::default())?;
        Ok(())
    }

    /// Navigate to a route path such as `"booking/101"`
    pub fn navigate_path(&mut self, path: &str, options: NavOptions) -> AppResult<()> {
        self.router.navigate_path(path, options)?;
        Ok(())
    }

    /// Router back; `false` when already at the root
    pub fn back(&mut self) -> bool {
        self.router.back()
    }

    /// Back with an optional override.
    ///
    /// The override may return the action to take instead; with no
    /// override, or when it declines, the router pops.
    pub fn back_with(&mut self, handler: Option<BackHandler<'_>>) -> AppResult<()> {
        let action = handler.and_then(|handler| handler());
        match action {
            Some(action) => self.dispatch(action),
            None => {
                self.router.back();
                Ok(())
            }
        }
    }

    /// Run a user action on the current screen and dispatch the navigation it
    /// asks for. Returns whether navigation happened.
    pub fn interact<F>(&mut self, action: F) -> AppResult<bool>
    where
        F: FnOnce(&mut Screen) -> Option<NavAction>,
    {
        match action(self.router.current_screen_mut()) {
            Some(nav) => {
                self.dispatch(nav)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Active route
    pub fn current_route(&self) -> &Route {
        self.router.current_route()
    }

    /// Active screen
    pub fn screen(&self) -> &Screen {
        self.router.current_screen()
    }

    /// Whether back would move
    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    /// Serializable router state
    pub fn snapshot(&self) -> NavSnapshot {
        self.router.snapshot()
    }

    /// Observe navigations
    pub fn subscribe(&mut self, observer: Arc<dyn NavigationObserver>) {
        self.router.subscribe(observer);
    }

    /// Underlying router, read-only
    pub fn router(&self) -> &Router<Screen> {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::screens::DashboardTile;

    fn app_at(start: &str) -> AppCore {
        AppCore::new(AppConfig {
            start_route: start.to_string(),
            ..AppConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_starts_at_configured_route() {
        let app = app_at("login");
        assert_eq!(app.current_route(), &Route::Login);
        assert!(matches!(app.screen(), Screen::Login(_)));
        assert!(!app.can_go_back());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = AppCore::new(AppConfig {
            start_route: "nowhere".to_string(),
            ..AppConfig::default()
        });
        assert!(matches!(result, Err(AppError::Nav(_))));
    }

    #[test]
    fn test_interact_dispatches_screen_action() {
        let mut app = app_at("home");
        let moved = app
            .interact(|screen| match screen {
                Screen::Dashboard(dashboard) => Some(dashboard.open(DashboardTile::FindChiropractor)),
                _ => None,
            })
            .unwrap();
        assert!(moved);
        assert_eq!(app.current_route(), &Route::ChiroList);

        // Filtering mutates the live screen without navigating
        let moved = app
            .interact(|screen| {
                if let Screen::Directory(directory) = screen {
                    directory.filter("tanaka");
                }
                None
            })
            .unwrap();
        assert!(!moved);
        match app.screen() {
            Screen::Directory(directory) => assert_eq!(directory.visible().len(), 1),
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_back_with_override() {
        let mut app = app_at("home");
        app.navigate(Route::Messages).unwrap();

        let mut to_login = || Some(NavAction::Reset(Route::Login));
        app.back_with(Some(&mut to_login)).unwrap();
        assert_eq!(app.snapshot().stack, vec!["login".to_string()]);

        // The override is a plain FnMut and may keep state across presses
        app.navigate(Route::ForgotPassword).unwrap();
        let mut presses = 0;
        let mut count_then_decline = || -> Option<NavAction> {
            presses += 1;
            None
        };
        app.back_with(Some(&mut count_then_decline)).unwrap();
        assert_eq!(presses, 1);
        assert_eq!(app.current_route(), &Route::Login);

        app.back_with(None).unwrap();
        assert_eq!(app.current_route(), &Route::Login);
    }
}
