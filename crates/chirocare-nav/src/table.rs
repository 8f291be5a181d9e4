//! # Route Table
//!
//! Static mapping from [`RouteName`] to the factory that builds its screen.
//! Assembled once through [`RouteTableBuilder`]; the built [`RouteTable`]
//! exposes no mutating methods.

use std::fmt;

use indexmap::IndexMap;

use crate::errors::{NavError, NavResult};
use crate::route::{Route, RouteName};

/// Builds a screen for a route with its bound parameters.
///
/// The router never inspects what the factory returns.
pub trait ScreenFactory<S>: Send + Sync {
    /// Construct the screen for `route`
    fn create(&self, route: &Route) -> S;
}

impl<S, F> ScreenFactory<S> for F
where
    F: Fn(&Route) -> S + Send + Sync,
{
    fn create(&self, route: &Route) -> S {
        self(route)
    }
}

/// Boxed factory stored in the table
pub type BoxedFactory<S> = Box<dyn ScreenFactory<S>>;

/// Mutable registration phase of a route table
pub struct RouteTableBuilder<S> {
    factories: IndexMap<RouteName, BoxedFactory<S>>,
}

impl<S> Default for RouteTableBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RouteTableBuilder<S> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Associate `name` with `factory`.
    ///
    /// Fails with [`NavError::DuplicateRoute`] if `name` is already
    /// registered; the existing factory is kept.
    pub fn register<F>(&mut self, name: RouteName, factory: F) -> NavResult<&mut Self>
    where
        F: ScreenFactory<S> + 'static,
    {
        if self.factories.contains_key(&name) {
            tracing::warn!(route = %name, "Rejected duplicate route registration");
            return Err(NavError::duplicate_route(name.as_str()));
        }
        self.factories.insert(name, Box::new(factory));
        Ok(self)
    }

    /// Freeze the registrations
    pub fn build(self) -> RouteTable<S> {
        tracing::info!(routes = self.factories.len(), "Route table built");
        RouteTable {
            factories: self.factories,
        }
    }
}

/// Immutable route table
pub struct RouteTable<S> {
    factories: IndexMap<RouteName, BoxedFactory<S>>,
}

impl<S> RouteTable<S> {
    /// Start a new table
    pub fn builder() -> RouteTableBuilder<S> {
        RouteTableBuilder::new()
    }

    /// Factory registered for `name`
    pub fn resolve(&self, name: RouteName) -> NavResult<&dyn ScreenFactory<S>> {
        self.factories
            .get(&name)
            .map(|factory| factory.as_ref())
            .ok_or_else(|| NavError::unknown_route(name.as_str()))
    }

    /// Resolve the route's factory and build its screen
    pub fn create(&self, route: &Route) -> NavResult<S> {
        Ok(self.resolve(route.name())?.create(route))
    }

    /// Whether `name` has a factory
    pub fn contains(&self, name: RouteName) -> bool {
        self.factories.contains_key(&name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = RouteName> + '_ {
        self.factories.keys().copied()
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no routes are registered
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<S> fmt::Debug for RouteTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
