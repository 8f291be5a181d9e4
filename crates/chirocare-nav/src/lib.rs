//! # ChiroCare Navigation
//!
//! Navigation core for the ChiroCare patient app:
//!
//! - [`Route`] / [`RouteName`]: typed destinations with validated parameters
//! - [`RouteTable`]: immutable route name → screen factory mapping
//! - [`BackStack`]: non-empty LIFO history of activated routes
//! - [`Router`]: the navigation API screens talk to
//!
//! The crate is generic over the screen type `S`; it never inspects what a
//! factory builds. All operations are synchronous and meant to run on the
//! single UI event thread.

pub mod errors;
pub mod observer;
pub mod route;
pub mod router;
pub mod stack;
pub mod table;

pub use errors::{NavError, NavResult};
pub use observer::{NavEvent, NavEventKind, NavigationObserver};
pub use route::{BookingId, ChiroId, ConversationId, Route, RouteName};
pub use router::{NavAction, NavOptions, NavSnapshot, Router};
pub use stack::{BackStack, BackStackEntry};
pub use table::{BoxedFactory, RouteTable, RouteTableBuilder, ScreenFactory};
