//! # ChiroCare App
//!
//! Headless shell of the ChiroCare patient app, built on `chirocare-nav`:
//!
//! - [`AppCore`]: owns the router and dispatches screen actions
//! - [`AppConfig`]: layered TOML/env configuration
//! - [`screens`]: view-models for each route
//! - [`logging`]: `tracing` subscriber setup for hosts
//!
//! Rendering, theming and the chat/network backend live with the platform
//! hosts, not here.

pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod logging;
pub mod screens;

pub use crate::config::AppConfig;
pub use crate::core::{AppCore, BackHandler};
pub use crate::errors::{AppError, AppResult};
pub use crate::screens::Screen;
