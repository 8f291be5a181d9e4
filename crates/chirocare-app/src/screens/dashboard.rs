//! Dashboard shell

use chirocare_nav::{NavAction, Route};

use crate::data;

/// Entry points shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTile {
    /// Chiropractor directory
    FindChiropractor,
    /// Conversation list
    Messages,
    /// Password change notice
    ChangePassword,
}

impl DashboardTile {
    /// Tiles in display order
    pub fn all() -> &'static [DashboardTile] {
        &[
            DashboardTile::FindChiropractor,
            DashboardTile::Messages,
            DashboardTile::ChangePassword,
        ]
    }

    /// Tile label
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTile::FindChiropractor => "Find a chiropractor",
            DashboardTile::Messages => "Messages",
            DashboardTile::ChangePassword => "Change password",
        }
    }

    fn route(&self) -> Route {
        match self {
            DashboardTile::FindChiropractor => Route::ChiroList,
            DashboardTile::Messages => Route::Messages,
            DashboardTile::ChangePassword => Route::ChangePassword,
        }
    }
}

/// Home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardScreen {
    unread: u32,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    /// Build from the sample inbox
    pub fn new() -> Self {
        let unread = data::conversations()
            .iter()
            .fold(0u32, |total, preview| total.saturating_add(preview.unread));
        Self { unread }
    }

    /// Unread messages badge
    pub fn unread(&self) -> u32 {
        self.unread
    }

    /// Open a tile
    pub fn open(&self, tile: DashboardTile) -> NavAction {
        NavAction::push(tile.route())
    }

    /// Sign out and drop history
    pub fn sign_out(&self) -> NavAction {
        NavAction::Reset(Route::Login)
    }
}
