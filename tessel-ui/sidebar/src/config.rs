use std::time::Duration;

use serde::{Deserialize, Serialize};
use tessel_ui_collapsible::CollapsibleMode;

use crate::persistence::{DEFAULT_PREFERENCE_KEY, DEFAULT_PREFERENCE_MAX_AGE};
use crate::responsive::MOBILE_BREAKPOINT;
use crate::shortcut::DEFAULT_SHORTCUT_KEY;

/// Width of the expanded inline sidebar.
pub const SIDEBAR_WIDTH: f32 = 256.0;
/// Width of the icon-only rail.
pub const SIDEBAR_RAIL_WIDTH: f32 = 48.0;
/// Width of the mobile overlay sheet.
pub const SIDEBAR_SHEET_WIDTH: f32 = 288.0;

/// Per-instance sidebar settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Initial open value for uncontrolled sidebars.
    pub default_open: Option<bool>,
    pub mode: CollapsibleMode,
    pub mobile_breakpoint: f32,
    pub shortcut_key: char,
    pub preference_key: String,
    pub preference_max_age_secs: u64,
    /// Seed the initial open value from the stored preference.
    pub restore_persisted: bool,
    pub expanded_width: f32,
    pub rail_width: f32,
    pub sheet_width: f32,
}

impl SidebarConfig {
    pub fn preference_max_age(&self) -> Duration {
        Duration::from_secs(self.preference_max_age_secs)
    }

    pub fn with_mode(mut self, mode: CollapsibleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_default_open(mut self, open: bool) -> Self {
        self.default_open = Some(open);
        self
    }

    pub fn with_restore_persisted(mut self, restore: bool) -> Self {
        self.restore_persisted = restore;
        self
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            default_open: None,
            mode: CollapsibleMode::Offcanvas,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            shortcut_key: DEFAULT_SHORTCUT_KEY,
            preference_key: String::from(DEFAULT_PREFERENCE_KEY),
            preference_max_age_secs: DEFAULT_PREFERENCE_MAX_AGE.as_secs(),
            restore_persisted: false,
            expanded_width: SIDEBAR_WIDTH,
            rail_width: SIDEBAR_RAIL_WIDTH,
            sheet_width: SIDEBAR_SHEET_WIDTH,
        }
    }
}
