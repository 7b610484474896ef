use serde::{Deserialize, Serialize};

/// How a collapsed panel manifests.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CollapsibleMode {
    /// Collapsed panels are hidden entirely.
    #[default]
    Offcanvas,
    /// Collapsed panels shrink to an icon-only rail.
    Icon,
    /// The panel never collapses.
    None,
}

impl CollapsibleMode {
    /// Return whether the mode allows a collapsed presentation at all.
    pub fn can_collapse(self) -> bool {
        !matches!(self, CollapsibleMode::None)
    }
}

/// Derive the collapsed flag published to descendant leaves.
///
/// Mobile layouts present the panel as an overlay and never collapse inline.
pub fn effective_collapsed(
    open: bool,
    mode: CollapsibleMode,
    is_mobile: bool,
) -> bool {
    !is_mobile && !open && mode.can_collapse()
}

/// Read-only collapse flag threaded through leaf views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapseContext {
    is_collapsed: bool,
}

impl CollapseContext {
    pub fn new(is_collapsed: bool) -> Self {
        Self { is_collapsed }
    }

    pub fn expanded() -> Self {
        Self::new(false)
    }

    pub fn collapsed() -> Self {
        Self::new(true)
    }

    /// Resolve the context for a leaf that may live outside any provider.
    pub fn resolve(scope: Option<&CollapseContext>) -> Self {
        scope.copied().unwrap_or_default()
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    /// Pick between the expanded and collapsed variant of a value.
    pub fn select<T>(&self, expanded: T, collapsed: T) -> T {
        if self.is_collapsed { collapsed } else { expanded }
    }
}
