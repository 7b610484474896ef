use tessel_ui_collapsible::{
    CollapseContext, CollapsibleMode, effective_collapsed,
};

use crate::error::SidebarError;

/// Desktop open state as seen by leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Expanded,
    Collapsed,
}

/// How the sidebar is laid out for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPresentation {
    /// Full-width inline panel.
    Expanded,
    /// Icon-only inline rail.
    Rail,
    /// Collapsed off-canvas; nothing is laid out inline.
    Hidden,
    /// Overlay sheet used on narrow viewports.
    Sheet { open: bool },
}

impl SidebarPresentation {
    pub(crate) fn derive(
        open: bool,
        open_mobile: bool,
        is_mobile: bool,
        mode: CollapsibleMode,
    ) -> Self {
        if is_mobile {
            return SidebarPresentation::Sheet { open: open_mobile };
        }

        match (open, mode) {
            (true, _) | (false, CollapsibleMode::None) => {
                SidebarPresentation::Expanded
            },
            (false, CollapsibleMode::Icon) => SidebarPresentation::Rail,
            (false, CollapsibleMode::Offcanvas) => SidebarPresentation::Hidden,
        }
    }
}

/// Read-only snapshot published by a sidebar provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarContext {
    pub open: bool,
    pub open_mobile: bool,
    pub is_mobile: bool,
    pub mode: CollapsibleMode,
}

impl SidebarContext {
    /// Return the provider context or fail when none is in scope.
    pub fn require(scope: Option<&Self>) -> Result<&Self, SidebarError> {
        scope.ok_or(SidebarError::MissingProvider)
    }

    pub fn state(&self) -> PanelState {
        if self.open {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    pub fn is_collapsed(&self) -> bool {
        effective_collapsed(self.open, self.mode, self.is_mobile)
    }

    /// Collapse flag handed to leaf views.
    pub fn collapse(&self) -> CollapseContext {
        CollapseContext::new(self.is_collapsed())
    }

    pub fn presentation(&self) -> SidebarPresentation {
        SidebarPresentation::derive(
            self.open,
            self.open_mobile,
            self.is_mobile,
            self.mode,
        )
    }
}
