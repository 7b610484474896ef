use iced::event::Status;
use iced::{Subscription, Task, window};
use tessel_ui_collapsible::{CollapseContext, OpenChange, OpenState};

use crate::config::SidebarConfig;
use crate::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use crate::listeners::ListenerRegistry;
use crate::model::{SidebarContext, SidebarPresentation};
use crate::persistence::{
    MemoryPreferenceStore, PersistenceAdapter, PreferenceStore,
};
use crate::reducer;
use crate::responsive::ResponsiveDetector;
use crate::shortcut::{KeyPress, KeyboardShortcutBinder};

/// Result of offering a key press to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyOutcome {
    /// `Captured` when the press was the shortcut and its default action
    /// must be suppressed.
    pub status: Status,
    /// Effect of the toggle triggered by a captured press.
    pub effect: Option<SidebarEffect>,
}

/// Configures and mounts a [`SidebarProvider`].
pub struct SidebarProviderBuilder {
    config: SidebarConfig,
    controlled: Option<OpenState>,
    persistence: PersistenceAdapter,
}

impl SidebarProviderBuilder {
    /// Hand ownership of the open value to the caller.
    pub fn controlled(
        mut self,
        open: bool,
        on_open_change: impl FnMut(bool) + 'static,
    ) -> Self {
        self.controlled = Some(OpenState::controlled(open, on_open_change));
        self
    }

    /// Persist the open preference in `store`.
    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.persistence = PersistenceAdapter::new(
            store,
            self.config.preference_key.clone(),
            self.config.preference_max_age(),
        );
        self
    }

    /// Resolve the initial state and bind global listeners.
    pub fn mount(self, registry: &ListenerRegistry) -> SidebarProvider {
        let open = match self.controlled {
            Some(controlled) => controlled,
            None => OpenState::uncontrolled(initial_open(
                &self.config,
                &self.persistence,
            )),
        };

        let mut responsive =
            ResponsiveDetector::new(self.config.mobile_breakpoint);
        responsive.activate(registry);
        let mut shortcut =
            KeyboardShortcutBinder::new(self.config.shortcut_key);
        shortcut.bind(registry);

        log::debug!(
            "sidebar mounted (open: {}, controlled: {}, mode: {:?})",
            open.open(),
            open.is_controlled(),
            self.config.mode
        );

        SidebarProvider {
            config: self.config,
            open,
            open_mobile: false,
            responsive,
            shortcut,
            persistence: self.persistence,
        }
    }
}

/// Sidebar controller owning open state, responsive mode, the toggle
/// shortcut, and preference persistence.
///
/// Global listeners are held for the lifetime of the provider and released
/// when it is dropped or unmounted.
#[derive(Debug)]
pub struct SidebarProvider {
    config: SidebarConfig,
    open: OpenState,
    open_mobile: bool,
    responsive: ResponsiveDetector,
    shortcut: KeyboardShortcutBinder,
    persistence: PersistenceAdapter,
}

impl SidebarProvider {
    pub fn builder(config: SidebarConfig) -> SidebarProviderBuilder {
        let persistence = PersistenceAdapter::new(
            MemoryPreferenceStore::new(),
            config.preference_key.clone(),
            config.preference_max_age(),
        );

        SidebarProviderBuilder {
            config,
            controlled: None,
            persistence,
        }
    }

    /// Mount an uncontrolled provider with an in-memory preference store.
    pub fn mount(config: SidebarConfig, registry: &ListenerRegistry) -> Self {
        Self::builder(config).mount(registry)
    }

    /// Release global listeners and drop the provider.
    pub fn unmount(mut self) {
        self.shortcut.unbind();
        self.responsive.deactivate();
        log::debug!("sidebar unmounted");
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    pub fn open(&self) -> bool {
        self.open.open()
    }

    pub fn is_controlled(&self) -> bool {
        self.open.is_controlled()
    }

    pub fn open_mobile(&self) -> bool {
        self.open_mobile
    }

    pub fn is_mobile(&self) -> bool {
        self.responsive.is_mobile()
    }

    /// Return whether the viewport width has been observed yet.
    pub fn is_measured(&self) -> bool {
        self.responsive.is_measured()
    }

    /// Snapshot published to descendant views.
    pub fn context(&self) -> SidebarContext {
        SidebarContext {
            open: self.open(),
            open_mobile: self.open_mobile,
            is_mobile: self.is_mobile(),
            mode: self.config.mode,
        }
    }

    pub fn collapse_context(&self) -> CollapseContext {
        self.context().collapse()
    }

    pub fn presentation(&self) -> SidebarPresentation {
        self.context().presentation()
    }

    /// Width the sidebar takes in the inline layout.
    pub fn inline_width(&self) -> f32 {
        match self.presentation() {
            SidebarPresentation::Expanded => self.config.expanded_width,
            SidebarPresentation::Rail => self.config.rail_width,
            SidebarPresentation::Hidden | SidebarPresentation::Sheet { .. } => {
                0.0
            },
        }
    }

    /// Request a new desktop open value.
    pub fn set_open(&mut self, open: bool) -> SidebarEffect {
        let change = self.open.set_open(open);
        self.apply_change(change)
    }

    /// Request a desktop open value computed from the current one.
    pub fn update_open(
        &mut self,
        next: impl FnOnce(bool) -> bool,
    ) -> SidebarEffect {
        let change = self.open.update_open(next);
        self.apply_change(change)
    }

    pub fn set_open_mobile(&mut self, open: bool) -> SidebarEffect {
        self.open_mobile = open;
        SidebarEffect::MobileOpenChanged(open)
    }

    /// Flip the sheet on mobile viewports and the inline panel otherwise.
    pub fn toggle(&mut self) -> SidebarEffect {
        if self.is_mobile() {
            self.set_open_mobile(!self.open_mobile)
        } else {
            let change = self.open.toggle();
            self.apply_change(change)
        }
    }

    /// Accept a new controlled value from the owner.
    pub fn sync_open(&mut self, open: bool) -> bool {
        self.open.sync(open)
    }

    /// Toggle on the shortcut chord and report whether the press was
    /// consumed.
    pub fn handle_key(&mut self, press: &KeyPress) -> KeyOutcome {
        match self.shortcut.handle(press) {
            Status::Captured => KeyOutcome {
                status: Status::Captured,
                effect: Some(self.toggle()),
            },
            Status::Ignored => KeyOutcome {
                status: Status::Ignored,
                effect: None,
            },
        }
    }

    /// Record a viewport width and report whether the mobile flag changed.
    pub fn observe_viewport(&mut self, width: f32) -> bool {
        self.responsive.observe(width)
    }

    /// Keyboard and window subscriptions while listeners are bound.
    pub fn subscription(&self) -> Subscription<SidebarIntent> {
        let mut subs = Vec::new();
        if self.shortcut.is_bound() {
            subs.push(iced::keyboard::listen().map(SidebarIntent::Keyboard));
        }
        if self.responsive.is_active() {
            subs.push(
                window::events()
                    .map(|(_id, event)| SidebarIntent::Window(event)),
            );
        }

        Subscription::batch(subs)
    }

    /// Reduce an intent event into state updates and effect events.
    pub fn reduce(&mut self, intent: SidebarIntent) -> Task<SidebarEvent> {
        reducer::reduce(self, intent)
    }

    fn apply_change(&mut self, change: OpenChange) -> SidebarEffect {
        match change {
            OpenChange::Applied(open) => {
                self.persistence.write(open);
                SidebarEffect::OpenChanged(open)
            },
            OpenChange::Requested(open) => SidebarEffect::OpenRequested(open),
        }
    }
}

fn initial_open(
    config: &SidebarConfig,
    persistence: &PersistenceAdapter,
) -> bool {
    if let Some(open) = config.default_open {
        return open;
    }

    if config.restore_persisted {
        if let Some(open) = persistence.read() {
            return open;
        }
    }

    true
}
