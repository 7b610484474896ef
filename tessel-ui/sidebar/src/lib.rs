//! Collapsible sidebar controller and collapse-aware leaves for [`iced`].
//!
//! A [`SidebarProvider`] owns the open state (controlled or uncontrolled),
//! the responsive mode, the toggle shortcut and the persisted preference.
//! Views never reach into the provider; they receive a [`SidebarContext`]
//! snapshot, or just its [`CollapseContext`], and pick between full and
//! compact rendering.
//!
//! The recommended flow:
//! 1. mount a provider once with a shared [`ListenerRegistry`];
//! 2. forward [`SidebarProvider::subscription`] and route its intents into
//!    [`SidebarProvider::reduce`];
//! 3. build leaves such as [`MenuButton`] and [`group_label`] from
//!    [`SidebarProvider::collapse_context`].
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::{column, row, text};
//! use iced::{Element, Subscription, Task};
//! use tessel_ui_sidebar::{
//!     ListenerRegistry, MenuButton, SidebarConfig, SidebarEvent,
//!     SidebarIntent, SidebarProvider, view,
//! };
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Sidebar(SidebarIntent),
//!     SidebarEffect(SidebarEvent),
//! }
//!
//! struct State {
//!     sidebar: SidebarProvider,
//! }
//!
//! fn new(registry: &ListenerRegistry) -> State {
//!     State {
//!         sidebar: SidebarProvider::mount(SidebarConfig::default(), registry),
//!     }
//! }
//!
//! fn update(state: &mut State, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Sidebar(intent) => {
//!             state.sidebar.reduce(intent).map(Message::SidebarEffect)
//!         },
//!         Message::SidebarEffect(_) => Task::none(),
//!     }
//! }
//!
//! fn subscription(state: &State) -> Subscription<Message> {
//!     state.sidebar.subscription().map(Message::Sidebar)
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     let ctx = state.sidebar.context();
//!     let menu = column![
//!         MenuButton::new(text("#"))
//!             .label(text("Inbox"))
//!             .on_press(Message::Sidebar(SidebarIntent::SetOpen(true)))
//!             .view(ctx.collapse()),
//!     ];
//!     let sidebar =
//!         view::sidebar(&ctx, state.sidebar.inline_width(), menu);
//!     let trigger = view::trigger(
//!         Some(&ctx),
//!         Message::Sidebar(SidebarIntent::Toggle),
//!     )
//!     .unwrap_or_else(|_| text("").into());
//!
//!     row![sidebar, trigger].into()
//! }
//! ```

mod config;
mod error;
mod event;
mod listeners;
mod model;
mod persistence;
mod provider;
mod reducer;
mod responsive;
mod shortcut;
pub mod view;

pub use config::{
    SIDEBAR_RAIL_WIDTH, SIDEBAR_SHEET_WIDTH, SIDEBAR_WIDTH, SidebarConfig,
};
pub use error::SidebarError;
pub use event::{SidebarEffect, SidebarEvent, SidebarIntent};
pub use listeners::{ListenerGuard, ListenerKind, ListenerRegistry};
pub use model::{PanelState, SidebarContext, SidebarPresentation};
pub use persistence::{
    DEFAULT_PREFERENCE_KEY, DEFAULT_PREFERENCE_MAX_AGE, FilePreferenceStore,
    MemoryPreferenceStore, PREFERENCE_PATH, PersistenceAdapter,
    PreferenceEntry, PreferenceStore,
};
pub use provider::{KeyOutcome, SidebarProvider, SidebarProviderBuilder};
pub use responsive::{MOBILE_BREAKPOINT, ResponsiveDetector};
pub use shortcut::{DEFAULT_SHORTCUT_KEY, KeyPress, KeyboardShortcutBinder};
pub use tessel_ui_collapsible::{
    CollapseContext, CollapsibleMode, OpenChange, OpenState,
};
pub use view::{MenuButton, MenuButtonSlots, group_label};
