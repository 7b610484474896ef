#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Subscription, Task, Theme};
use tessel_ui_collapsible::OpenState;
use tessel_ui_sidebar::{
    FilePreferenceStore, ListenerRegistry, SidebarEffect, SidebarIntent,
    SidebarProvider,
};

use crate::model::NavItem;
use crate::settings::{self, APP_NAME, GallerySettings, SettingsLoadStatus};
use crate::ui::widgets::{content_panel, nav_menu, top_bar};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Sidebar provider
    Sidebar(SidebarIntent),
    SidebarEffect(SidebarEffect),
    // Widgets
    NavMenu(nav_menu::NavMenuEvent),
    TopBar(top_bar::TopBarEvent),
    ContentPanel(content_panel::ContentPanelEvent),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) registry: ListenerRegistry,
    pub(crate) sidebar: SidebarProvider,
    pub(crate) dark_theme: bool,
    pub(crate) active_item: NavItem,
    pub(crate) details: OpenState,
    pub(crate) last_effect: Option<SidebarEffect>,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = initial_settings();
        let registry = ListenerRegistry::new();
        let store = FilePreferenceStore::in_config_dir(APP_NAME);
        log::debug!("sidebar preferences at {}", store.path().display());

        let sidebar = SidebarProvider::builder(settings.sidebar)
            .store(store)
            .mount(&registry);

        let app = App {
            registry,
            sidebar,
            dark_theme: settings.dark_theme,
            active_item: NavItem::Inbox,
            details: OpenState::uncontrolled(false),
            last_effect: None,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        format!("Tessel \u{00B7} {}", self.active_item.label())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        if self.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

fn initial_settings() -> GallerySettings {
    let loaded = match settings::load_settings() {
        Ok(loaded) => loaded,
        Err(err) => {
            log::warn!("settings load failed: {err}");
            return GallerySettings::default();
        },
    };

    let (settings, status) = loaded.into_parts();
    match status {
        SettingsLoadStatus::Loaded => log::info!("settings loaded"),
        SettingsLoadStatus::Missing => {
            log::info!("settings file missing, using defaults")
        },
        SettingsLoadStatus::Invalid(message) => {
            log::warn!("settings file invalid, using defaults: {message}")
        },
    }

    settings
}
