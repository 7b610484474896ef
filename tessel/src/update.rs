use iced::Task;
use tessel_ui_sidebar::{SidebarEffect, SidebarEvent, SidebarIntent};

use super::{App, AppEvent};
use crate::ui::widgets::{content_panel, nav_menu, top_bar};

pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Sidebar(intent) => {
            app.sidebar.reduce(intent).map(route_sidebar_event)
        },
        AppEvent::SidebarEffect(effect) => {
            apply_sidebar_effect(app, effect);
            Task::none()
        },
        AppEvent::NavMenu(nav_menu::NavMenuEvent::Select(item)) => {
            app.active_item = item;
            Task::done(AppEvent::Sidebar(SidebarIntent::ItemActivated))
        },
        AppEvent::TopBar(top_bar::TopBarEvent::ToggleSidebar) => {
            Task::done(AppEvent::Sidebar(SidebarIntent::Toggle))
        },
        AppEvent::ContentPanel(
            content_panel::ContentPanelEvent::ToggleDetails,
        ) => {
            let _ = app.details.toggle();
            Task::none()
        },
    }
}

fn route_sidebar_event(event: SidebarEvent) -> AppEvent {
    match event {
        SidebarEvent::Intent(intent) => AppEvent::Sidebar(intent),
        SidebarEvent::Effect(effect) => AppEvent::SidebarEffect(effect),
    }
}

fn apply_sidebar_effect(app: &mut App, effect: SidebarEffect) {
    match &effect {
        SidebarEffect::OpenChanged(open) => {
            let state = if *open { "expanded" } else { "collapsed" };
            log::info!("sidebar {state}");
        },
        SidebarEffect::OpenRequested(open) => {
            log::debug!("sidebar open change requested: {open}");
        },
        SidebarEffect::MobileOpenChanged(open) => {
            log::debug!("sidebar sheet open: {open}");
        },
        SidebarEffect::ShortcutCaptured => {
            log::debug!("sidebar shortcut captured");
            return;
        },
        SidebarEffect::LayoutChanged => {
            log::info!(
                "layout switched to {}",
                if app.sidebar.is_mobile() { "mobile" } else { "desktop" }
            );
        },
    }
    app.last_effect = Some(effect);
}

#[cfg(test)]
mod tests {
    use tessel_ui_collapsible::OpenState;
    use tessel_ui_sidebar::{
        ListenerRegistry, SidebarConfig, SidebarEffect, SidebarProvider,
    };

    use super::update;
    use crate::app::{App, AppEvent};
    use crate::model::NavItem;
    use crate::ui::widgets::{content_panel, nav_menu};

    fn test_app() -> App {
        let registry = ListenerRegistry::new();
        let sidebar =
            SidebarProvider::mount(SidebarConfig::default(), &registry);
        App {
            registry,
            sidebar,
            dark_theme: true,
            active_item: NavItem::Inbox,
            details: OpenState::uncontrolled(false),
            last_effect: None,
        }
    }

    #[test]
    fn given_nav_select_event_when_updated_then_active_item_changes() {
        let mut app = test_app();

        let _task = update(
            &mut app,
            AppEvent::NavMenu(nav_menu::NavMenuEvent::Select(NavItem::Design)),
        );

        assert_eq!(app.active_item, NavItem::Design);
    }

    #[test]
    fn given_details_toggle_event_when_updated_then_section_opens() {
        let mut app = test_app();

        let _task = update(
            &mut app,
            AppEvent::ContentPanel(
                content_panel::ContentPanelEvent::ToggleDetails,
            ),
        );

        assert!(app.details.open());
    }

    #[test]
    fn given_sidebar_effect_when_updated_then_it_is_recorded() {
        let mut app = test_app();

        let _task = update(
            &mut app,
            AppEvent::SidebarEffect(SidebarEffect::OpenChanged(false)),
        );

        assert_eq!(app.last_effect, Some(SidebarEffect::OpenChanged(false)));
    }

    #[test]
    fn given_shortcut_capture_when_updated_then_last_effect_is_kept() {
        let mut app = test_app();
        app.last_effect = Some(SidebarEffect::OpenChanged(false));

        let _task = update(
            &mut app,
            AppEvent::SidebarEffect(SidebarEffect::ShortcutCaptured),
        );

        assert_eq!(app.last_effect, Some(SidebarEffect::OpenChanged(false)));
    }
}
