use iced::widget::{Space, column, container, row};
use iced::{Element, Length, Theme};
use tessel_ui_sidebar::view::{sheet, sidebar};
use tessel_ui_sidebar::{CollapseContext, SidebarIntent, SidebarPresentation};

use super::{App, AppEvent};
use crate::ui::widgets::{content_panel, nav_menu, top_bar};

const SEPARATOR_THICKNESS: f32 = 1.0;

pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let ctx = app.sidebar.context();

    let top = top_bar::view(top_bar::TopBarProps {
        context: Some(ctx),
        title: app.active_item.label(),
    })
    .map(AppEvent::TopBar);

    let content = content_panel::view(content_panel::ContentPanelProps {
        heading: app.active_item.label(),
        presentation: ctx.presentation(),
        last_effect: app.last_effect,
        active_listeners: app.registry.total_active(),
        details_open: app.details.open(),
    })
    .map(AppEvent::ContentPanel);

    let thickness = Length::Fixed(SEPARATOR_THICKNESS);
    let main = column![top, separator(Length::Fill, thickness), content]
        .width(Length::Fill)
        .height(Length::Fill);

    let base: Element<'_, AppEvent> = match ctx.presentation() {
        SidebarPresentation::Hidden | SidebarPresentation::Sheet { .. } => {
            main.into()
        },
        SidebarPresentation::Expanded | SidebarPresentation::Rail => {
            let inline = sidebar(
                &ctx,
                app.sidebar.inline_width(),
                nav_menu::view(nav_menu::NavMenuProps {
                    collapse: ctx.collapse(),
                    active: app.active_item,
                })
                .map(AppEvent::NavMenu),
            );
            row![
                inline,
                separator(thickness, Length::Fill),
                main
            ]
            .height(Length::Fill)
            .into()
        },
    };

    let drawer = nav_menu::view(nav_menu::NavMenuProps {
        collapse: CollapseContext::expanded(),
        active: app.active_item,
    })
    .map(AppEvent::NavMenu);

    sheet(
        &ctx,
        app.sidebar.config().sheet_width,
        base,
        drawer,
        AppEvent::Sidebar(SidebarIntent::SetOpenMobile(false)),
    )
}

fn separator<'a>(width: Length, height: Length) -> Element<'a, AppEvent> {
    container(Space::new())
        .width(width)
        .height(height)
        .style(|theme: &Theme| container::Style {
            background: Some(
                theme.extended_palette().background.strong.color.into(),
            ),
            ..container::Style::default()
        })
        .into()
}
