use iced::widget::{Column, Space, column, row, text};
use iced::{Element, Length, alignment};
use tessel_ui_sidebar::view::{footer, header};
use tessel_ui_sidebar::{CollapseContext, MenuButton, group_label};

use crate::model::{NAV_GROUPS, NavItem};

const NAV_MENU_SPACING: f32 = 2.0;
const NAV_MENU_PADDING: f32 = 6.0;
const NAV_MENU_BRAND_SIZE: f32 = 16.0;
const NAV_MENU_BRAND_GLYPH: &str = "\u{25A3}";

/// Events emitted by the navigation menu.
#[derive(Debug, Clone)]
pub(crate) enum NavMenuEvent {
    Select(NavItem),
}

/// Props for rendering the navigation menu.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavMenuProps {
    pub(crate) collapse: CollapseContext,
    pub(crate) active: NavItem,
}

/// Grouped navigation entries with header and footer slots.
pub(crate) fn view<'a>(props: NavMenuProps) -> Element<'a, NavMenuEvent> {
    let collapse = props.collapse;

    let brand = header(
        collapse,
        row![
            text(NAV_MENU_BRAND_GLYPH).size(NAV_MENU_BRAND_SIZE),
            text("Tessel").size(NAV_MENU_BRAND_SIZE),
        ]
        .spacing(8.0)
        .align_y(alignment::Vertical::Center),
        text(NAV_MENU_BRAND_GLYPH).size(NAV_MENU_BRAND_SIZE),
    );

    let mut groups = Column::new().spacing(NAV_MENU_SPACING);
    for group in NAV_GROUPS {
        if let Some(label) = group_label(collapse, group.title) {
            groups = groups.push(label);
        }
        for item in group.items {
            groups = groups.push(entry(*item, props));
        }
    }

    let settings = footer(
        collapse,
        entry(NavItem::Settings, props),
        entry(NavItem::Settings, props),
    );

    column![
        brand,
        groups,
        Space::new().height(Length::Fill),
        settings,
    ]
    .padding(NAV_MENU_PADDING)
    .height(Length::Fill)
    .into()
}

fn entry<'a>(item: NavItem, props: NavMenuProps) -> Element<'a, NavMenuEvent> {
    let mut button = MenuButton::new(text(item.icon()))
        .label(text(item.label()))
        .active(item == props.active)
        .on_press(NavMenuEvent::Select(item));

    if let Some(count) = item.badge() {
        button = button.badge(text(count.to_string()).size(12.0));
    }

    button.view(props.collapse)
}
