use iced::widget::{column, container, text};
use iced::{Element, Length};
use tessel_ui_collapsible::Collapsible;
use tessel_ui_sidebar::{SidebarEffect, SidebarPresentation};

const CONTENT_PANEL_PADDING: f32 = 16.0;
const CONTENT_PANEL_SPACING: f32 = 12.0;

/// Events emitted by the content panel.
#[derive(Debug, Clone)]
pub(crate) enum ContentPanelEvent {
    ToggleDetails,
}

/// Props for rendering the content panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentPanelProps<'a> {
    pub(crate) heading: &'a str,
    pub(crate) presentation: SidebarPresentation,
    pub(crate) last_effect: Option<SidebarEffect>,
    pub(crate) active_listeners: usize,
    pub(crate) details_open: bool,
}

/// Main pane describing the live sidebar state.
pub(crate) fn view<'a>(
    props: ContentPanelProps<'a>,
) -> Element<'a, ContentPanelEvent> {
    let details = column![
        text(format!("presentation: {}", describe(props.presentation))),
        text(format!(
            "last effect: {}",
            props
                .last_effect
                .map(|effect| format!("{effect:?}"))
                .unwrap_or_else(|| String::from("none")),
        )),
        text(format!("active listeners: {}", props.active_listeners)),
    ]
    .spacing(4.0);

    let section = Collapsible::new(props.details_open, text("Sidebar state"))
        .content(details)
        .on_toggle(ContentPanelEvent::ToggleDetails)
        .view();

    container(
        column![text(props.heading).size(24.0), section]
            .spacing(CONTENT_PANEL_SPACING),
    )
    .padding(CONTENT_PANEL_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn describe(presentation: SidebarPresentation) -> &'static str {
    match presentation {
        SidebarPresentation::Expanded => "expanded",
        SidebarPresentation::Rail => "icon rail",
        SidebarPresentation::Hidden => "hidden",
        SidebarPresentation::Sheet { open: true } => "sheet (open)",
        SidebarPresentation::Sheet { open: false } => "sheet (closed)",
    }
}
