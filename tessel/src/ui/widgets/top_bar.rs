use iced::widget::{container, row, text};
use iced::{Element, Length, alignment};
use tessel_ui_sidebar::SidebarContext;
use tessel_ui_sidebar::view::trigger;

const TOP_BAR_HEIGHT: f32 = 40.0;
const TOP_BAR_PADDING: f32 = 8.0;
const TOP_BAR_SHORTCUT_HINT: &str = "Ctrl/\u{2318} + B";

/// Events emitted by the top bar.
#[derive(Debug, Clone)]
pub(crate) enum TopBarEvent {
    ToggleSidebar,
}

/// Props for rendering the top bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TopBarProps<'a> {
    pub(crate) context: Option<SidebarContext>,
    pub(crate) title: &'a str,
}

pub(crate) fn view<'a>(props: TopBarProps<'a>) -> Element<'a, TopBarEvent> {
    let toggle: Element<'a, TopBarEvent> =
        match trigger(props.context.as_ref(), TopBarEvent::ToggleSidebar) {
            Ok(button) => button,
            Err(err) => text(err.to_string()).into(),
        };

    let bar = row![
        toggle,
        container(text(props.title).size(16.0)).width(Length::Fill),
        text(TOP_BAR_SHORTCUT_HINT).size(12.0).style(text::secondary),
    ]
    .spacing(8.0)
    .align_y(alignment::Vertical::Center);

    container(bar)
        .padding([0.0, TOP_BAR_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}
