use iced::widget::{Column, button, container, row, text};
use iced::{Element, Length, alignment};

use crate::context::CollapseContext;

const CHEVRON_OPEN: &str = "\u{25BE}";
const CHEVRON_CLOSED: &str = "\u{25B8}";
const CHEVRON_WIDTH: f32 = 16.0;

/// Disclosure section showing its content only while open.
///
/// The section publishes its own [`CollapseContext`] so nested leaves can
/// follow the section state the same way they follow a sidebar.
pub struct Collapsible<'a, Message: Clone + 'a> {
    open: bool,
    header: Element<'a, Message>,
    content: Option<Element<'a, Message>>,
    on_toggle: Option<Message>,
    spacing: f32,
    padding: f32,
}

impl<'a, Message> Collapsible<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a section with the given open flag and header.
    pub fn new(open: bool, header: impl Into<Element<'a, Message>>) -> Self {
        Self {
            open,
            header: header.into(),
            content: None,
            on_toggle: None,
            spacing: 4.0,
            padding: 4.0,
        }
    }

    /// Set the body rendered while the section is open.
    pub fn content(mut self, content: impl Into<Element<'a, Message>>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Emit `message` when the header is pressed.
    pub fn on_toggle(mut self, message: Message) -> Self {
        self.on_toggle = Some(message);
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Context describing this section for nested leaves.
    pub fn context(&self) -> CollapseContext {
        CollapseContext::new(!self.open)
    }

    /// Build the section element.
    pub fn view(self) -> Element<'a, Message> {
        let chevron = container(text(chevron(self.open)))
            .width(Length::Fixed(CHEVRON_WIDTH))
            .align_x(alignment::Horizontal::Center);

        let header_row = row![chevron, self.header]
            .spacing(self.spacing)
            .align_y(alignment::Vertical::Center)
            .width(Length::Fill);

        let mut trigger = button(header_row)
            .padding(self.padding)
            .width(Length::Fill)
            .style(button::text);
        if let Some(message) = self.on_toggle {
            trigger = trigger.on_press(message);
        }

        let mut column = Column::new().push(trigger).spacing(self.spacing);
        if self.open {
            if let Some(content) = self.content {
                column = column.push(
                    container(content)
                        .padding([0.0, CHEVRON_WIDTH + self.spacing])
                        .width(Length::Fill),
                );
            }
        }

        column.width(Length::Fill).into()
    }
}

fn chevron(open: bool) -> &'static str {
    if open { CHEVRON_OPEN } else { CHEVRON_CLOSED }
}
