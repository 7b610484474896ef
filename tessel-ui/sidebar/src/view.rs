use iced::widget::{
    Row, Space, Stack, button, container, mouse_area, opaque, text,
};
use iced::{Background, Color, Element, Length, Theme, alignment};
use tessel_ui_collapsible::CollapseContext;

use crate::error::SidebarError;
use crate::model::{PanelState, SidebarContext, SidebarPresentation};

const MENU_BUTTON_HEIGHT: f32 = 32.0;
const MENU_ICON_WIDTH: f32 = 24.0;
const MENU_BUTTON_PADDING: f32 = 4.0;
const GROUP_LABEL_SIZE: f32 = 12.0;
const SHEET_BACKDROP_ALPHA: f32 = 0.5;

/// Which slots of a menu button are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuButtonSlots {
    pub icon: bool,
    pub label: bool,
    pub badge: bool,
}

impl MenuButtonSlots {
    /// Collapsed buttons keep only the icon slot.
    pub fn resolve(
        ctx: CollapseContext,
        has_label: bool,
        has_badge: bool,
    ) -> Self {
        let expanded = !ctx.is_collapsed();
        Self {
            icon: true,
            label: expanded && has_label,
            badge: expanded && has_badge,
        }
    }
}

/// Sidebar menu entry with named icon, label and badge slots.
pub struct MenuButton<'a, Message: Clone + 'a> {
    icon: Element<'a, Message>,
    label: Option<Element<'a, Message>>,
    badge: Option<Element<'a, Message>>,
    active: bool,
    on_press: Option<Message>,
}

impl<'a, Message> MenuButton<'a, Message>
where
    Message: Clone + 'a,
{
    pub fn new(icon: impl Into<Element<'a, Message>>) -> Self {
        Self {
            icon: icon.into(),
            label: None,
            badge: None,
            active: false,
            on_press: None,
        }
    }

    pub fn label(mut self, label: impl Into<Element<'a, Message>>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<Element<'a, Message>>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// Slots this button renders under `ctx`.
    pub fn slots(&self, ctx: CollapseContext) -> MenuButtonSlots {
        let has_label = self.label.is_some();
        MenuButtonSlots::resolve(ctx, has_label, self.badge.is_some())
    }

    pub fn view(self, ctx: CollapseContext) -> Element<'a, Message> {
        let slots = self.slots(ctx);
        let active = self.active;

        let icon = container(self.icon)
            .width(Length::Fixed(MENU_ICON_WIDTH))
            .align_x(alignment::Horizontal::Center);
        let mut content = Row::new()
            .push(icon)
            .spacing(8.0)
            .align_y(alignment::Vertical::Center);

        if slots.label {
            if let Some(label) = self.label {
                content = content.push(container(label).width(Length::Fill));
            }
        }
        if slots.badge {
            if let Some(badge) = self.badge {
                content = content.push(badge);
            }
        }

        let width = if ctx.is_collapsed() {
            Length::Shrink
        } else {
            Length::Fill
        };

        let mut entry = button(content)
            .padding(MENU_BUTTON_PADDING)
            .width(width)
            .height(Length::Fixed(MENU_BUTTON_HEIGHT))
            .style(move |theme: &Theme, status| {
                let palette = theme.extended_palette();
                let background = match (active, status) {
                    (true, _) => Some(palette.primary.weak.color),
                    (false, button::Status::Hovered) => {
                        Some(palette.background.strong.color)
                    },
                    _ => None,
                };
                button::Style {
                    background: background.map(Background::Color),
                    text_color: palette.background.base.text,
                    border: iced::border::rounded(6.0),
                    ..button::Style::default()
                }
            });
        if let Some(message) = self.on_press {
            entry = entry.on_press(message);
        }

        entry.into()
    }
}

/// Group caption; collapsed groups render no label at all.
pub fn group_label<'a, Message: 'a>(
    ctx: CollapseContext,
    label: &'a str,
) -> Option<Element<'a, Message>> {
    if ctx.is_collapsed() {
        return None;
    }

    Some(
        container(text(label).size(GROUP_LABEL_SIZE).style(text::secondary))
            .padding([4, 8])
            .width(Length::Fill)
            .into(),
    )
}

/// Sidebar header choosing between a full and a compact slot.
pub fn header<'a, Message: 'a>(
    ctx: CollapseContext,
    full: impl Into<Element<'a, Message>>,
    compact: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(ctx.select(full.into(), compact.into()))
        .padding(8)
        .width(Length::Fill)
        .into()
}

/// Sidebar footer choosing between a full and a compact slot.
pub fn footer<'a, Message: 'a>(
    ctx: CollapseContext,
    full: impl Into<Element<'a, Message>>,
    compact: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(ctx.select(full.into(), compact.into()))
        .padding(8)
        .width(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

/// Glyph shown on the toggle trigger, pointing where a toggle moves.
///
/// Mobile layouts follow the sheet; desktop layouts follow the panel state.
pub fn trigger_glyph(ctx: &SidebarContext) -> &'static str {
    let expanded = if ctx.is_mobile {
        ctx.open_mobile
    } else {
        ctx.state() == PanelState::Expanded
    };

    if expanded { "\u{00AB}" } else { "\u{00BB}" }
}

/// Button toggling the sidebar. Requires a provider context.
pub fn trigger<'a, Message: Clone + 'a>(
    scope: Option<&SidebarContext>,
    on_toggle: Message,
) -> Result<Element<'a, Message>, SidebarError> {
    let ctx = SidebarContext::require(scope)?;

    Ok(button(text(trigger_glyph(ctx)))
        .on_press(on_toggle)
        .padding([2, 8])
        .style(button::text)
        .into())
}

/// Inline sidebar column sized for the current presentation.
pub fn sidebar<'a, Message: 'a>(
    ctx: &SidebarContext,
    width: f32,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    match ctx.presentation() {
        SidebarPresentation::Hidden | SidebarPresentation::Sheet { .. } => {
            Space::new().width(Length::Shrink).into()
        },
        SidebarPresentation::Expanded | SidebarPresentation::Rail => {
            panel(content.into(), width)
        },
    }
}

/// Overlay the mobile sheet on top of `base` while it is open.
pub fn sheet<'a, Message: Clone + 'a>(
    ctx: &SidebarContext,
    width: f32,
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    if ctx.presentation() != (SidebarPresentation::Sheet { open: true }) {
        return base.into();
    }

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(Color {
                    a: SHEET_BACKDROP_ALPHA,
                    ..Color::BLACK
                })),
                ..container::Style::default()
            }),
    )
    .on_press(on_dismiss);

    let drawer = Row::new()
        .push(opaque(panel(content.into(), width)))
        .height(Length::Fill);

    Stack::with_children(vec![base.into(), opaque(backdrop), drawer.into()])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn panel<'a, Message: 'a>(
    content: Element<'a, Message>,
    width: f32,
) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                ..container::Style::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use iced::widget::text;
    use tessel_ui_collapsible::{CollapseContext, CollapsibleMode};

    use super::{
        MenuButton, MenuButtonSlots, group_label, trigger, trigger_glyph,
    };
    use crate::error::SidebarError;
    use crate::model::SidebarContext;

    #[test]
    fn given_collapsed_context_when_resolving_slots_then_only_icon_is_shown() {
        let button: MenuButton<'_, ()> =
            MenuButton::new(text("i")).label(text("Inbox"));

        let slots = button.slots(CollapseContext::collapsed());

        assert_eq!(
            slots,
            MenuButtonSlots {
                icon: true,
                label: false,
                badge: false,
            }
        );
    }

    #[test]
    fn given_expanded_context_when_resolving_slots_then_all_slots_are_shown() {
        let button: MenuButton<'_, ()> = MenuButton::new(text("i"))
            .label(text("Inbox"))
            .badge(text("3"));

        let slots = button.slots(CollapseContext::expanded());

        assert!(slots.icon && slots.label && slots.badge);
    }

    #[test]
    fn given_missing_label_when_resolving_slots_then_label_is_not_shown() {
        let slots =
            MenuButtonSlots::resolve(CollapseContext::expanded(), false, true);

        assert!(!slots.label);
        assert!(slots.badge);
    }

    #[test]
    fn given_collapsed_context_when_rendering_group_label_then_nothing_is_rendered()
     {
        let collapsed = CollapseContext::collapsed();
        let expanded = CollapseContext::expanded();

        assert!(group_label::<()>(collapsed, "Projects").is_none());
        assert!(group_label::<()>(expanded, "Projects").is_some());
    }

    #[test]
    fn given_no_provider_when_building_trigger_then_missing_provider_is_returned()
    {
        let result = trigger::<()>(None, ());

        assert!(matches!(result, Err(SidebarError::MissingProvider)));
    }

    #[test]
    fn given_provider_context_when_building_trigger_then_glyph_tracks_state() {
        let mut ctx = SidebarContext {
            open: true,
            open_mobile: false,
            is_mobile: false,
            mode: CollapsibleMode::Icon,
        };
        assert_eq!(trigger_glyph(&ctx), "\u{00AB}");
        assert!(trigger::<()>(Some(&ctx), ()).is_ok());

        ctx.open = false;
        assert_eq!(trigger_glyph(&ctx), "\u{00BB}");
    }

    #[test]
    fn given_mobile_context_when_building_trigger_then_glyph_tracks_sheet() {
        let mut ctx = SidebarContext {
            open: true,
            open_mobile: false,
            is_mobile: true,
            mode: CollapsibleMode::Offcanvas,
        };
        assert_eq!(trigger_glyph(&ctx), "\u{00BB}");

        ctx.open_mobile = true;
        assert_eq!(trigger_glyph(&ctx), "\u{00AB}");
    }

    #[test]
    fn given_closed_panel_in_mode_none_when_building_trigger_then_glyph_expands()
    {
        let ctx = SidebarContext {
            open: false,
            open_mobile: false,
            is_mobile: false,
            mode: CollapsibleMode::None,
        };

        assert!(!ctx.is_collapsed());
        assert_eq!(trigger_glyph(&ctx), "\u{00BB}");
    }
}
