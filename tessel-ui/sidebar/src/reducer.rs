use iced::event::Status;
use iced::{Task, window};

use crate::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use crate::provider::SidebarProvider;
use crate::shortcut::KeyPress;

/// Reduce a sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    provider: &mut SidebarProvider,
    intent: SidebarIntent,
) -> Task<SidebarEvent> {
    Task::batch(events(provider, intent).into_iter().map(Task::done))
}

/// Apply `intent` and return the events it produces, in emission order.
pub(crate) fn events(
    provider: &mut SidebarProvider,
    intent: SidebarIntent,
) -> Vec<SidebarEvent> {
    match intent {
        SidebarIntent::Toggle => vec![effect(provider.toggle())],
        SidebarIntent::SetOpen(open) => vec![effect(provider.set_open(open))],
        SidebarIntent::SetOpenMobile(open) => {
            vec![effect(provider.set_open_mobile(open))]
        },
        SidebarIntent::ItemActivated => {
            if provider.open_mobile() {
                vec![SidebarEvent::Intent(SidebarIntent::SetOpenMobile(false))]
            } else {
                Vec::new()
            }
        },
        SidebarIntent::Keyboard(event) => {
            let Some(press) = KeyPress::from_event(&event) else {
                return Vec::new();
            };

            let outcome = provider.handle_key(&press);
            match (outcome.status, outcome.effect) {
                (Status::Captured, Some(toggled)) => vec![
                    effect(SidebarEffect::ShortcutCaptured),
                    effect(toggled),
                ],
                _ => Vec::new(),
            }
        },
        SidebarIntent::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => {
            if provider.observe_viewport(size.width) {
                vec![effect(SidebarEffect::LayoutChanged)]
            } else {
                Vec::new()
            }
        },
        SidebarIntent::Window(_) => Vec::new(),
    }
}

fn effect(effect: SidebarEffect) -> SidebarEvent {
    SidebarEvent::Effect(effect)
}
