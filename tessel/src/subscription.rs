use iced::Subscription;

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    app.sidebar.subscription().map(AppEvent::Sidebar)
}
