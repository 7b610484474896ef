/// Intent events handled by the sidebar provider.
#[derive(Debug, Clone)]
pub enum SidebarIntent {
    Toggle,
    SetOpen(bool),
    SetOpenMobile(bool),
    /// A navigation entry was activated; an open mobile sheet closes.
    ItemActivated,
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Effect events produced by the sidebar reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEffect {
    /// Uncontrolled open state changed and was persisted.
    OpenChanged(bool),
    /// Controlled open state change was forwarded to its owner.
    OpenRequested(bool),
    MobileOpenChanged(bool),
    /// The toggle shortcut was consumed. Hosts must not run any other
    /// binding for the same press.
    ShortcutCaptured,
    /// Viewport crossed the breakpoint; layouts must be recomputed.
    LayoutChanged,
}

/// Sidebar event stream routed through the host update loop.
#[derive(Debug, Clone)]
pub enum SidebarEvent {
    /// Intent event reduced by the sidebar provider.
    Intent(SidebarIntent),
    /// External effect orchestrated by the host.
    Effect(SidebarEffect),
}
