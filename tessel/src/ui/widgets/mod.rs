pub(crate) mod content_panel;
pub(crate) mod nav_menu;
pub(crate) mod top_bar;
