/// Navigation destinations shown in the gallery sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavItem {
    Inbox,
    Drafts,
    Archive,
    Design,
    Engineering,
    Settings,
}

/// Named group of navigation entries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavGroup {
    pub(crate) title: &'static str,
    pub(crate) items: &'static [NavItem],
}

pub(crate) const NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        title: "Mail",
        items: &[NavItem::Inbox, NavItem::Drafts, NavItem::Archive],
    },
    NavGroup {
        title: "Projects",
        items: &[NavItem::Design, NavItem::Engineering],
    },
];

impl NavItem {
    pub(crate) fn icon(self) -> &'static str {
        match self {
            NavItem::Inbox => "\u{2709}",
            NavItem::Drafts => "\u{270E}",
            NavItem::Archive => "\u{2610}",
            NavItem::Design => "\u{25C6}",
            NavItem::Engineering => "\u{2699}",
            NavItem::Settings => "\u{2630}",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            NavItem::Inbox => "Inbox",
            NavItem::Drafts => "Drafts",
            NavItem::Archive => "Archive",
            NavItem::Design => "Design",
            NavItem::Engineering => "Engineering",
            NavItem::Settings => "Settings",
        }
    }

    /// Unread count shown next to the label.
    pub(crate) fn badge(self) -> Option<u32> {
        match self {
            NavItem::Inbox => Some(4),
            NavItem::Drafts => Some(1),
            _ => None,
        }
    }
}
