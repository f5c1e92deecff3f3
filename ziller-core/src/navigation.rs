//! Header navigation and in-page scrolling.

/// Icon of the closed menu button.
pub const MENU_ICON_CLOSED: &str = "☰";
/// Icon of the open menu button.
pub const MENU_ICON_OPEN: &str = "✕";

/// Page served for the site root.
pub const INDEX_PAGE: &str = "index.html";

/// Open/closed state of the mobile navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    breakpoint_px: u32,
}

impl NavMenu {
    /// A closed menu that collapses below `breakpoint_px`.
    #[must_use]
    pub const fn new(breakpoint_px: u32) -> Self {
        Self {
            open: false,
            breakpoint_px,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the button's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        if self.open { MENU_ICON_OPEN } else { MENU_ICON_CLOSED }
    }

    /// Whether a viewport this wide shows the collapsed mobile layout.
    #[must_use]
    pub const fn is_mobile(&self, viewport_width: u32) -> bool {
        viewport_width < self.breakpoint_px
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            open: !self.open,
            ..self
        }
    }

    /// Following a link closes the menu on mobile; desktop keeps its state.
    #[must_use]
    pub const fn after_link_click(self, viewport_width: u32) -> Self {
        if self.is_mobile(viewport_width) {
            Self {
                open: false,
                ..self
            }
        } else {
            self
        }
    }

    /// Growing the window to desktop width closes an open menu.
    #[must_use]
    pub const fn after_resize(self, viewport_width: u32) -> Self {
        if self.is_mobile(viewport_width) {
            self
        } else {
            Self {
                open: false,
                ..self
            }
        }
    }
}

/// The page file a path points at; the site root maps to `index.html`.
#[must_use]
pub fn active_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some("") | None => INDEX_PAGE,
        Some(page) => page,
    }
}

/// Whether a navigation link to `href` is the current page.
#[must_use]
pub fn is_active_link(href: &str, current_path: &str) -> bool {
    href == active_page(current_path)
}

/// How partner logo links open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    SameTab,
    NewTab,
}

impl LinkTarget {
    /// `target` attribute value, if any.
    #[must_use]
    pub const fn target(self) -> Option<&'static str> {
        match self {
            Self::SameTab => None,
            Self::NewTab => Some("_blank"),
        }
    }

    /// `rel` attribute value, if any.
    #[must_use]
    pub const fn rel(self) -> Option<&'static str> {
        match self {
            Self::SameTab => None,
            Self::NewTab => Some("noopener noreferrer"),
        }
    }
}

/// Partner sites open in a new tab on desktop and in the same tab on phones.
#[must_use]
pub const fn partner_link_target(viewport_width: u32, breakpoint_px: u32) -> LinkTarget {
    if viewport_width < breakpoint_px {
        LinkTarget::SameTab
    } else {
        LinkTarget::NewTab
    }
}

/// Only real fragment links scroll; a bare `#` does nothing.
#[must_use]
pub fn is_scroll_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Document offset to scroll to so the target clears the sticky header.
#[must_use]
pub fn scroll_offset(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}
