//! Routed sections and the full-screen mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use motion::navigator::SectionLinks;

/// The four routed views, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Project,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Home, Self::About, Self::Project, Self::Contact];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Project => "/project",
            Self::Contact => "/contact",
        }
    }

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::About => "ABOUT",
            Self::Project => "PROJECT",
            Self::Contact => "CONTACT",
        }
    }

    /// Class added to `<body>` while the section is mounted.
    #[must_use]
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Home => "home-page",
            Self::About => "about-page",
            Self::Project => "project-page",
            Self::Contact => "contact-page",
        }
    }

    /// Match a pathname, ignoring one trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        Self::ALL.into_iter().find(|s| s.path() == trimmed)
    }

    /// Wheel/swipe neighbours for sections that take part in boundary
    /// navigation. Home and Project scroll normally.
    #[must_use]
    pub fn navigation_links(self) -> Option<SectionLinks<Section>> {
        match self {
            Self::About => Some(SectionLinks { up: Some(Self::Home), down: Some(Self::Project) }),
            Self::Contact => Some(SectionLinks { up: Some(Self::Project), down: None }),
            Self::Home | Self::Project => None,
        }
    }
}

/// Open/closed state of the full-screen menu used on phones and tablets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Returns `true` if the key closed the menu.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.open = false;
            return true;
        }
        false
    }

    /// Inline `overflow` value for `<body>`; an empty string restores the
    /// stylesheet default.
    #[must_use]
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }

    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}
