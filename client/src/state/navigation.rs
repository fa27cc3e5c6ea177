//! Static navigation sections rendered by the sidebar.
//!
//! The sidebar treats these as opaque data: it renders each section as a
//! collapsible group of links and highlights the entry matching the current
//! path.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Sections expanded when the sidebar first renders.
pub const DEFAULT_EXPANDED: [&str; 2] = ["learning", "account"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub title: &'static str,
    pub items: &'static [NavItem],
}

const SECTIONS: &[NavSection] = &[
    NavSection {
        id: "main",
        title: "Main",
        items: &[
            NavItem { label: "Home", href: "/" },
            NavItem { label: "Courses", href: "/courses" },
            NavItem { label: "Community", href: "/community" },
        ],
    },
    NavSection {
        id: "learning",
        title: "Learning",
        items: &[
            NavItem { label: "My courses", href: "/student/courses" },
            NavItem { label: "Exams", href: "/student/exams" },
            NavItem { label: "Certificates", href: "/certificates" },
        ],
    },
    NavSection {
        id: "account",
        title: "Account",
        items: &[
            NavItem { label: "Subscription", href: "/subscription" },
            NavItem { label: "Settings", href: "/settings" },
            NavItem { label: "Support", href: "/support" },
        ],
    },
];

/// Navigation sections shown in the sidebar.
pub fn sidebar_sections() -> &'static [NavSection] {
    SECTIONS
}

/// Whether `href` should be highlighted at `pathname`.
///
/// The root link only matches the root path; every other link matches any
/// path that starts with it.
pub fn is_active_link(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname.starts_with(href)
}

/// Toggle `id` in the list of expanded sections.
pub fn toggle_section(expanded: &mut Vec<&'static str>, id: &'static str) {
    if let Some(pos) = expanded.iter().position(|s| *s == id) {
        expanded.remove(pos);
    } else {
        expanded.push(id);
    }
}
