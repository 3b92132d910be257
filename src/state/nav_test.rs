use super::*;

// =============================================================
// Section
// =============================================================

#[test]
fn paths_are_distinct_and_ordered() {
    let paths: Vec<_> = Section::ALL.iter().map(|s| s.path()).collect();
    assert_eq!(paths, ["/", "/about", "/project", "/contact"]);
}

#[test]
fn labels_are_uppercase() {
    for section in Section::ALL {
        assert_eq!(section.label(), section.label().to_uppercase());
    }
}

#[test]
fn from_path_matches_every_section() {
    for section in Section::ALL {
        assert_eq!(Section::from_path(section.path()), Some(section));
    }
}

#[test]
fn from_path_ignores_trailing_slash() {
    assert_eq!(Section::from_path("/about/"), Some(Section::About));
    assert_eq!(Section::from_path("/"), Some(Section::Home));
}

#[test]
fn from_path_rejects_unknown() {
    assert_eq!(Section::from_path("/blog"), None);
    assert_eq!(Section::from_path(""), None);
}

#[test]
fn about_navigates_both_ways() {
    let links = Section::About.navigation_links().unwrap();
    assert_eq!(links.up, Some(Section::Home));
    assert_eq!(links.down, Some(Section::Project));
}

#[test]
fn contact_only_navigates_up() {
    let links = Section::Contact.navigation_links().unwrap();
    assert_eq!(links.up, Some(Section::Project));
    assert_eq!(links.down, None);
}

#[test]
fn home_and_project_have_no_boundary_navigation() {
    assert!(Section::Home.navigation_links().is_none());
    assert!(Section::Project.navigation_links().is_none());
}

// =============================================================
// MobileMenu
// =============================================================

#[test]
fn menu_starts_closed() {
    let menu = MobileMenu::default();
    assert!(!menu.open);
    assert_eq!(menu.body_overflow(), "");
    assert_eq!(menu.toggle_label(), "Open menu");
}

#[test]
fn toggle_opens_and_locks_scroll() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    assert!(menu.open);
    assert_eq!(menu.body_overflow(), "hidden");
    assert_eq!(menu.toggle_label(), "Close menu");
    menu.toggle();
    assert!(!menu.open);
}

#[test]
fn escape_closes_open_menu() {
    let mut menu = MobileMenu { open: true };
    assert!(menu.key_pressed("Escape"));
    assert!(!menu.open);
}

#[test]
fn other_keys_are_ignored() {
    let mut menu = MobileMenu { open: true };
    assert!(!menu.key_pressed("Enter"));
    assert!(menu.open);
}

#[test]
fn escape_on_closed_menu_reports_nothing() {
    let mut menu = MobileMenu::default();
    assert!(!menu.key_pressed("Escape"));
}

#[test]
fn close_is_idempotent() {
    let mut menu = MobileMenu { open: true };
    menu.close();
    menu.close();
    assert!(!menu.open);
}
