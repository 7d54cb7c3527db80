use super::*;

const SECTIONS: [&str; 4] = ["home", "about", "portfolio", "contact"];

fn active_controls(nav: &NavState, controls: &[&str]) -> usize {
    controls.iter().filter(|c| nav.is_control_active(c)).count()
}

fn active_sections(nav: &NavState) -> usize {
    SECTIONS.iter().filter(|s| nav.is_section_active(s)).count()
}

#[test]
fn new_nav_has_nothing_active() {
    let nav = NavState::new(SECTIONS);
    assert_eq!(nav.active(), None);
    assert_eq!(nav.visible_section(), None);
    assert_eq!(active_sections(&nav), 0);
}

#[test]
fn starting_at_marks_initial_section() {
    let nav = NavState::starting_at(SECTIONS, "home");
    assert!(nav.is_control_active("home"));
    assert!(nav.is_section_active("home"));
}

#[test]
fn select_existing_section_shows_it() {
    let mut nav = NavState::new(SECTIONS);
    assert_eq!(nav.select("about"), Selection::Shown);
    assert_eq!(nav.visible_section(), Some("about"));
}

#[test]
fn second_click_leaves_exactly_one_control_and_section_active() {
    let mut nav = NavState::starting_at(SECTIONS, "home");
    nav.select("portfolio");
    assert_eq!(active_controls(&nav, &SECTIONS), 1);
    assert_eq!(active_sections(&nav), 1);
    assert!(nav.is_control_active("portfolio"));
    assert!(!nav.is_control_active("home"));
    assert!(nav.is_section_active("portfolio"));
    assert!(!nav.is_section_active("home"));
}

#[test]
fn unknown_id_marks_control_but_shows_no_section() {
    let mut nav = NavState::starting_at(SECTIONS, "home");
    assert_eq!(nav.select("blogs"), Selection::Unresolved);
    assert!(nav.is_control_active("blogs"));
    assert!(!nav.is_control_active("home"));
    assert_eq!(active_sections(&nav), 0);
    assert_eq!(nav.visible_section(), None);
}

#[test]
fn recovering_from_unknown_id_shows_section_again() {
    let mut nav = NavState::starting_at(SECTIONS, "home");
    nav.select("missing");
    nav.select("contact");
    assert_eq!(nav.visible_section(), Some("contact"));
    assert_eq!(active_sections(&nav), 1);
}

#[test]
fn reselecting_same_section_is_stable() {
    let mut nav = NavState::starting_at(SECTIONS, "about");
    assert_eq!(nav.select("about"), Selection::Shown);
    assert_eq!(active_controls(&nav, &SECTIONS), 1);
    assert_eq!(active_sections(&nav), 1);
}

#[test]
fn section_activity_follows_visible_section() {
    let mut nav = NavState::new(SECTIONS);
    for id in ["about", "blogs", "contact"] {
        nav.select(id);
        for section in SECTIONS {
            assert_eq!(nav.is_section_active(section), nav.visible_section() == Some(section));
        }
    }
}
