use super::*;

const CATEGORIES: [&str; 5] = ["web", "mobile", "web", "design", "mobile"];

fn settled(filter: &str) -> FilterState {
    let mut state = FilterState::new(CATEGORIES);
    let pass = state.apply(filter);
    state.settle_reveal(pass);
    state.settle_hide(pass);
    state
}

fn visible_indices(state: &FilterState) -> Vec<usize> {
    (0..state.len())
        .filter(|i| state.phase(*i) == Some(ItemPhase::Visible))
        .collect()
}

#[test]
fn new_gallery_shows_everything_under_all() {
    let state = FilterState::new(CATEGORIES);
    assert!(state.is_button_active(ALL));
    assert!(!state.is_button_active("web"));
    assert_eq!(visible_indices(&state), vec![0, 1, 2, 3, 4]);
}

#[test]
fn matches_all_and_exact_category() {
    assert!(matches(ALL, "web"));
    assert!(matches("web", "web"));
    assert!(!matches("web", "Web"));
    assert!(!matches("web", "mobile"));
}

#[test]
fn category_filter_reveals_only_matching_items() {
    let state = settled("web");
    assert_eq!(visible_indices(&state), vec![0, 2]);
    assert_eq!(state.phase(1), Some(ItemPhase::Hidden));
    assert_eq!(state.phase(3), Some(ItemPhase::Hidden));
}

#[test]
fn all_reveals_every_item_again() {
    let mut state = settled("design");
    let pass = state.apply(ALL);
    state.settle_reveal(pass);
    state.settle_hide(pass);
    assert_eq!(visible_indices(&state), vec![0, 1, 2, 3, 4]);
}

#[test]
fn only_clicked_button_is_active() {
    let mut state = FilterState::new(CATEGORIES);
    state.apply("mobile");
    assert!(state.is_button_active("mobile"));
    assert!(!state.is_button_active(ALL));
    assert!(!state.is_button_active("web"));
}

#[test]
fn hide_is_two_phase() {
    let mut state = FilterState::new(CATEGORIES);
    let pass = state.apply("web");
    assert_eq!(state.phase(1), Some(ItemPhase::Hiding));
    assert!(state.has_pending_hide());
    assert!(ItemPhase::Hiding.style().starts_with("display: block"));

    assert!(state.settle_hide(pass));
    assert_eq!(state.phase(1), Some(ItemPhase::Hidden));
    assert!(ItemPhase::Hidden.style().starts_with("display: none"));
}

#[test]
fn reveal_is_two_phase() {
    let mut state = settled("web");
    let pass = state.apply("mobile");
    assert_eq!(state.phase(1), Some(ItemPhase::Revealing));
    assert!(state.has_pending_reveal());
    assert!(state.settle_reveal(pass));
    assert_eq!(state.phase(1), Some(ItemPhase::Visible));
}

#[test]
fn already_visible_match_does_not_restart_reveal() {
    let mut state = FilterState::new(CATEGORIES);
    state.apply("web");
    assert_eq!(state.phase(0), Some(ItemPhase::Visible));
    assert!(!state.has_pending_reveal());
}

#[test]
fn stale_pass_cannot_hide_item_revealed_by_newer_click() {
    let mut state = FilterState::new(CATEGORIES);
    let first = state.apply("web");
    let second = state.apply(ALL);

    assert!(!state.settle_hide(first));
    assert_eq!(state.phase(1), Some(ItemPhase::Revealing));

    assert!(state.settle_reveal(second));
    assert_eq!(visible_indices(&state), vec![0, 1, 2, 3, 4]);
}

#[test]
fn unknown_category_hides_everything() {
    let state = settled("video");
    assert!(visible_indices(&state).is_empty());
}

#[test]
fn empty_gallery_reports_empty() {
    let state = FilterState::new(Vec::<String>::new());
    assert_eq!(state.len(), 0);
    assert_eq!(state.phase(0), None);
}
