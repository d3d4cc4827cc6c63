#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn shot(id: &str) -> ShotRecord {
    ShotRecord { id: id.to_owned(), visual: format!("visual {id}"), ..Default::default() }
}

fn gallery(n: usize) -> Gallery {
    Gallery::new((1..=n).map(|i| shot(&i.to_string())).collect())
}

/// Press at `from`, move through `path`, release, then click `card`.
fn session(g: &mut Gallery, from: f64, path: &[f64], card: usize) -> Vec<GalleryAction> {
    g.on_pointer_down(from, 0.0);
    for x in path {
        g.on_pointer_move(*x);
    }
    g.on_pointer_up();
    g.on_card_click(card)
}

fn scrolls(actions: &[GalleryAction]) -> Vec<f64> {
    actions
        .iter()
        .filter_map(|a| match a {
            GalleryAction::ScrollTo(v) => Some(*v),
            _ => None,
        })
        .collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_gallery_is_idle_with_no_selection() {
    let g = gallery(3);
    assert_eq!(g.gesture(), GestureState::Idle);
    assert_eq!(g.selected(), None);
    assert!(!g.click_guard_armed());
    assert_eq!(g.shots().len(), 3);
}

#[test]
fn default_config_matches_reference_feel() {
    let config = GestureConfig::default();
    assert_eq!(config.sensitivity, 2.0);
    assert_eq!(config.drag_threshold_px, 5.0);
    assert_eq!(config.click_guard_ms, 50);
}

#[test]
fn empty_gallery_reports_empty() {
    assert!(Gallery::default().is_empty());
    assert!(!gallery(1).is_empty());
}

// =============================================================
// Gesture transitions
// =============================================================

#[test]
fn pointer_down_enters_pressed() {
    let mut g = gallery(3);
    let actions = g.on_pointer_down(100.0, 40.0);
    assert_eq!(g.gesture(), GestureState::Pressed { start_x: 100.0, start_scroll: 40.0 });
    assert_eq!(actions, vec![GalleryAction::SetCursor(Cursor::Grabbing)]);
}

#[test]
fn move_while_idle_does_nothing() {
    let mut g = gallery(3);
    assert!(g.on_pointer_move(500.0).is_empty());
    assert_eq!(g.gesture(), GestureState::Idle);
}

#[test]
fn small_move_stays_pressed_but_scrolls() {
    let mut g = gallery(3);
    g.on_pointer_down(100.0, 40.0);
    // 2px * 2.0 = 4px, under the threshold.
    let actions = g.on_pointer_move(102.0);
    assert!(matches!(g.gesture(), GestureState::Pressed { .. }));
    assert_eq!(scrolls(&actions), [36.0]);
}

#[test]
fn move_exactly_at_threshold_is_not_a_drag() {
    let mut g = gallery(3);
    g.on_pointer_down(100.0, 0.0);
    g.on_pointer_move(102.5);
    assert!(matches!(g.gesture(), GestureState::Pressed { .. }));
}

#[test]
fn move_past_threshold_enters_dragging() {
    let mut g = gallery(3);
    g.on_pointer_down(100.0, 300.0);
    let actions = g.on_pointer_move(90.0);
    assert_eq!(g.gesture(), GestureState::Dragging { start_x: 100.0, start_scroll: 300.0 });
    // walk = -10 * 2 = -20; scroll = 300 - (-20)
    assert_eq!(scrolls(&actions), [320.0]);
}

#[test]
fn dragging_is_sticky_when_pointer_returns() {
    let mut g = gallery(3);
    g.on_pointer_down(100.0, 0.0);
    g.on_pointer_move(150.0);
    let actions = g.on_pointer_move(100.0);
    assert!(matches!(g.gesture(), GestureState::Dragging { .. }));
    assert_eq!(scrolls(&actions), [0.0]);
}

#[test]
fn scroll_is_relative_to_press_not_last_move() {
    let mut g = gallery(3);
    g.on_pointer_down(0.0, 500.0);
    g.on_pointer_move(10.0);
    let actions = g.on_pointer_move(20.0);
    assert_eq!(scrolls(&actions), [460.0]);
}

#[test]
fn custom_sensitivity_and_threshold() {
    let config = GestureConfig { sensitivity: 1.0, drag_threshold_px: 20.0, click_guard_ms: 10 };
    let mut g = Gallery::with_config(vec![shot("1")], config);
    g.on_pointer_down(0.0, 100.0);
    let actions = g.on_pointer_move(15.0);
    assert!(matches!(g.gesture(), GestureState::Pressed { .. }));
    assert_eq!(scrolls(&actions), [85.0]);
    g.on_pointer_move(25.0);
    assert!(matches!(g.gesture(), GestureState::Dragging { .. }));
    assert_eq!(
        g.on_pointer_up(),
        vec![
            GalleryAction::SetCursor(Cursor::Grab),
            GalleryAction::ScheduleClickGuardRelease { after_ms: 10 }
        ]
    );
}

#[test]
fn release_after_press_returns_to_idle_without_guard() {
    let mut g = gallery(3);
    g.on_pointer_down(0.0, 0.0);
    let actions = g.on_pointer_up();
    assert_eq!(g.gesture(), GestureState::Idle);
    assert!(!g.click_guard_armed());
    assert_eq!(actions, vec![GalleryAction::SetCursor(Cursor::Grab)]);
}

#[test]
fn release_after_drag_arms_click_guard() {
    let mut g = gallery(3);
    g.on_pointer_down(0.0, 0.0);
    g.on_pointer_move(50.0);
    let actions = g.on_pointer_up();
    assert_eq!(g.gesture(), GestureState::Idle);
    assert!(g.click_guard_armed());
    assert!(actions.contains(&GalleryAction::ScheduleClickGuardRelease { after_ms: CLICK_GUARD_MS }));
}

#[test]
fn leave_after_drag_arms_click_guard() {
    let mut g = gallery(3);
    g.on_pointer_down(0.0, 0.0);
    g.on_pointer_move(-50.0);
    g.on_pointer_leave();
    assert_eq!(g.gesture(), GestureState::Idle);
    assert!(g.click_guard_armed());
}

#[test]
fn release_while_idle_is_noop() {
    let mut g = gallery(3);
    assert!(g.on_pointer_up().is_empty());
    assert!(g.on_pointer_leave().is_empty());
}

#[test]
fn pointer_down_clears_pending_guard() {
    let mut g = gallery(3);
    g.on_pointer_down(0.0, 0.0);
    g.on_pointer_move(50.0);
    g.on_pointer_up();
    assert!(g.click_guard_armed());
    g.on_pointer_down(0.0, 0.0);
    assert!(!g.click_guard_armed());
}

// =============================================================
// Click vs drag disambiguation
// =============================================================

#[test]
fn plain_click_selects_card() {
    let mut g = gallery(5);
    let actions = session(&mut g, 100.0, &[], 2);
    assert_eq!(g.selected(), Some(2));
    assert_eq!(g.selected_shot().map(|s| s.id.as_str()), Some("3"));
    assert_eq!(actions, vec![GalleryAction::SelectionChanged(Some(2))]);
}

#[test]
fn jittery_click_under_threshold_selects() {
    let mut g = gallery(5);
    session(&mut g, 100.0, &[101.0, 99.0, 102.0], 1);
    assert_eq!(g.selected(), Some(1));
}

#[test]
fn drag_release_does_not_select() {
    let mut g = gallery(5);
    let actions = session(&mut g, 100.0, &[80.0, 40.0], 4);
    assert_eq!(g.selected(), None);
    assert!(actions.is_empty());
}

#[test]
fn drag_does_not_change_existing_selection() {
    let mut g = gallery(5);
    session(&mut g, 0.0, &[], 0);
    session(&mut g, 0.0, &[30.0], 3);
    assert_eq!(g.selected(), Some(0));
}

#[test]
fn click_after_guard_release_selects() {
    let mut g = gallery(5);
    session(&mut g, 0.0, &[30.0], 3);
    g.release_click_guard();
    g.on_card_click(3);
    assert_eq!(g.selected(), Some(3));
}

#[test]
fn clicking_another_card_replaces_selection() {
    let mut g = gallery(5);
    session(&mut g, 0.0, &[], 0);
    session(&mut g, 0.0, &[], 4);
    assert_eq!(g.selected(), Some(4));
}

#[test]
fn clicking_selected_card_again_is_noop() {
    let mut g = gallery(5);
    session(&mut g, 0.0, &[], 1);
    assert!(g.on_card_click(1).is_empty());
    assert_eq!(g.selected(), Some(1));
}

#[test]
fn click_out_of_range_is_ignored() {
    let mut g = gallery(2);
    assert!(g.on_card_click(2).is_empty());
    assert_eq!(g.selected(), None);
}

#[test]
fn selection_survives_scrolling() {
    let mut g = gallery(5);
    session(&mut g, 0.0, &[], 2);
    g.on_pointer_down(0.0, 0.0);
    g.on_pointer_move(200.0);
    g.on_pointer_up();
    assert_eq!(g.selected(), Some(2));
}

// =============================================================
// Dismiss / load
// =============================================================

#[test]
fn dismiss_clears_selection() {
    let mut g = gallery(3);
    session(&mut g, 0.0, &[], 1);
    assert_eq!(g.dismiss(), vec![GalleryAction::SelectionChanged(None)]);
    assert_eq!(g.selected(), None);
    assert!(g.selected_shot().is_none());
}

#[test]
fn dismiss_without_selection_is_noop() {
    let mut g = gallery(3);
    assert!(g.dismiss().is_empty());
}

#[test]
fn load_replaces_shots_and_resets_state() {
    let mut g = gallery(3);
    session(&mut g, 0.0, &[], 2);
    g.on_pointer_down(0.0, 0.0);
    g.load(vec![shot("9")]);
    assert_eq!(g.shots().len(), 1);
    assert_eq!(g.selected(), None);
    assert_eq!(g.gesture(), GestureState::Idle);
}

#[test]
fn cursor_css_values() {
    assert_eq!(Cursor::Grab.as_css(), "grab");
    assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
}

#[test]
fn gesture_is_active_only_while_held() {
    assert!(!GestureState::Idle.is_active());
    assert!(GestureState::Pressed { start_x: 0.0, start_scroll: 0.0 }.is_active());
    assert!(GestureState::Dragging { start_x: 0.0, start_scroll: 0.0 }.is_active());
}

#[test]
fn pointer_handlers_leave_shots_and_selection_alone() {
    let mut g = gallery(4);
    g.on_card_click(2);
    let shots_before = g.shots().to_vec();

    let mut actions = g.on_pointer_down(100.0, 0.0);
    for x in [98.0, 90.0, 40.0, 10.0] {
        actions.extend(g.on_pointer_move(x));
    }
    actions.extend(g.on_pointer_up());
    g.release_click_guard();
    actions.extend(g.on_pointer_down(10.0, 0.0));
    actions.extend(g.on_pointer_leave());

    assert!(!actions.iter().any(|a| matches!(a, GalleryAction::SelectionChanged(_))));
    assert_eq!(g.shots(), shots_before.as_slice());
    assert_eq!(g.selected(), Some(2));
}
