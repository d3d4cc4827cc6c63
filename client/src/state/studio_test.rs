use super::*;

fn result(a: &str, b: &str) -> GenerationResult {
    GenerationResult { variant_a: a.into(), variant_b: b.into() }
}

fn with_brief(brief: &str) -> StudioState {
    StudioState { brief: brief.into(), ..StudioState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_idle() {
    let state = StudioState::default();
    assert!(!state.loading);
    assert!(!state.has_generated);
    assert!(state.result.is_none());
    assert_eq!(state.active, Variant::A);
    assert_eq!(state.request_seq, 0);
    assert_eq!(state.active_markdown(), "");
}

// =============================================================
// begin_generation
// =============================================================

#[test]
fn begin_with_blank_brief_is_noop() {
    let mut state = with_brief("  \n\t ");
    state.result = Some(result("a", "b"));
    let before = state.clone();
    assert!(state.begin_generation().is_none());
    assert_eq!(state, before);
}

#[test]
fn begin_sets_loading_and_clears() {
    let mut state = with_brief("  宣传片  ");
    state.error = "old".into();
    state.result = Some(result("a", "b"));
    let ticket = state.begin_generation().unwrap();
    assert_eq!(ticket.brief, "宣传片");
    assert_eq!(ticket.seq, 1);
    assert!(state.loading);
    assert!(state.error.is_empty());
    assert!(state.result.is_none());
}

#[test]
fn begin_keeps_has_generated() {
    let mut state = with_brief("x");
    state.has_generated = true;
    state.begin_generation().unwrap();
    assert!(state.has_generated);
}

// =============================================================
// complete / fail
// =============================================================

#[test]
fn complete_applies_latest() {
    let mut state = with_brief("x");
    let ticket = state.begin_generation().unwrap();
    assert!(state.complete_generation(&ticket, result("A", "B")));
    assert!(!state.loading);
    assert!(state.has_generated);
    assert_eq!(state.active_markdown(), "A");
}

#[test]
fn stale_completion_is_dropped() {
    let mut state = with_brief("x");
    let first = state.begin_generation().unwrap();
    let second = state.begin_generation().unwrap();
    assert!(!state.complete_generation(&first, result("old", "old")));
    assert!(state.loading);
    assert!(state.result.is_none());
    assert!(state.complete_generation(&second, result("new", "new")));
    assert_eq!(state.active_markdown(), "new");
}

#[test]
fn fail_sets_fixed_message() {
    let mut state = with_brief("x");
    let ticket = state.begin_generation().unwrap();
    assert!(state.fail_generation(&ticket, GENERATION_FAILED_MESSAGE));
    assert!(!state.loading);
    assert_eq!(state.error, GENERATION_FAILED_MESSAGE);
    assert!(state.result.is_none());
    assert!(!state.has_generated);
}

#[test]
fn stale_failure_is_dropped() {
    let mut state = with_brief("x");
    let first = state.begin_generation().unwrap();
    let second = state.begin_generation().unwrap();
    assert!(!state.fail_generation(&first, GENERATION_FAILED_MESSAGE));
    assert!(state.error.is_empty());
    assert!(state.loading);
    assert!(state.is_latest(&second));
}

// =============================================================
// Variants and controls
// =============================================================

#[test]
fn select_variant_switches_markdown() {
    let mut state = with_brief("x");
    let ticket = state.begin_generation().unwrap();
    state.complete_generation(&ticket, result("short", "long"));
    state.select_variant(Variant::B);
    assert_eq!(state.active_markdown(), "long");
    state.select_variant(Variant::A);
    assert_eq!(state.active_markdown(), "short");
}

#[test]
fn can_generate_needs_brief_and_idle() {
    let mut state = StudioState::default();
    assert!(!state.can_generate());
    state.brief = "x".into();
    assert!(state.can_generate());
    state.begin_generation();
    assert!(!state.can_generate());
}
