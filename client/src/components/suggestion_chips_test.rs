use super::*;

#[test]
fn suggestions_are_distinct_and_non_blank() {
    let mut seen = std::collections::HashSet::new();
    for text in SUGGESTIONS {
        assert!(!text.trim().is_empty());
        assert!(seen.insert(text), "duplicate suggestion: {text}");
    }
}

#[test]
fn suggestions_are_usable_briefs() {
    let mut state = StudioState::default();
    state.brief = SUGGESTIONS[0].to_owned();
    assert!(state.can_generate());
}
