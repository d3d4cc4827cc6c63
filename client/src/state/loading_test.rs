use super::*;

#[test]
fn starts_at_first_label() {
    let steps = LoadingSteps::default();
    assert_eq!(steps.step(), 0);
    assert_eq!(steps.label(), "解析核心需求 (Analyzing Request)...");
    assert!(!steps.is_last());
}

#[test]
fn advances_in_order() {
    let mut steps = LoadingSteps::default();
    for expected in &LOADING_STEPS[1..] {
        steps.advance();
        assert_eq!(steps.label(), *expected);
    }
    assert!(steps.is_last());
}

#[test]
fn saturates_at_last() {
    let mut steps = LoadingSteps::default();
    for _ in 0..20 {
        steps.advance();
    }
    assert_eq!(steps.step(), LOADING_STEPS.len() - 1);
    assert_eq!(steps.label(), "最终渲染 (Finalizing)...");
}

#[test]
fn dots_track_current_and_reached_steps() {
    let mut steps = LoadingSteps::default();
    steps.advance();
    steps.advance();
    let current: Vec<bool> = (0..LOADING_STEPS.len()).map(|i| steps.is_current(i)).collect();
    let reached: Vec<bool> = (0..LOADING_STEPS.len()).map(|i| steps.is_reached(i)).collect();
    assert_eq!(current, [false, false, true, false, false]);
    assert_eq!(reached, [true, true, true, false, false]);
}

#[test]
fn first_dot_is_reached_on_mount() {
    let steps = LoadingSteps::default();
    assert!(steps.is_current(0));
    assert!(steps.is_reached(0));
    assert!(!steps.is_reached(1));
}
