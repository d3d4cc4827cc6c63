//! Step labels cycled by the loading animation.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Labels shown while a generation is in flight, in order.
pub const LOADING_STEPS: [&str; 5] = [
    "解析核心需求 (Analyzing Request)...",
    "构建叙事结构 (Building Narrative)...",
    "生成分镜画面 (Drafting Shots)...",
    "优化关键参数 (Optimizing Parameters)...",
    "最终渲染 (Finalizing)...",
];

/// Milliseconds between step advances.
pub const STEP_INTERVAL_MS: u32 = 2000;

/// Current step of one loading session. Saturates at the last label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingSteps {
    step: usize,
}

impl LoadingSteps {
    pub fn step(self) -> usize {
        self.step
    }

    pub fn advance(&mut self) {
        if !self.is_last() {
            self.step += 1;
        }
    }

    pub fn is_last(self) -> bool {
        self.step + 1 >= LOADING_STEPS.len()
    }

    /// Dot `index` marks the step now running.
    pub fn is_current(self, index: usize) -> bool {
        self.step == index
    }

    /// Dot `index` has been reached: it is the current step or an earlier one.
    pub fn is_reached(self, index: usize) -> bool {
        index <= self.step
    }

    pub fn label(self) -> &'static str {
        LOADING_STEPS[self.step.min(LOADING_STEPS.len() - 1)]
    }
}
