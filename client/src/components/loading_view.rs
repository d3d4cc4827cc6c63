//! Indeterminate loading animation with cycling step labels.

use leptos::prelude::*;

use crate::state::loading::{LOADING_STEPS, LoadingSteps};
#[cfg(feature = "hydrate")]
use crate::state::loading::STEP_INTERVAL_MS;

/// Spinner plus the current step label. Each mount starts at the first step.
#[component]
pub fn LoadingView() -> impl IntoView {
    let steps = RwSignal::new(LoadingSteps::default());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(STEP_INTERVAL_MS).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                steps.update(LoadingSteps::advance);
                if steps.get_untracked().is_last() {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="loading-view">
            <div class="hex-loader">
                <div class="hex-layer hex-1"></div>
                <div class="hex-layer hex-2"></div>
                <div class="hex-layer hex-3"></div>
                <div class="hex-core"></div>
                <div class="h-particle hp-0"></div>
                <div class="h-particle hp-1"></div>
                <div class="h-particle hp-2"></div>
                <div class="h-particle hp-3"></div>
            </div>
            <div class="loading-view__label">{move || steps.get().label()}</div>
            <div class="loading-view__dots">
                {(0..LOADING_STEPS.len())
                    .map(|i| {
                        view! {
                            <div
                                class="loading-view__dot"
                                class:loading-view__dot--current={move || steps.get().is_current(i)}
                                class:loading-view__dot--done={move || steps.get().is_reached(i)}
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
