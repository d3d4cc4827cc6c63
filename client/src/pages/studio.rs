//! The studio page: hero input until the first result, then the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both generate buttons call [`start_generation`]. The request runs in a
//! local task; its ticket decides whether the reply still applies when it
//! lands.

use leptos::prelude::*;

use crate::components::brief_input::BriefInput;
use crate::components::loading_view::LoadingView;
use crate::components::markdown_view::MarkdownView;
use crate::components::sidebar::Sidebar;
use crate::components::storyboard_gallery::StoryboardGallery;
use crate::components::suggestion_chips::SuggestionChips;
use crate::state::studio::StudioState;
use crate::util::clipboard::copy_with_alert;
use crate::util::parallax::{LAYER_FACTORS, layer_transform};

const BRIEF_PLACEHOLDER: &str =
    "例如：我们需要一个面向投资人的60秒宣传片，重点强调‘数字智造中台’如何解决生产效率低下的痛点...";

/// Start a generation for the current brief. No-op for a blank brief.
pub fn start_generation(studio: RwSignal<StudioState>) {
    let Some(ticket) = studio.try_update(StudioState::begin_generation).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        use crate::state::studio::GENERATION_FAILED_MESSAGE;

        leptos::task::spawn_local(async move {
            match crate::net::api::request_generation(&ticket.brief).await {
                Ok(result) => {
                    let applied = studio
                        .try_update(|s| s.complete_generation(&ticket, result))
                        .unwrap_or(false);
                    if !applied {
                        log::info!("dropping stale generation {}", ticket.seq);
                    }
                }
                Err(e) => {
                    log::warn!("generation {} failed: {e}", ticket.seq);
                    studio.update(|s| {
                        s.fail_generation(&ticket, GENERATION_FAILED_MESSAGE);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;
}

#[component]
pub fn StudioPage() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(status) = crate::net::api::fetch_status().await {
                studio.update(|s| s.status = Some(status));
            }
        });
    }

    view! {
        <div class="studio" class:studio--dashboard=move || studio.with(|s| s.has_generated)>
            <Show when=move || studio.with(|s| s.has_generated) fallback=HeroView>
                <DashboardView/>
            </Show>
        </div>
    }
}

/// Centered brief input shown before the first result.
#[component]
fn HeroView() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();
    let error = move || studio.with(|s| s.error.clone());

    view! {
        <div class="hero">
            <header class="hero__header">
                <h1>"鲍罗万象 | 策划智能体"</h1>
                <p>"Gemini 3 Flash 驱动 • 职业级视频策划生成"</p>
            </header>

            <div class="hero__card">
                <Show when=move || !studio.with(|s| s.loading) fallback=LoadingView>
                    <div>
                        <BriefInput label="输入您的策划需求" placeholder=BRIEF_PLACEHOLDER/>
                        <SuggestionChips/>
                    </div>
                    <div class="hero__actions">
                        <button
                            class="hero__generate"
                            disabled=move || !studio.with(StudioState::can_generate)
                            on:click=move |_| start_generation(studio)
                        >
                            "立即生成方案"
                            <span>"✨"</span>
                        </button>
                    </div>
                </Show>
            </div>
            <Show when=move || !error().is_empty()>
                <div class="hero__error">{error}</div>
            </Show>
        </div>
    }
}

/// Sidebar plus the active variant's gallery and document.
#[component]
fn DashboardView() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();
    let markdown = Memo::new(move |_| studio.with(|s| s.active_markdown().to_owned()));
    let error = move || studio.with(|s| s.error.clone());

    let main_ref = NodeRef::<leptos::html::Main>::new();
    let scroll_top = RwSignal::new(0.0_f64);
    let on_scroll = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(main) = main_ref.get_untracked() {
                scroll_top.set(f64::from(main.scroll_top()));
            }
        }
    };

    let on_copy = move |_| studio.with_untracked(|s| copy_with_alert(s.active_markdown()));

    view! {
        <div class="dashboard">
            <Sidebar/>
            <main class="dashboard__main" node_ref=main_ref on:scroll=on_scroll>
                {LAYER_FACTORS
                    .into_iter()
                    .enumerate()
                    .map(|(i, factor)| {
                        view! {
                            <div
                                class=format!("parallax-layer parallax-layer--{i}")
                                style:transform=move || layer_transform(scroll_top.get(), factor)
                            ></div>
                        }
                    })
                    .collect_view()}

                <button class="dashboard__copy" on:click=on_copy>
                    "Copy to Clipboard 全文复制"
                </button>

                <div class="dashboard__content">
                    <Show when=move || !error().is_empty()>
                        <div class="dashboard__error">{error}</div>
                    </Show>
                    <section class="dashboard__gallery">
                        <StoryboardGallery markdown=markdown/>
                    </section>
                    <MarkdownView markdown=markdown/>
                </div>
            </main>
        </div>
    }
}
