//! Dashboard sidebar: brand, brief editor, regenerate, variant tabs.

use leptos::prelude::*;
use storyboard::consts::DEMO_FOOTER_LABEL;

use crate::components::brief_input::BriefInput;
use crate::components::loading_view::LoadingView;
use crate::components::variant_tabs::VariantTabs;
use crate::pages::studio::start_generation;
use crate::state::studio::StudioState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();
    let loading = move || studio.with(|s| s.loading);

    let footer = move || {
        studio.with(|s| {
            s.status
                .as_ref()
                .map_or_else(|| DEMO_FOOTER_LABEL.to_owned(), storyboard::api::ServiceStatus::footer_label)
        })
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h1>"鲍罗万象"</h1>
                <p>"策划智能体"</p>
            </div>

            <div class="sidebar__body">
                <Show
                    when=move || !loading()
                    fallback=|| view! { <div class="sidebar__loading"><LoadingView/></div> }
                >
                    <BriefInput label="当前需求" compact=true/>
                    <button
                        class="sidebar__regenerate"
                        disabled=move || !studio.with(StudioState::can_generate)
                        on:click=move |_| start_generation(studio)
                    >
                        "Regenerate 更新生成"
                    </button>

                    <div class="sidebar__variants">
                        <label class="brief-input__label">"方案版本"</label>
                        <VariantTabs/>
                    </div>
                </Show>
            </div>

            <div class="sidebar__footer">{footer}</div>
        </aside>
    }
}
