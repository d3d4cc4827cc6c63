//! Sidebar tabs switching between variant A and B.

use leptos::prelude::*;
use storyboard::Variant;

use crate::state::studio::StudioState;

#[component]
pub fn VariantTabs() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();

    view! {
        <div class="variant-tabs">
            {Variant::ALL
                .into_iter()
                .map(|variant| {
                    let is_active = move || studio.with(|s| s.active == variant);
                    view! {
                        <button
                            class="variant-tabs__tab"
                            class:variant-tabs__tab--active=is_active
                            on:click=move |_| studio.update(|s| s.select_variant(variant))
                        >
                            <div class="variant-tabs__title">{variant.title()}</div>
                            <div class="variant-tabs__tagline">{variant.tagline()}</div>
                            <Show when=is_active>
                                <div class="variant-tabs__dot">"●"</div>
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
