//! Brief textarea bound to `StudioState::brief`.

use leptos::prelude::*;

use crate::state::studio::StudioState;

#[component]
pub fn BriefInput(
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();

    view! {
        <label class="brief-input__label">{label}</label>
        <textarea
            class="brief-input"
            class:brief-input--compact=compact
            placeholder=placeholder
            prop:value=move || studio.with(|s| s.brief.clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                studio.update(|s| s.brief = value);
            }
        ></textarea>
    }
}
