//! Expanded parameters of the selected shot.

use leptos::prelude::*;
use storyboard::ShotRecord;

#[component]
pub fn ShotDetail(shot: ShotRecord, #[prop(into)] on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="shot-detail">
            <div class="shot-detail__header">
                <div class="shot-detail__title">
                    <strong>{format!("SCENE {}", shot.id)}</strong>
                    <span>"详细脚本参数"</span>
                </div>
                <button class="shot-detail__close" on:click=move |_| on_dismiss.run(())>
                    "×"
                </button>
            </div>
            <div class="shot-detail__grid">
                <DetailField label="画面 Visual" value=shot.visual/>
                <DetailField label="声音 Audio" value=shot.audio/>
                <DetailField label="图形 GFX" value=shot.subtitle/>
                <DetailField label="意图 Goal" value=shot.purpose/>
                <div class="shot-detail__field shot-detail__field--props">
                    <strong>"道具 Props & Assets"</strong>
                    <p>{shot.props}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="shot-detail__field">
            <strong>{label}</strong>
            <p>{value}</p>
        </div>
    }
}
