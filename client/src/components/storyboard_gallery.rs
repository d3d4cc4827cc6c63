//! Horizontal shot strip with drag-to-scroll and a detail card.
//!
//! DESIGN
//! ======
//! Gesture and selection logic live in `storyboard::gallery::Gallery`. This
//! component only feeds it pointer coordinates and applies the returned
//! actions to the strip element: scroll offset, cursor, and the timer that
//! releases the post-drag click guard.
//!
//! Pointer handlers update the gallery untracked. Gesture state is never
//! rendered, so a mousemove stream must not re-run the card list; only
//! loads, clicks and dismissals notify subscribers.

use leptos::prelude::*;
use storyboard::extract;
use storyboard::gallery::{Cursor, Gallery};
#[cfg(feature = "hydrate")]
use storyboard::gallery::GalleryAction;

use crate::components::shot_detail::ShotDetail;

#[component]
pub fn StoryboardGallery(#[prop(into)] markdown: Signal<String>) -> impl IntoView {
    let gallery = RwSignal::new(Gallery::default());
    let cursor = RwSignal::new(Cursor::Grab);
    let strip_ref = NodeRef::<leptos::html::Div>::new();

    // A new document (new result or tab switch) resets selection and gesture.
    Effect::new(move || {
        let shots = markdown.with(|md| extract(md));
        gallery.update(|g| g.load(shots));
        cursor.set(Cursor::Grab);
    });

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(strip) = strip_ref.get_untracked() else {
                return;
            };
            let x = strip_x(&ev, &strip);
            let scroll = f64::from(strip.scroll_left());
            let actions = run_gesture(gallery, |g| g.on_pointer_down(x, scroll));
            apply_actions(&strip, gallery, cursor, actions);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if !gallery.with_untracked(|g| g.gesture().is_active()) {
                return;
            }
            ev.prevent_default();
            let Some(strip) = strip_ref.get_untracked() else {
                return;
            };
            let x = strip_x(&ev, &strip);
            let actions = run_gesture(gallery, |g| g.on_pointer_move(x));
            apply_actions(&strip, gallery, cursor, actions);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_mouse_up = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(strip) = strip_ref.get_untracked() else {
                return;
            };
            let actions = run_gesture(gallery, Gallery::on_pointer_up);
            apply_actions(&strip, gallery, cursor, actions);
        }
    };

    let on_mouse_leave = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(strip) = strip_ref.get_untracked() else {
                return;
            };
            let actions = run_gesture(gallery, Gallery::on_pointer_leave);
            apply_actions(&strip, gallery, cursor, actions);
        }
    };

    let cards = move || {
        gallery.with(|g| {
            g.shots()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    let selected_shot = move || gallery.with(|g| g.selected_shot().cloned());
    let on_dismiss = Callback::new(move |()| {
        gallery.update(|g| {
            g.dismiss();
        });
    });

    view! {
        <Show when=move || gallery.with(|g| !g.is_empty())>
            <div class="storyboard">
                <h3 class="storyboard__heading">
                    <span class="storyboard__heading-bar"></span>
                    "分镜交互预览"
                </h3>
                <div
                    class="storyboard__strip"
                    node_ref=strip_ref
                    style:cursor=move || cursor.get().as_css()
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move
                    on:mouseup=on_mouse_up
                    on:mouseleave=on_mouse_leave
                >
                    <For
                        each=cards
                        key=|(index, shot)| (*index, shot.clone())
                        children=move |(index, shot)| {
                            let is_selected = move || gallery.with(|g| g.selected() == Some(index));
                            view! {
                                <div
                                    class="shot-card"
                                    class:shot-card--selected=is_selected
                                    on:click=move |_| gallery.update(|g| {
                                        g.on_card_click(index);
                                    })
                                >
                                    <div>
                                        <div class="shot-card__number">
                                            <span class="shot-card__scene">"SCENE"</span>
                                            <span class="shot-card__id">{shot.display_number()}</span>
                                        </div>
                                        <div class="shot-card__visual">{shot.visual.clone()}</div>
                                    </div>
                                    <div class="shot-card__audio">{shot.audio_or_placeholder().to_owned()}</div>
                                </div>
                            }
                        }
                    />
                </div>
                {move || {
                    selected_shot().map(|shot| view! { <ShotDetail shot=shot on_dismiss=on_dismiss/> })
                }}
            </div>
        </Show>
    }
}

/// Run a pointer handler without notifying subscribers, unless it reports a
/// selection change.
#[cfg(feature = "hydrate")]
fn run_gesture(
    gallery: RwSignal<Gallery>,
    handler: impl FnOnce(&mut Gallery) -> Vec<GalleryAction>,
) -> Vec<GalleryAction> {
    let actions = gallery.try_update_untracked(handler).unwrap_or_default();
    if actions.iter().any(|a| matches!(a, GalleryAction::SelectionChanged(_))) {
        gallery.notify();
    }
    actions
}

/// Pointer x relative to the strip's left edge.
#[cfg(feature = "hydrate")]
fn strip_x(ev: &web_sys::MouseEvent, strip: &web_sys::HtmlDivElement) -> f64 {
    f64::from(ev.page_x()) - f64::from(strip.offset_left())
}

#[cfg(feature = "hydrate")]
fn apply_actions(
    strip: &web_sys::HtmlDivElement,
    gallery: RwSignal<Gallery>,
    cursor: RwSignal<Cursor>,
    actions: Vec<GalleryAction>,
) {
    for action in actions {
        match action {
            GalleryAction::ScrollTo(left) => strip.scroll_to_with_x_and_y(left, f64::from(strip.scroll_top())),
            GalleryAction::SetCursor(next) => cursor.set(next),
            GalleryAction::ScheduleClickGuardRelease { after_ms } => {
                gloo_timers::callback::Timeout::new(after_ms, move || {
                    gallery.try_update_untracked(Gallery::release_click_guard);
                })
                .forget();
            }
            GalleryAction::SelectionChanged(_) => {}
        }
    }
}
