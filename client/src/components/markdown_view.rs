//! Full document pane for the active variant.

use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

#[component]
pub fn MarkdownView(#[prop(into)] markdown: Signal<String>) -> impl IntoView {
    let rendered = Memo::new(move |_| markdown.with(|md| render_markdown_html(md)));

    view! { <section class="markdown-body" inner_html=move || rendered.get()></section> }
}
