//! Canned brief suggestions shown under the hero input.

#[cfg(test)]
#[path = "suggestion_chips_test.rs"]
mod suggestion_chips_test;

use leptos::prelude::*;

use crate::state::studio::StudioState;

/// Example briefs; clicking one replaces the input text.
pub const SUGGESTIONS: [&str; 9] = [
    "面向抖音年轻群体，想推广我们的‘国潮手机壳’，突出非遗工艺结合。",
    "针对政府评委，展示产业扶贫价值，重点讲回收体系的智能化。",
    "双11预热短片，强调‘废料变宝藏’的环保概念，风格要非常酷炫。",
    "为‘鲍罗万象’制作一支15秒抖音挑战赛示范片，强调变废为宝的DIY过程。",
    "面向设计类学生的招募视频，展示非遗贝雕的现代美学，风格要极简高冷。",
    "给合作伙伴看的工厂实拍剪辑脚本，重点展示自动化清洗和分拣流水线。",
    "制作一支投放在电梯屏的洗脑广告，强调‘鲍鱼壳能做护肤品’的科技点。",
    "针对环保公益展的沉浸式视频，无需旁白，纯画面与音效展示生态循环。",
    "面向B端客户的企业宣传片，30秒展示‘回收-处理-再造-销售’全链路。",
];

#[component]
pub fn SuggestionChips() -> impl IntoView {
    let studio = expect_context::<RwSignal<StudioState>>();

    view! {
        <div class="suggestions">
            {SUGGESTIONS
                .into_iter()
                .map(|text| {
                    view! {
                        <button
                            class="suggestions__chip"
                            on:click=move |_| studio.update(|s| text.clone_into(&mut s.brief))
                        >
                            {text}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
