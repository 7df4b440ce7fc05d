//! FAQ section with independently collapsible answers
//!
//! Each `FaqItem` owns its own [`Disclosure`]; opening one never closes the
//! others. Answers stay in the markup while collapsed (zero height, hidden from
//! assistive tech) so their text is always present in the document.

use leptos::prelude::*;

use super::SectionHeading;
use crate::core::{Anchor, Disclosure, FAQ_COPY, FAQ_ENTRIES, FaqEntry, IconKind};
use crate::ui::icon::Icon;
use crate::ui::reveal::RevealOnView;

/// FAQ section component
#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id=Anchor::Faq.id() class="py-32 bg-white/[0.02]">
            <div class="max-w-3xl mx-auto px-6">
                <SectionHeading copy=FAQ_COPY uppercase=false />

                <RevealOnView>
                    <div class="p-8 rounded-[40px] bg-white/[0.03] border border-white/10">
                        {FAQ_ENTRIES
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| view! { <FaqItem entry=entry index=index /> })
                            .collect_view()}
                    </div>
                </RevealOnView>
            </div>
        </section>
    }
}

/// Flip one answer. Other items keep their own state.
pub fn toggle_answer(state: RwSignal<Disclosure>) {
    state.update(Disclosure::toggle);
}

/// FAQ accordion item component
#[component]
pub fn FaqItem(
    entry: FaqEntry,
    /// Position in the list, used for the answer region id
    index: usize,
    /// Open/closed state; a fresh closed one when omitted
    #[prop(optional)]
    state: Option<RwSignal<Disclosure>>,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| RwSignal::new(Disclosure::default()));
    let is_open = move || state.get().is_open();
    let answer_id = format!("faq-answer-{index}");

    view! {
        <div class="border-b border-white/10 last:border-0" data-state=move || state.get().to_string()>
            <button
                type="button"
                class="w-full py-6 flex items-center justify-between gap-4 text-left group"
                on:click=move |_| toggle_answer(state)
                aria-expanded=move || is_open().to_string()
                aria-controls=answer_id.clone()
            >
                <span class=move || {
                    if is_open() {
                        "text-lg font-bold transition-colors text-blue-500"
                    } else {
                        "text-lg font-bold transition-colors text-white group-hover:text-blue-400"
                    }
                }>{entry.question}</span>
                <span
                    class="flex-shrink-0 text-zinc-500 transition-transform duration-300"
                    class=("rotate-180", is_open)
                    class=("text-blue-500", is_open)
                >
                    <Icon kind=IconKind::ChevronDown class="w-5 h-5" />
                </span>
            </button>
            <div
                id=answer_id
                role="region"
                class="faq-answer"
                class=("faq-answer-open", is_open)
                aria-hidden=move || (!is_open()).to_string()
            >
                <div class="faq-answer-inner">
                    <p class="pb-6 text-zinc-400 leading-relaxed">{entry.answer}</p>
                </div>
            </div>
        </div>
    }
}
