use leptos::prelude::*;

use super::SectionHeading;
use crate::core::{Anchor, METHODOLOGY_COPY, METHODOLOGY_STEPS, MethodologyStep};
use crate::ui::icon::Icon;
use crate::ui::reveal::RevealOnView;

/// Seconds between consecutive step card entrances
const STEP_STAGGER_SECS: f64 = 0.1;

#[component]
pub fn MethodologySection() -> impl IntoView {
    view! {
        <section id=Anchor::Methodology.id() class="py-32">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading copy=METHODOLOGY_COPY />

                <ol class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {METHODOLOGY_STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li>
                                    <RevealOnView delay={i as f64 * STEP_STAGGER_SECS} class="h-full">
                                        <StepCard step=step />
                                    </RevealOnView>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

/// Methodology step card with its ordinal watermarked in the corner
#[component]
pub fn StepCard(step: MethodologyStep) -> impl IntoView {
    view! {
        <div
            class="relative h-full p-10 rounded-[32px] bg-white/[0.03] border border-white/10 overflow-hidden group"
            data-ordinal=step.ordinal
        >
            <span
                class="absolute top-4 right-8 text-8xl font-black text-white/[0.03] group-hover:text-blue-500/10 transition-colors"
                aria-hidden="true"
            >
                {step.ordinal}
            </span>
            <Icon kind=step.icon class="w-10 h-10 text-blue-500 mb-6" />
            <h3 class="text-2xl font-display font-bold text-white mb-4">{step.title}</h3>
            <p class="text-zinc-400 text-sm leading-relaxed">{step.description}</p>
        </div>
    }
}
