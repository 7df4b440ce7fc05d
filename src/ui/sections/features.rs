use leptos::prelude::*;

use super::SectionHeading;
use crate::core::{Anchor, FEATURES, FEATURES_COPY, FeatureEntry};
use crate::ui::icon::Icon;
use crate::ui::reveal::RevealOnView;

/// "Why traders fail" section with one card per feature entry
#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=Anchor::Features.id() class="py-32 relative">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading copy=FEATURES_COPY />

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURES
                        .into_iter()
                        .map(|entry| view! { <FeatureCard entry=entry /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
pub fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    view! {
        <RevealOnView>
            <div class="group h-full p-8 rounded-[32px] bg-white/[0.03] border border-white/10 hover:border-blue-500/50 transition-all duration-500 hover:bg-white/[0.05]">
                <div class="w-14 h-14 rounded-2xl bg-blue-500/10 flex items-center justify-center mb-6 group-hover:scale-110 transition-transform duration-500">
                    <Icon kind=entry.icon class="w-7 h-7 text-blue-500" />
                </div>
                <h3 class="text-xl font-display font-bold text-white mb-4">{entry.title}</h3>
                <p class="text-zinc-400 leading-relaxed">{entry.description}</p>
            </div>
        </RevealOnView>
    }
}
