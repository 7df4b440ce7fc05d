use leptos::prelude::*;

use super::Wordmark;
use crate::core::{COPYRIGHT, IconKind, RISK_DISCLAIMER};
use crate::ui::icon::Icon;

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-20 border-t border-white/10 bg-black">
            <div class="max-w-7xl mx-auto px-6 text-center">
                <div class="flex items-center justify-center gap-2 mb-8">
                    <Icon kind=IconKind::Cpu class="w-6 h-6 text-blue-500" />
                    <Wordmark />
                </div>
                <p class="text-zinc-500 text-sm mb-8">{COPYRIGHT}</p>
                <div class="max-w-3xl mx-auto p-6 rounded-2xl bg-white/[0.02] border border-white/5 text-zinc-600 text-[10px] leading-relaxed uppercase tracking-widest">
                    {RISK_DISCLAIMER}
                </div>
            </div>
        </footer>
    }
}
