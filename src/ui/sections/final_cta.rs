use leptos::prelude::*;

use super::CheckoutLink;
use crate::core::links::CTA_TEXTURE_URL;
use crate::core::{FINAL_CTA_COPY, FINAL_CTA_LABEL, IconKind};
use crate::ui::icon::Icon;
use crate::ui::reveal::RevealOnView;

/// Closing call to action on a gradient panel
#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="py-32">
            <div class="max-w-5xl mx-auto px-6">
                <RevealOnView>
                    <div class="relative p-16 rounded-[48px] bg-gradient-to-br from-blue-600 to-emerald-600 overflow-hidden text-center">
                        <div
                            class="absolute inset-0 opacity-20"
                            style=format!("background-image: url('{CTA_TEXTURE_URL}');")
                            aria-hidden="true"
                        ></div>
                        <div class="relative z-10">
                            <h2 class="text-4xl md:text-6xl font-display font-black text-white mb-8 uppercase tracking-tighter">
                                {FINAL_CTA_COPY.title}
                            </h2>
                            <p class="text-xl text-white/80 max-w-2xl mx-auto mb-12">
                                {FINAL_CTA_COPY.subtitle}
                            </p>
                            <CheckoutLink class="inline-flex items-center gap-3 px-12 py-6 rounded-full bg-white text-black font-black text-xl hover:scale-105 active:scale-95 transition-all shadow-2xl shadow-black/20">
                                {FINAL_CTA_LABEL}
                                <Icon kind=IconKind::ChevronRight class="w-6 h-6" />
                            </CheckoutLink>
                        </div>
                    </div>
                </RevealOnView>
            </div>
        </section>
    }
}
