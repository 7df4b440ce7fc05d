use leptos::prelude::*;

use super::CheckoutLink;
use crate::core::links::HERO_TEXTURE_URL;
use crate::core::{BRAND_NAME, BRAND_SUFFIX, HERO_CTA_LABEL, HERO_EYEBROW, IconKind, TRUST_BADGES};
use crate::ui::icon::Icon;
use crate::ui::reveal::RevealOnView;

/// Full-height opening section with headline, main call to action and badges
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center pt-20 overflow-hidden">
            // Background layers; the page colour shows through if the texture fails
            <div class="absolute inset-0 z-0" aria-hidden="true">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-full h-full hero-glow"></div>
                <div
                    class="absolute inset-0 bg-cover bg-center opacity-10 mix-blend-overlay"
                    style=format!("background-image: url('{HERO_TEXTURE_URL}');")
                ></div>
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-[#050505]/50 to-[#050505]"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 text-center">
                <RevealOnView>
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-blue-500/10 border border-blue-500/20 text-blue-500 text-xs font-bold tracking-widest uppercase mb-8">
                        <Icon kind=IconKind::Zap class="w-3 h-3" />
                        {HERO_EYEBROW}
                    </div>
                </RevealOnView>

                <RevealOnView delay=0.1>
                    <h1 class="text-6xl md:text-8xl lg:text-9xl font-display font-black tracking-tighter leading-[0.9] mb-8">
                        {BRAND_NAME}" "
                        <span class="bg-gradient-to-r from-blue-500 to-emerald-500 bg-clip-text text-transparent">
                            {BRAND_SUFFIX}
                        </span>
                    </h1>
                </RevealOnView>

                <RevealOnView delay=0.2>
                    <p class="text-xl md:text-2xl text-zinc-400 max-w-3xl mx-auto mb-12 leading-relaxed font-accent">
                        "A precisão matemática da estratégia "
                        <strong class="text-white">"FIMATHE"</strong>
                        " unida à tecnologia de ponta. Opere no MT5 com 100% de automação."
                    </p>
                </RevealOnView>

                <RevealOnView delay=0.3>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-6">
                        <CheckoutLink class="group relative px-10 py-5 rounded-full bg-gradient-to-r from-blue-600 to-emerald-600 text-white font-black text-lg shadow-2xl shadow-blue-500/25 hover:scale-105 active:scale-95 transition-all overflow-hidden">
                            <span class="relative z-10 flex items-center gap-2">
                                {HERO_CTA_LABEL}
                                <Icon kind=IconKind::ArrowRight class="w-5 h-5 group-hover:translate-x-1 transition-transform" />
                            </span>
                            <div class="absolute inset-0 bg-gradient-to-r from-emerald-600 to-blue-600 opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                        </CheckoutLink>
                    </div>
                </RevealOnView>

                <RevealOnView delay=0.4>
                    <ul class="mt-16 flex flex-wrap items-center justify-center gap-8 text-xs font-bold text-zinc-500 uppercase tracking-widest">
                        {TRUST_BADGES
                            .into_iter()
                            .map(|badge| {
                                view! {
                                    <li class="flex items-center gap-2">
                                        <Icon kind=badge.icon class="w-4 h-4 text-emerald-500" />
                                        {badge.label}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </RevealOnView>
            </div>
        </section>
    }
}
