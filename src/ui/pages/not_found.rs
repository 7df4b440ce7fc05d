//! Not found page component
//!
//! Shown for any path other than the landing page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::{COPYRIGHT, IconKind};
use crate::ui::icon::Icon;
use crate::ui::sections::Wordmark;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Página não encontrada - Hadassa IA" />

        <div class="min-h-screen bg-[#050505] text-zinc-100 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white/[0.03] border border-white/10 rounded-full flex items-center justify-center">
                    <Icon kind=IconKind::Cpu class="w-12 h-12 text-blue-500" />
                </div>

                <h1 class="text-6xl font-display font-black text-white mb-4">"404"</h1>

                <h2 class="text-2xl font-bold text-white mb-2">"Página não encontrada"</h2>

                <p class="text-zinc-400 mb-8 max-w-md mx-auto">
                    "O endereço que você acessou não existe ou foi movido."
                </p>

                <a
                    href="/"
                    class="inline-flex px-6 py-3 rounded-full bg-white text-black font-bold hover:bg-zinc-200 transition-colors"
                >
                    "Voltar ao início"
                </a>
            </div>

            <div class="absolute bottom-8 flex flex-col items-center gap-2 text-center">
                <Wordmark />
                <p class="text-sm text-zinc-600">{COPYRIGHT}</p>
            </div>
        </div>
    }
}
