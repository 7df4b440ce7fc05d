//! Fixed top navigation bar
//!
//! Transparent over the hero, filled and blurred once the page scrolls past
//! the threshold. The scroll listener lives exactly as long as the navbar.

use leptos::prelude::*;

use super::{CheckoutLink, Wordmark};
use crate::core::{Anchor, IconKind, NAV_CTA_LABEL, NavbarStyle};
use crate::ui::icon::Icon;

#[component]
pub fn Navbar() -> impl IntoView {
    let style = RwSignal::new(NavbarStyle::default());

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::scroll;

        let sync = move || {
            // An unreadable offset keeps the current style.
            let Some(offset) = current_scroll_offset() else {
                return;
            };
            let next = NavbarStyle::from_offset(offset);
            if style.get_untracked() != next {
                style.set(next);
            }
        };

        // Page may be restored mid-scroll on reload
        Effect::new(move |_| sync());

        let handle = window_event_listener(scroll, move |_| sync());
        on_cleanup(move || handle.remove());
    }

    view! {
        <nav
            class=move || {
                format!(
                    "fixed top-0 w-full z-50 transition-all duration-300 {}",
                    style.get().classes(),
                )
            }
            data-style=move || style.get().as_str()
        >
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                <a href="#" class="flex items-center gap-2" aria-label="Hadassa IA">
                    <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-emerald-500 rounded-xl flex items-center justify-center shadow-lg shadow-blue-500/20">
                        <Icon kind=IconKind::Cpu class="w-6 h-6 text-white" />
                    </div>
                    <Wordmark />
                </a>

                <div class="hidden md:flex items-center gap-8 text-sm font-medium text-zinc-400">
                    {Anchor::ALL
                        .into_iter()
                        .map(|anchor| {
                            view! {
                                <a href=anchor.href() class="hover:text-white transition-colors">
                                    {anchor.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <CheckoutLink class="px-6 py-2.5 rounded-full bg-white text-black text-sm font-bold hover:bg-zinc-200 transition-all hover:scale-105 active:scale-95">
                    {NAV_CTA_LABEL}
                </CheckoutLink>
            </div>
        </nav>
    }
}

#[cfg(feature = "hydrate")]
fn current_scroll_offset() -> Option<f64> {
    let window = web_sys::window()?;
    match window.scroll_y() {
        Ok(offset) => Some(offset),
        Err(err) => {
            leptos::logging::warn!("could not read scroll offset: {:?}", err);
            None
        }
    }
}
