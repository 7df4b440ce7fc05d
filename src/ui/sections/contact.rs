use leptos::prelude::*;

use crate::core::links::{NEW_CONTEXT_REL, NEW_CONTEXT_TARGET};
use crate::core::{CONTACT_LABEL, IconKind, contact_url};
use crate::ui::icon::Icon;

/// Floating button pinned to the bottom-right corner that opens a prefilled
/// chat. Entrance and hover motion come from the `contact-float` styles.
#[component]
pub fn FloatingContactLink() -> impl IntoView {
    view! {
        <a
            href=contact_url()
            target=NEW_CONTEXT_TARGET
            rel=NEW_CONTEXT_REL
            class="contact-float fixed bottom-8 right-8 z-50 flex items-center gap-3 px-6 py-4 rounded-full bg-[#25D366] text-white font-bold shadow-2xl shadow-green-500/20"
            data-cta="contact"
        >
            <Icon kind=IconKind::MessageCircle class="w-6 h-6" />
            <span>{CONTACT_LABEL}</span>
        </a>
    }
}
