//! Landing page sections, in render order, plus the small pieces they share

mod comparison;
mod contact;
mod faq;
mod features;
mod final_cta;
mod footer;
mod hero;
mod methodology;
mod navbar;

pub use comparison::{ComparisonSection, ComparisonTable};
pub use contact::FloatingContactLink;
pub use faq::{FaqItem, FaqSection, toggle_answer};
pub use features::{FeatureCard, FeaturesSection};
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use hero::Hero;
pub use methodology::{MethodologySection, StepCard};
pub use navbar::Navbar;

use leptos::prelude::*;

use crate::core::links::{CHECKOUT_URL, NEW_CONTEXT_REL, NEW_CONTEXT_TARGET};
use crate::core::{BRAND_NAME, BRAND_SUFFIX, SectionCopy};
use crate::ui::reveal::RevealOnView;

/// Purchase call to action. Always opens the checkout in a new tab.
#[component]
pub fn CheckoutLink(class: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=CHECKOUT_URL
            target=NEW_CONTEXT_TARGET
            rel=NEW_CONTEXT_REL
            class=class
            data-cta="checkout"
        >
            {children()}
        </a>
    }
}

/// "HADASSA IA" wordmark
#[component]
pub fn Wordmark() -> impl IntoView {
    view! {
        <span class="font-display font-black text-xl tracking-tighter text-white">
            {BRAND_NAME}" "<span class="text-blue-500">{BRAND_SUFFIX}</span>
        </span>
    }
}

/// Centered title + subtitle block that opens most sections
#[component]
pub fn SectionHeading(
    copy: SectionCopy,
    #[prop(default = true)] uppercase: bool,
) -> impl IntoView {
    let title_class = if uppercase {
        "text-4xl md:text-6xl font-display font-black mb-6 uppercase"
    } else {
        "text-4xl md:text-6xl font-display font-black mb-6"
    };

    view! {
        <div class="text-center mb-20">
            <RevealOnView>
                <h2 class=title_class>{copy.title}</h2>
                <p class="text-zinc-400 max-w-2xl mx-auto">{copy.subtitle}</p>
            </RevealOnView>
        </div>
    }
}
