//! Landing page component
//!
//! Single-page sales site for Hadassa IA. Sections render top to bottom:
//! - Navbar (transparent until the page scrolls)
//! - Hero with the main call to action and trust badges
//! - Features, comparison table, methodology steps
//! - FAQ with independently collapsible answers
//! - Final call to action and footer
//! - Floating contact button

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::reveal::reveal_css;
use crate::core::seo::{
    PAGE_DESCRIPTION, PAGE_KEYWORDS, PAGE_TITLE, page_faq_json_ld, product_json_ld,
};
use crate::ui::sections::{
    ComparisonSection, FaqSection, FeaturesSection, FinalCta, FloatingContactLink, Footer, Hero,
    MethodologySection, Navbar,
};

/// Root view of the site
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-[#050505] text-zinc-100 font-sans selection:bg-blue-500/30">
            <Navbar />
            <FloatingContactLink />
            <main>
                <Hero />
                <FeaturesSection />
                <ComparisonSection />
                <MethodologySection />
                <FaqSection />
                <FinalCta />
            </main>
            <Footer />

            <LandingStyles />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content=PAGE_KEYWORDS />
        <Meta name="theme-color" content="#050505" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:locale" content="pt_BR" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        // Twitter
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=PAGE_DESCRIPTION />

        // JSON-LD structured data
        <script type="application/ld+json" inner_html=product_json_ld()></script>
        <script type="application/ld+json" inner_html=page_faq_json_ld()></script>
    }
}

/// Widget styles that Tailwind utilities don't cover, outside the reveal rules
const WIDGET_CSS: &str = r#"
            html { scroll-behavior: smooth; }

            /* Hero glow */
            .hero-glow {
                background: radial-gradient(circle at 50% 0%, rgba(10, 132, 255, 0.15), transparent 50%);
            }

            /* FAQ answer: collapses to zero height, expands to content height */
            .faq-answer {
                display: grid;
                grid-template-rows: 0fr;
                opacity: 0;
                transition: grid-template-rows 0.3s ease, opacity 0.3s ease;
            }
            .faq-answer.faq-answer-open {
                grid-template-rows: 1fr;
                opacity: 1;
            }
            .faq-answer-inner {
                overflow: hidden;
                min-height: 0;
            }

            /* Floating contact button */
            @keyframes contact-pop-in {
                from { opacity: 0; transform: scale(0); }
                to { opacity: 1; transform: scale(1); }
            }
            .contact-float {
                animation: contact-pop-in 0.4s ease-out both;
                transition: transform 0.2s ease-out;
            }
            .contact-float:hover {
                transform: translateY(-5px) scale(1.1);
            }

            @media (prefers-reduced-motion: reduce) {
                .contact-float { animation: none; }
                .faq-answer { transition: none; }
            }
"#;

/// Animation and widget styles
#[component]
fn LandingStyles() -> impl IntoView {
    let css = format!("{}{}", reveal_css(), WIDGET_CSS);

    view! {
        <style>{css}</style>
        // Without scripts no observer runs, so show everything up front
        <noscript>
            <style>".reveal { opacity: 1 !important; transform: none !important; animation: none !important; }"</style>
        </noscript>
    }
}
