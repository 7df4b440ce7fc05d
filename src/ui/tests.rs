//! Server-rendered markup checks
//!
//! Components are rendered to HTML strings inside a fresh reactive owner, the
//! same way the server renders them before hydration.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::core::links::CHECKOUT_URL;
use crate::core::{COMPARISON_ROWS, Disclosure, FAQ_ENTRIES, contact_url};
use crate::ui::pages::LandingPage;
use crate::ui::reveal::RevealOnView;
use crate::ui::sections::{
    ComparisonTable, FaqItem, FaqSection, FloatingContactLink, MethodologySection, Navbar,
    toggle_answer,
};

fn render<F, V>(build: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_meta_context();
        build().into_view().to_html()
    })
}

/// Opening tags (`<a ...>`) of every anchor carrying `marker`.
fn anchors_with<'a>(html: &'a str, marker: &str) -> Vec<&'a str> {
    html.split("<a ")
        .skip(1)
        .filter_map(|rest| rest.split('>').next())
        .filter(|tag| tag.contains(marker))
        .collect()
}

#[test]
fn test_comparison_table_renders_five_marked_rows() {
    let html = render(|| view! { <ComparisonTable rows={&COMPARISON_ROWS} /> });

    assert_eq!(html.matches("<tr").count(), 6, "header row + 5 body rows");
    assert_eq!(html.matches(r#"data-marker="negative""#).count(), 5);
    assert_eq!(html.matches(r#"data-marker="positive""#).count(), 5);
    for row in COMPARISON_ROWS {
        assert!(html.contains(row.manual_value));
        assert!(html.contains(row.automated_value));
    }
}

#[test]
fn test_methodology_steps_in_document_order() {
    let html = render(|| view! { <MethodologySection /> });

    let positions: Vec<usize> = ["01", "02", "03", "04"]
        .iter()
        .map(|ordinal| {
            html.find(&format!(r#"data-ordinal="{ordinal}""#))
                .unwrap_or_else(|| panic!("step {ordinal} missing"))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(html.matches("data-ordinal=").count(), 4);
    assert!(html.contains(r#"id="methodology""#));
}

#[test]
fn test_faq_items_start_closed() {
    let html = render(|| view! { <FaqSection /> });

    assert_eq!(html.matches(r#"aria-expanded="false""#).count(), FAQ_ENTRIES.len());
    assert_eq!(html.matches(r#"data-state="closed""#).count(), FAQ_ENTRIES.len());
    assert!(!html.contains("faq-answer-open"));
    assert!(!html.contains(r#"aria-expanded="true""#));
}

#[test]
fn test_faq_answers_are_present_while_closed() {
    let html = render(|| view! { <FaqSection /> });

    assert!(html.contains("Funciona em quais ativos?"));
    assert!(html.contains("acesso vitalício"));
    assert!(html.matches(r#"aria-hidden="true""#).count() >= FAQ_ENTRIES.len());
    for index in 0..FAQ_ENTRIES.len() {
        assert!(html.contains(&format!(r#"aria-controls="faq-answer-{index}""#)));
        assert!(html.contains(&format!(r#"id="faq-answer-{index}""#)));
    }
}

#[test]
fn test_faq_items_toggle_independently() {
    let owner = Owner::new();
    owner.with(|| {
        let states: Vec<RwSignal<Disclosure>> = FAQ_ENTRIES
            .iter()
            .map(|_| RwSignal::new(Disclosure::default()))
            .collect();
        let render_items = || -> Vec<String> {
            states
                .iter()
                .copied()
                .enumerate()
                .map(|(index, state)| {
                    let entry = FAQ_ENTRIES[index];
                    view! { <FaqItem entry=entry index=index state=state /> }
                        .into_view()
                        .to_html()
                })
                .collect()
        };
        let is_open = |html: &str| {
            html.contains(r#"data-state="open""#)
                && html.contains(r#"aria-expanded="true""#)
                && html.contains(r#"aria-hidden="false""#)
                && html.contains("faq-answer-open")
        };
        let open_flags = || {
            render_items()
                .iter()
                .map(|html| is_open(html.as_str()))
                .collect::<Vec<_>>()
        };

        assert_eq!(open_flags(), vec![false; FAQ_ENTRIES.len()]);

        toggle_answer(states[1]);
        assert_eq!(open_flags(), vec![false, true, false, false]);

        toggle_answer(states[2]);
        assert_eq!(open_flags(), vec![false, true, true, false]);

        toggle_answer(states[1]);
        assert_eq!(open_flags(), vec![false, false, true, false]);

        let closed = &render_items()[1];
        assert!(closed.contains(r#"data-state="closed""#));
        assert!(closed.contains(r#"aria-expanded="false""#));
        assert!(closed.contains("Preciso de muito capital para começar?"));
    });
}

#[test]
fn test_navbar_starts_transparent() {
    let html = render(|| view! { <Navbar /> });

    assert!(html.contains(r#"data-style="transparent""#));
    assert!(html.contains("bg-transparent"));
    assert!(!html.contains("backdrop-blur-lg"));
    for anchor in ["#features", "#comparison", "#methodology", "#faq"] {
        assert!(html.contains(&format!(r#"href="{anchor}""#)), "missing {anchor}");
    }
}

#[test]
fn test_contact_link_opens_chat_in_new_context() {
    let html = render(|| view! { <FloatingContactLink /> });

    let anchors = anchors_with(&html, r#"data-cta="contact""#);
    assert_eq!(anchors.len(), 1);
    assert!(anchors[0].contains(&format!(r#"href="{}""#, contact_url())));
    assert!(anchors[0].contains(r#"target="_blank""#));
}

#[test]
fn test_every_checkout_link_targets_checkout_in_new_context() {
    let html = render(|| view! { <LandingPage /> });

    let anchors = anchors_with(&html, r#"data-cta="checkout""#);
    assert_eq!(anchors.len(), 4);
    for tag in anchors {
        assert!(tag.contains(&format!(r#"href="{CHECKOUT_URL}""#)), "bad href in {tag}");
        assert!(tag.contains(r#"target="_blank""#), "missing target in {tag}");
        assert!(tag.contains(r#"rel="noopener noreferrer""#));
    }
}

#[test]
fn test_sections_render_in_fixed_order() {
    let html = render(|| view! { <LandingPage /> });

    let ids = ["features", "comparison", "methodology", "faq"];
    let positions: Vec<usize> = ids
        .iter()
        .map(|id| {
            html.find(&format!(r#"id="{id}""#))
                .unwrap_or_else(|| panic!("section {id} missing"))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    let nav = html.find("<nav").unwrap();
    let footer = html.find("<footer").unwrap();
    assert!(nav < positions[0]);
    assert!(footer > positions[3]);
}

#[test]
fn test_revealed_content_is_in_markup() {
    let html = render(|| view! { <LandingPage /> });

    // Pending wrappers still carry their children
    assert!(html.contains(r#"class="reveal""#));
    assert!(!html.contains(r#"class="reveal reveal-visible"#));
    assert!(html.contains("Por que os Traders falham?"));
    assert!(html.contains("transition-delay: 300ms"));
}

#[test]
fn test_pending_content_has_css_fallback_without_bundle() {
    let html = render(|| view! { <LandingPage /> });

    // Outside <noscript>, pending wrappers must still fade in on their own
    let scripted = match (html.find("<noscript>"), html.find("</noscript>")) {
        (Some(start), Some(end)) => format!("{}{}", &html[..start], &html[end..]),
        _ => html.clone(),
    };
    assert!(scripted.contains("animation: reveal-fallback"));
    assert!(scripted.contains("@keyframes reveal-fallback"));
    assert!(scripted.contains(".reveal.reveal-observed"));
    // No wrapper is claimed by an observer before hydration
    assert!(!html.contains(r#"class="reveal reveal-observed"#));
}

#[test]
fn test_reveal_wrapper_keeps_extra_classes() {
    let html = render(|| {
        view! {
            <RevealOnView delay=0.2 class="h-full">
                <p>"conteúdo"</p>
            </RevealOnView>
        }
    });

    assert!(html.contains(r#"class="reveal h-full""#));
    assert!(html.contains("transition-delay: 200ms"));
    assert!(html.contains("conteúdo"));
}
