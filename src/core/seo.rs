//! Search engine metadata
//!
//! Builds the schema.org JSON-LD documents embedded in the page head.

use serde::Serialize;

use super::content::{FAQ_ENTRIES, FaqEntry, PRODUCT_NAME};
use super::links::CHECKOUT_URL;

pub const PAGE_TITLE: &str = "Hadassa IA - Automação Profissional Fimathe para MT5";

pub const PAGE_DESCRIPTION: &str = "Robô Hadassa IA: a estratégia FIMATHE 100% automatizada no MetaTrader 5. Garantia de 7 dias, acesso vitalício e licença ilimitada.";

pub const PAGE_KEYWORDS: &str =
    "Hadassa IA, robô MT5, Fimathe, trading automatizado, MetaTrader 5, expert advisor";

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Serialize)]
struct ProductDocument {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    offers: Offer,
}

#[derive(Debug, Serialize)]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    url: &'static str,
    availability: &'static str,
}

#[derive(Debug, Serialize)]
struct FaqPageDocument {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<Question>,
}

#[derive(Debug, Serialize)]
struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer,
}

#[derive(Debug, Serialize)]
struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    text: &'static str,
}

impl From<&FaqEntry> for Question {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            kind: "Question",
            name: entry.question,
            accepted_answer: Answer {
                kind: "Answer",
                text: entry.answer,
            },
        }
    }
}

/// JSON-LD `Product` document pointing at the checkout page.
pub fn product_json_ld() -> String {
    let doc = ProductDocument {
        context: SCHEMA_CONTEXT,
        kind: "Product",
        name: PRODUCT_NAME,
        description: PAGE_DESCRIPTION,
        offers: Offer {
            kind: "Offer",
            url: CHECKOUT_URL,
            availability: "https://schema.org/InStock",
        },
    };
    to_script_json(&doc)
}

/// JSON-LD `FAQPage` document built from the given entries.
pub fn faq_json_ld(entries: &[FaqEntry]) -> String {
    let doc = FaqPageDocument {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: entries.iter().map(Question::from).collect(),
    };
    to_script_json(&doc)
}

/// `FAQPage` document for the page's own FAQ.
pub fn page_faq_json_ld() -> String {
    faq_json_ld(&FAQ_ENTRIES)
}

// The output lands inside a <script> element, so `</` must not survive verbatim.
fn to_script_json<T: Serialize>(value: &T) -> String {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            leptos::logging::warn!("Failed to serialize JSON-LD document: {}", err);
            "{}".to_string()
        }
    };
    json.replace("</", "<\\/")
}
