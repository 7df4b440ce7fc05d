//! Outbound destinations and in-page anchors

/// Checkout page opened by every purchase call to action.
pub const CHECKOUT_URL: &str = "https://pay.hotmart.com/I104582582H";

/// Phone number (international format, digits only) behind the contact link.
pub const CONTACT_PHONE: &str = "5522988102360";

/// Message prefilled in the conversation opened by the contact link.
pub const CONTACT_MESSAGE: &str = "Quero testar o Hadassa IA";

/// Decorative hero texture. Failing to load falls back to the page background.
pub const HERO_TEXTURE_URL: &str =
    "https://images.unsplash.com/photo-1611974717483-36009bc7376c?q=80&w=2000&auto=format&fit=crop";

/// Decorative pattern layered over the final call to action gradient.
pub const CTA_TEXTURE_URL: &str = "https://www.transparenttextures.com/patterns/carbon-fibre.png";

/// Target for links that must open in a new browsing context.
pub const NEW_CONTEXT_TARGET: &str = "_blank";
/// `rel` paired with [`NEW_CONTEXT_TARGET`].
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

/// Build a messaging deep link that opens a conversation with `phone` and
/// `message` prefilled. Spaces are encoded as `+`, everything else is
/// percent-encoded.
pub fn messaging_deep_link(phone: &str, message: &str) -> String {
    let text = urlencoding::encode(message).replace("%20", "+");
    format!("https://wa.me/{phone}?text={text}")
}

/// Deep link used by the floating contact button.
pub fn contact_url() -> String {
    messaging_deep_link(CONTACT_PHONE, CONTACT_MESSAGE)
}

/// Same-document navigation targets. Each section renders `id()` so the
/// navbar links keep resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Features,
    Comparison,
    Methodology,
    Faq,
}

impl Anchor {
    /// Anchors in navbar order.
    pub const ALL: [Anchor; 4] = [
        Anchor::Features,
        Anchor::Comparison,
        Anchor::Methodology,
        Anchor::Faq,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Features => "features",
            Anchor::Comparison => "comparison",
            Anchor::Methodology => "methodology",
            Anchor::Faq => "faq",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Anchor::Features => "#features",
            Anchor::Comparison => "#comparison",
            Anchor::Methodology => "#methodology",
            Anchor::Faq => "#faq",
        }
    }

    /// Navbar label
    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Features => "Vantagens",
            Anchor::Comparison => "Comparativo",
            Anchor::Methodology => "Metodologia",
            Anchor::Faq => "FAQ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_url_matches_published_link() {
        assert_eq!(
            contact_url(),
            "https://wa.me/5522988102360?text=Quero+testar+o+Hadassa+IA"
        );
    }

    #[test]
    fn test_deep_link_encodes_reserved_characters() {
        let url = messaging_deep_link("123", "olá & tchau?");
        assert_eq!(url, "https://wa.me/123?text=ol%C3%A1+%26+tchau%3F");
    }

    #[test]
    fn test_anchor_href_points_at_id() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
    }

    #[test]
    fn test_anchor_order() {
        let ids: Vec<_> = Anchor::ALL.iter().map(Anchor::id).collect();
        assert_eq!(ids, vec!["features", "comparison", "methodology", "faq"]);
    }
}
