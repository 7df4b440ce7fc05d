//! Page content and the small state machines behind the interactive widgets

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod disclosure;
pub mod links;
pub mod reveal;
pub mod scroll;
pub mod seo;

pub use content::*;
pub use disclosure::Disclosure;
pub use links::{Anchor, CHECKOUT_URL, contact_url};
pub use reveal::{RevealState, RevealTiming};
pub use scroll::NavbarStyle;
