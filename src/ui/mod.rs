pub mod icon;
pub mod pages;
pub mod reveal;
pub mod sections;

#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use icon::Icon;
pub use pages::{LandingPage, NotFoundPage};
pub use reveal::RevealOnView;
