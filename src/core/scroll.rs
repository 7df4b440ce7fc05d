//! Navbar scroll state
//!
//! The navbar switches from a transparent bar to a filled, blurred bar once the
//! page has scrolled past [`SCROLL_THRESHOLD_PX`]. The flag is derived from the
//! current offset alone, so there is no hysteresis band.

/// Vertical offset, in CSS pixels, past which the page counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Whether `offset` is past the threshold. An offset of exactly 50 is not.
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Visual style of the navbar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavbarStyle {
    #[default]
    Transparent,
    Filled,
}

impl NavbarStyle {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            NavbarStyle::Filled
        } else {
            NavbarStyle::Transparent
        }
    }

    pub fn from_offset(offset: f64) -> Self {
        Self::from_scrolled(is_scrolled(offset))
    }

    /// Tailwind classes appended to the navbar's base classes.
    pub fn classes(&self) -> &'static str {
        match self {
            NavbarStyle::Transparent => "bg-transparent py-6",
            NavbarStyle::Filled => "bg-black/80 backdrop-blur-lg border-b border-white/10 py-4",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavbarStyle::Transparent => "transparent",
            NavbarStyle::Filled => "filled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(5000.0));
    }

    #[test]
    fn test_monotonic_over_offsets() {
        let mut previous = false;
        for offset in 0..200 {
            let current = is_scrolled(offset as f64);
            assert!(!previous || current, "flag dropped at offset {offset}");
            assert_eq!(current, offset > 50);
            previous = current;
        }
    }

    #[test]
    fn test_scroll_down_and_back() {
        assert_eq!(NavbarStyle::from_offset(0.0), NavbarStyle::Transparent);
        assert_eq!(NavbarStyle::from_offset(120.0), NavbarStyle::Filled);
        assert_eq!(NavbarStyle::from_offset(10.0), NavbarStyle::Transparent);
    }

    #[test]
    fn test_filled_style_is_blurred() {
        assert!(NavbarStyle::Filled.classes().contains("backdrop-blur-lg"));
        assert!(NavbarStyle::Transparent.classes().contains("bg-transparent"));
    }

    #[test]
    fn test_default_is_transparent() {
        assert_eq!(NavbarStyle::default(), NavbarStyle::Transparent);
    }
}
