//! Reveal-on-view state and timing
//!
//! An element starts `Pending` (faded and shifted down) and becomes `Revealed`
//! the first time it intersects the viewport. Revealed is terminal.
//!
//! Pending content must not depend on the browser bundle to become visible.
//! Every pending wrapper runs a CSS fallback animation that fades it in after
//! [`REVEAL_FALLBACK_DELAY_MS`]; a wrapper whose observer is attached carries
//! [`REVEAL_OBSERVED_CLASS`], which cancels the fallback and hands control to
//! the observer.

/// Entrance transition length
pub const REVEAL_DURATION_MS: u32 = 800;

/// Easing curve of the entrance transition.
pub const REVEAL_EASING: &str = "cubic-bezier(0.21, 0.47, 0.32, 0.98)";

/// Initial downward offset of a pending element, in pixels.
pub const REVEAL_OFFSET_PX: u32 = 30;

/// Fraction of the element that must be visible to trigger.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin handed to the intersection observer.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// How long a pending wrapper waits for its observer before fading in anyway.
pub const REVEAL_FALLBACK_DELAY_MS: u32 = 2500;

/// Marks a wrapper whose intersection observer is attached.
pub const REVEAL_OBSERVED_CLASS: &str = "reveal-observed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Feed one intersection observation. Once revealed, later observations
    /// (including the element leaving the viewport) are ignored.
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Pending if intersecting => RevealState::Revealed,
            RevealState::Pending => RevealState::Pending,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    pub fn class(&self) -> &'static str {
        match self {
            RevealState::Pending => "reveal",
            RevealState::Revealed => "reveal reveal-visible",
        }
    }
}

/// Transition timing for one wrapped element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl RevealTiming {
    /// Timing with a delay given in seconds, as sections stagger cards by
    /// tenths of a second. Negative or non-finite delays clamp to zero.
    pub fn with_delay_secs(delay_secs: f64) -> Self {
        let delay_ms = if delay_secs.is_finite() && delay_secs > 0.0 {
            (delay_secs * 1000.0).round() as u32
        } else {
            0
        };
        Self {
            duration_ms: REVEAL_DURATION_MS,
            delay_ms,
        }
    }

    /// Inline `style` value carrying the transition.
    pub fn style(&self) -> String {
        format!(
            "transition-property: opacity, transform; transition-duration: {}ms; transition-delay: {}ms; transition-timing-function: {};",
            self.duration_ms, self.delay_ms, REVEAL_EASING
        )
    }
}

/// Full `class` value of a wrapper: state class, observer marker, then any
/// caller-supplied classes.
pub fn wrapper_class(state: RevealState, observed: bool, extra: &str) -> String {
    let mut class = state.class().to_string();
    if observed {
        class.push(' ');
        class.push_str(REVEAL_OBSERVED_CLASS);
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Stylesheet rules for reveal wrappers.
///
/// Pending wrappers start hidden and fade in through `reveal-fallback` unless
/// an observer has claimed them. Reduced-motion users see content at once.
pub fn reveal_css() -> String {
    format!(
        r#"
            .reveal {{
                opacity: 0;
                transform: translateY({offset}px);
                animation: reveal-fallback {duration}ms {easing} {fallback}ms forwards;
            }}
            .reveal.{observed} {{
                animation: none;
            }}
            .reveal.reveal-visible {{
                opacity: 1;
                transform: translateY(0);
            }}
            @keyframes reveal-fallback {{
                to {{ opacity: 1; transform: none; }}
            }}
            @media (prefers-reduced-motion: reduce) {{
                .reveal {{ opacity: 1; transform: none; transition: none !important; animation: none; }}
            }}
        "#,
        offset = REVEAL_OFFSET_PX,
        duration = REVEAL_DURATION_MS,
        easing = REVEAL_EASING,
        fallback = REVEAL_FALLBACK_DELAY_MS,
        observed = REVEAL_OBSERVED_CLASS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_on_first_intersection() {
        let state = RevealState::default();
        assert_eq!(state.observe(false), RevealState::Pending);
        assert_eq!(state.observe(true), RevealState::Revealed);
    }

    #[test]
    fn test_never_rehides() {
        let mut state = RevealState::Pending.observe(true);
        for intersecting in [false, true, false, false] {
            state = state.observe(intersecting);
            assert!(state.is_revealed());
        }
    }

    #[test]
    fn test_class_reflects_state() {
        assert_eq!(RevealState::Pending.class(), "reveal");
        assert!(RevealState::Revealed.class().contains("reveal-visible"));
    }

    #[test]
    fn test_delay_in_seconds() {
        assert_eq!(RevealTiming::with_delay_secs(0.3).delay_ms, 300);
        assert_eq!(RevealTiming::with_delay_secs(-1.0).delay_ms, 0);
        assert_eq!(RevealTiming::with_delay_secs(f64::NAN).delay_ms, 0);
    }

    #[test]
    fn test_wrapper_class_composition() {
        assert_eq!(wrapper_class(RevealState::Pending, false, ""), "reveal");
        assert_eq!(
            wrapper_class(RevealState::Pending, true, "h-full"),
            "reveal reveal-observed h-full"
        );
        assert_eq!(
            wrapper_class(RevealState::Revealed, true, ""),
            "reveal reveal-visible reveal-observed"
        );
    }

    #[test]
    fn test_pending_content_fades_in_without_observer() {
        let css = reveal_css();
        assert!(css.contains("animation: reveal-fallback 800ms"));
        assert!(css.contains(&format!("{REVEAL_FALLBACK_DELAY_MS}ms forwards")));
        assert!(css.contains("@keyframes reveal-fallback"));
        assert!(css.contains("to { opacity: 1; transform: none; }"));
    }

    #[test]
    fn test_observed_wrappers_cancel_fallback() {
        let css = reveal_css();
        let rule = css
            .split(".reveal.reveal-observed {")
            .nth(1)
            .expect("observed rule present");
        let body = rule.split('}').next().unwrap_or_default();
        assert!(body.contains("animation: none"));
    }

    #[test]
    fn test_style_contains_timing() {
        let style = RevealTiming::with_delay_secs(0.2).style();
        assert!(style.contains("transition-duration: 800ms"));
        assert!(style.contains("transition-delay: 200ms"));
        assert!(style.contains(REVEAL_EASING));
    }
}
