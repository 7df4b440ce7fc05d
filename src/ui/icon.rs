use leptos::prelude::*;

use crate::core::IconKind;

/// Inline stroke icon. Colour follows `currentColor`, so text classes tint it.
#[component]
pub fn Icon(
    /// Which glyph to draw
    kind: IconKind,
    /// Size and colour classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph(kind)}
        </svg>
    }
}

fn glyph(kind: IconKind) -> AnyView {
    match kind {
        IconKind::ArrowRight => view! {
            <path d="M5 12h14" />
            <path d="m12 5 7 7-7 7" />
        }
        .into_any(),
        IconKind::Award => view! {
            <circle cx="12" cy="8" r="6" />
            <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" />
        }
        .into_any(),
        IconKind::BarChart => view! {
            <path d="M3 3v18h18" />
            <path d="M18 17V9" />
            <path d="M13 17V5" />
            <path d="M8 17v-3" />
        }
        .into_any(),
        IconKind::Brain => view! {
            <path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" />
            <path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" />
            <path d="M12 5v13" />
        }
        .into_any(),
        IconKind::CheckCircle => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="m9 12 2 2 4-4" />
        }
        .into_any(),
        IconKind::ChevronDown => view! { <path d="m6 9 6 6 6-6" /> }.into_any(),
        IconKind::ChevronRight => view! { <path d="m9 18 6-6-6-6" /> }.into_any(),
        IconKind::Clock => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="M12 6v6l4 2" />
        }
        .into_any(),
        IconKind::Cpu => view! {
            <rect x="4" y="4" width="16" height="16" rx="2" />
            <rect x="9" y="9" width="6" height="6" />
            <path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" />
        }
        .into_any(),
        IconKind::Lock => view! {
            <rect x="3" y="11" width="18" height="11" rx="2" ry="2" />
            <path d="M7 11V7a5 5 0 0 1 10 0v4" />
        }
        .into_any(),
        IconKind::MessageCircle => view! { <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" /> }.into_any(),
        IconKind::ShieldCheck => view! {
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10" />
            <path d="m9 12 2 2 4-4" />
        }
        .into_any(),
        IconKind::Target => view! {
            <circle cx="12" cy="12" r="10" />
            <circle cx="12" cy="12" r="6" />
            <circle cx="12" cy="12" r="2" />
        }
        .into_any(),
        IconKind::TrendingUp => view! {
            <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
            <polyline points="16 7 22 7 22 13" />
        }
        .into_any(),
        IconKind::XCircle => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="m15 9-6 6" />
            <path d="m9 9 6 6" />
        }
        .into_any(),
        IconKind::Zap => view! { <path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z" /> }.into_any(),
    }
}
