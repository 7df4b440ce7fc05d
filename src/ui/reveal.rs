//! Reveal-on-view wrapper
//!
//! Children render faded and shifted down, then ease into place the first time
//! the wrapper enters the viewport. Content is always in the markup; only the
//! entrance is deferred. A wrapper no observer claims (bundle never loaded,
//! hydration failed) fades in through the CSS fallback animation, and the
//! `<noscript>` rules show everything at once when scripting is off.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::reveal::wrapper_class;
use crate::core::{RevealState, RevealTiming};

#[component]
pub fn RevealOnView(
    /// Extra delay before the entrance starts, in seconds
    #[prop(optional)]
    delay: f64,
    /// Extra classes for the wrapper
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(RevealState::default());
    // Set once an observer watches the wrapper; cancels the CSS fallback
    let observed = RwSignal::new(false);
    let node_ref = NodeRef::<Div>::new();
    let timing = RevealTiming::with_delay_secs(delay);

    #[cfg(feature = "hydrate")]
    observe_once(node_ref, state, observed);

    view! {
        <div
            node_ref=node_ref
            class=move || wrapper_class(state.get(), observed.get(), class)
            style=timing.style()
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
type ObserverCallback =
    wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Attach a one-shot intersection observer to the wrapper. The observer is
/// disconnected and its callback freed when the wrapper unmounts.
#[cfg(feature = "hydrate")]
fn observe_once(node_ref: NodeRef<Div>, state: RwSignal<RevealState>, observed: RwSignal<bool>) {
    use leptos::logging::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

    let attached = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);
    on_cleanup(move || {
        attached.try_update_value(|slot| {
            if let Some((observer, _callback)) = slot.take() {
                observer.disconnect();
            }
        });
    });

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if state.get_untracked().is_revealed() {
            return;
        }
        if attached.with_value(Option::is_some) {
            return;
        }

        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                // The wrapper may already be unmounted; its signal is gone then.
                let Some(current) = state.try_get_untracked() else {
                    observer.disconnect();
                    return;
                };
                let next = current.observe(intersecting);
                if next != current {
                    let _ = state.try_set(next);
                }
                if next.is_revealed() {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&element);
                attached.set_value(Some((observer, callback)));
                observed.set(true);
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
                state.set(RevealState::Revealed);
            }
        }
    });
}
