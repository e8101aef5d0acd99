use js_sys::Array;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};
use yew::prelude::*;

/// A DOM event listener that is removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(err) => {
                warn!("could not listen for {}: {:?}", event, err);
                None
            }
        }
    }

    /// Listens on `window`, if there is one.
    pub fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::new(&window, event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("could not stop listening for {}: {:?}", self.event, err);
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn inner_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Locks or releases page scrolling behind an overlay.
pub fn set_body_scroll_lock(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        if body.style().set_property("overflow", value).is_err() {
            warn!("could not update body overflow");
        }
    }
}

/// Smoothly scrolls so `selector`'s element sits `offset` pixels below the
/// top of the viewport. Returns false when nothing matched.
pub fn smooth_scroll_to(selector: &str, offset: f64) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let target = match document.query_selector(selector) {
        Ok(found) => found,
        Err(_) => {
            gloo_console::error!(format!("invalid anchor selector {}", selector));
            None
        }
    };
    let Some(target) = target else {
        return false;
    };
    let top = target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0) - offset;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Whether `node` has been at least `threshold` visible. Latches to true the
/// first time it happens and stops observing.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observed = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, threshold, visible));
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *visible
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    threshold: f64,
    visible: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let on_hit = visible.clone();
    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        let hit = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if hit {
            on_hit.set(true);
            observer.disconnect();
        }
    });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            // no observer support: show the content rather than hide it forever
            warn!("IntersectionObserver unavailable: {:?}", err);
            visible.set(true);
            None
        }
    }
}
