use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;

use crate::components::layout::{Footer, Header};
use crate::components::sections::{
    Cta, Faq, Features, Hero, HowItWorks, Integration, Pricing, Stats, Testimonials,
};
use crate::config;
use crate::utils::dom::{smooth_scroll_to, EventListener};

/// The selector to scroll to for an in-page link, or `None` for a bare `#`.
fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Routes clicks on any `a[href^="#"]` through a smooth scroll that leaves
/// room for the fixed header.
fn on_document_click(event: Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Ok(Some(anchor)) = target.closest("a[href^=\"#\"]") else {
        return;
    };
    event.prevent_default();
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    match anchor_target(&href) {
        Some(selector) => {
            smooth_scroll_to(selector, config::anchor_scroll_offset());
        }
        None => {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    use_effect_with_deps(
        move |_| {
            let listener = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| EventListener::new(&document, "click", on_document_click));
            move || drop(listener)
        },
        (),
    );

    html! {
        <>
            <Header />
            <main class="landing">
                <Hero />
                <Features />
                <HowItWorks />
                <Stats />
                <Integration />
                <Testimonials />
                <Pricing />
                <Faq />
                <Cta />
            </main>
            <Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#pricing"), Some("#pricing"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
    }
}
