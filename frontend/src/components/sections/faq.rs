use yew::prelude::*;

use crate::content::FAQ_ITEMS;
use crate::utils::dom::use_in_view;
use crate::utils::motion::{reveal_style, stagger_delay};

/// Accordion rule: clicking the open entry closes it, clicking any other
/// entry opens that one instead. At most one entry is open.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    open: bool,
    visible: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let entry = &FAQ_ITEMS[props.index];
    let onclick = {
        let index = props.index;
        props.on_toggle.reform(move |_: MouseEvent| index)
    };
    let panel_id = format!("faq-answer-{}", props.index);

    html! {
        <div
            class={classes!("faq-item", props.open.then_some("open"))}
            style={reveal_style(props.visible, stagger_delay(props.index, 0.05), 0.5, 20.0)}
        >
            <button
                type="button"
                class="faq-question"
                aria-expanded={props.open.to_string()}
                aria-controls={panel_id.clone()}
                {onclick}
            >
                <span class="question-text">{entry.question}</span>
                <i class="fas fa-chevron-down toggle-icon"></i>
            </button>
            <div id={panel_id} class="faq-answer" role="region">
                <p>{entry.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| Some(0usize));
    let list = use_node_ref();
    let visible = use_in_view(list.clone(), 0.1);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| open.set(toggle(*open, index)))
    };

    html! {
        <section id="faq" class="faq">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Frequently asked "}<span class="gradient-text">{"questions"}</span></h2>
                    <p>{"Everything you need to know about Vibe Report and how it can help your organization."}</p>
                </div>

                <div class="faq-list" ref={list}>
                    { for (0..FAQ_ITEMS.len()).map(|index| html! {
                        <FaqItem
                            key={index}
                            {index}
                            open={*open == Some(index)}
                            {visible}
                            on_toggle={on_toggle.clone()}
                        />
                    })}
                </div>

                <p class="faq-support">
                    {"Still have questions? "}
                    <a href="#contact">{"Contact our support team"}</a>
                </p>
            </div>
            <style>
                {r#"
    .faq {
        padding: 6rem 0;
        background: #f9fafb;
    }
    .faq-list {
        max-width: 48rem;
        margin: 0 auto;
    }
    .faq-item {
        background: #fff;
        border: 1px solid #e5e7eb;
        border-radius: 0.75rem;
        margin-bottom: 1rem;
        overflow: hidden;
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        text-align: left;
        background: none;
        border: none;
        padding: 1.25rem 1.5rem;
        font-size: 1.05rem;
        font-weight: 600;
        color: #111827;
        cursor: pointer;
    }
    .toggle-icon {
        color: var(--brand);
        transition: transform 0.3s ease;
    }
    .faq-item.open .toggle-icon {
        transform: rotate(180deg);
    }
    .faq-answer {
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.3s ease;
    }
    .faq-item.open .faq-answer {
        max-height: 40rem;
    }
    .faq-answer p {
        margin: 0;
        padding: 0 1.5rem 1.25rem;
        color: #4b5563;
        line-height: 1.6;
    }
    .faq-support {
        text-align: center;
        margin-top: 3rem;
        color: #6b7280;
    }
    .faq-support a {
        color: var(--brand);
        font-weight: 500;
    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_closes_open_entry() {
        assert_eq!(toggle(Some(0), 0), None);
    }

    #[test]
    fn test_toggle_switches_entry() {
        assert_eq!(toggle(Some(0), 3), Some(3));
        assert_eq!(toggle(None, 2), Some(2));
    }
}
