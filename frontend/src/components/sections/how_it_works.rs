use yew::prelude::*;

use crate::content::STEPS;
use crate::utils::dom::use_in_view;
use crate::utils::motion::{reveal_style, stagger_delay};

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let steps = use_node_ref();
    let visible = use_in_view(steps.clone(), 0.1);

    html! {
        <section id="how-it-works" class="how-it-works">
            <div class="container">
                <div class="section-heading">
                    <h2>{"How "}<span class="gradient-text">{"Vibe Report"}</span>{" works"}</h2>
                    <p>{"A simple, effective process to gather meaningful insights and drive positive change in your organization."}</p>
                </div>
                <div class="steps" ref={steps}>
                    <div class="steps-spine"></div>
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div
                            key={step.number}
                            class={classes!("step", (i % 2 == 1).then_some("reversed"))}
                            style={reveal_style(visible, stagger_delay(i, 0.2), 0.8, 50.0)}
                        >
                            <div class="step-copy">
                                <div class="step-number-row">
                                    <span class="step-number">{step.number}</span>
                                    <i class="fas fa-chevron-right step-arrow"></i>
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                            <div class="step-image">
                                <img src={step.image} alt={step.title} loading="lazy" />
                            </div>
                        </div>
                    })}
                </div>
            </div>
            <style>
                {r#"
    .how-it-works {
        padding: 6rem 0;
        background: #f9fafb;
    }
    .steps {
        position: relative;
    }
    .steps-spine {
        position: absolute;
        top: 0;
        left: 50%;
        transform: translateX(-50%);
        width: 4px;
        height: 100%;
        background: #e5e7eb;
    }
    .step {
        position: relative;
        display: flex;
        align-items: center;
        margin-bottom: 6rem;
    }
    .step.reversed {
        flex-direction: row-reverse;
    }
    .step-copy, .step-image {
        width: 50%;
        padding: 0 3rem;
    }
    .step-number-row {
        display: flex;
        align-items: center;
        margin-bottom: 1rem;
    }
    .step-number {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        background: var(--brand);
        color: #fff;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .step-arrow {
        color: var(--brand);
        margin-left: 1rem;
    }
    .step-copy p {
        color: #4b5563;
    }
    .step-image img {
        width: 100%;
        height: 16rem;
        object-fit: cover;
        border-radius: 0.75rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    @media (max-width: 1024px) {
        .steps-spine, .step-arrow {
            display: none;
        }
        .step, .step.reversed {
            flex-direction: column;
        }
        .step-copy, .step-image {
            width: 100%;
            padding: 0;
            margin-bottom: 2rem;
        }
    }
                "#}
            </style>
        </section>
    }
}
