use yew::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="cta">
            <svg class="cta-blob" viewBox="0 0 200 200" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                <path
                    fill="rgba(255, 255, 255, 0.08)"
                    d="M44.7,-76.4C58.8,-69.2,71.8,-58.9,79.6,-45.3C87.4,-31.7,90,-15.9,88.5,-0.9C87,14.2,81.5,28.4,73.1,40.6C64.7,52.8,53.4,63,40.4,70.6C27.4,78.2,13.7,83.2,-0.9,84.7C-15.5,86.3,-31,84.4,-44.5,77.4C-58,70.4,-69.6,58.3,-77.3,44.1C-85,29.9,-88.8,14.9,-87.9,0.5C-87,-13.9,-81.4,-27.8,-73.3,-39.8C-65.2,-51.8,-54.6,-61.9,-42.1,-70.2C-29.6,-78.5,-14.8,-85,0.6,-86C16,-87,30.6,-83.6,44.7,-76.4Z"
                    transform="translate(100 100)"
                />
            </svg>
            <div class="container cta-inner">
                <h2>{"Ready to transform your workplace culture?"}</h2>
                <p>{"Join thousands of forward-thinking companies using Vibe Report to build happier, more productive teams."}</p>
                <div class="cta-actions">
                    <Button variant={ButtonVariant::White} size={ButtonSize::Lg}>{"Start your free trial"}</Button>
                    <Button variant={ButtonVariant::Ghost} size={ButtonSize::Lg} class="cta-ghost">{"Request a demo"}</Button>
                </div>
                <p class="cta-login">
                    {"Already a customer? "}
                    <a href="#">{"Log in here"}</a>
                </p>
            </div>
            <style>
                {r#"
    .cta {
        position: relative;
        overflow: hidden;
        padding: 6rem 0;
        background: linear-gradient(135deg, var(--brand), #9d1c72);
        color: #fff;
        text-align: center;
    }
    .cta-blob {
        position: absolute;
        top: -30%;
        right: -10%;
        width: 40rem;
        height: 40rem;
        pointer-events: none;
    }
    .cta-inner {
        position: relative;
        max-width: 48rem;
    }
    .cta h2 {
        font-size: 2.5rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .cta p {
        color: rgba(255, 255, 255, 0.85);
        font-size: 1.125rem;
    }
    .cta-actions {
        display: flex;
        justify-content: center;
        gap: 1rem;
        margin: 2rem 0 1.5rem;
        flex-wrap: wrap;
    }
    .cta-ghost {
        color: #fff;
        border: 1px solid rgba(255, 255, 255, 0.4);
    }
    .cta-login a {
        color: #fff;
        font-weight: 600;
        text-decoration: underline;
    }
                "#}
            </style>
        </section>
    }
}
