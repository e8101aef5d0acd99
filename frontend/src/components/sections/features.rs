use yew::prelude::*;

use crate::content::{FEATURES, INSIGHT_POINTS};
use crate::utils::dom::use_in_view;
use crate::utils::motion::{reveal_style, stagger_delay};

#[function_component(Features)]
pub fn features() -> Html {
    let grid = use_node_ref();
    let highlight = use_node_ref();
    let grid_visible = use_in_view(grid.clone(), 0.1);
    let highlight_visible = use_in_view(highlight.clone(), 0.2);

    html! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Powerful tools for a "}<span class="gradient-text">{"thriving workplace"}</span></h2>
                    <p>{"Everything you need to understand, measure, and improve employee engagement in one intuitive platform."}</p>
                </div>

                <div class="feature-grid" ref={grid}>
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <div key={feature.title} class="feature-card" style={reveal_style(grid_visible, stagger_delay(i, 0.1), 0.6, 30.0)}>
                            <div class="feature-head">
                                <div class="feature-icon"><i class={feature.icon}></i></div>
                                <h3>{feature.title}</h3>
                            </div>
                            <p>{feature.description}</p>
                        </div>
                    })}
                </div>

                <div class="insight-block" ref={highlight} style={reveal_style(highlight_visible, 0.4, 0.8, 40.0)}>
                    <div class="insight-copy">
                        <h3>{"Smart insights, right when you need them"}</h3>
                        <p>{"Our AI-powered analytics engine identifies patterns and trends in your feedback data, automatically highlighting areas that need attention before they become problems."}</p>
                        <ul>
                            { for INSIGHT_POINTS.iter().map(|point| html! {
                                <li key={*point}><span class="check"><i class="fas fa-check"></i></span>{*point}</li>
                            })}
                        </ul>
                    </div>
                    <div class="insight-image">
                        <img
                            src="https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&w=1170&q=80"
                            alt="Vibe Report Analytics Dashboard"
                            loading="lazy"
                        />
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .features {
        padding: 6rem 0;
        position: relative;
        overflow: hidden;
    }
    .feature-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        margin-bottom: 5rem;
    }
    .feature-card {
        background: #fff;
        border: 1px solid #f3f4f6;
        border-radius: 0.75rem;
        padding: 2rem;
        transition: box-shadow 0.3s ease;
    }
    .feature-card:hover {
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .feature-head {
        display: flex;
        align-items: center;
        margin-bottom: 1rem;
    }
    .feature-icon {
        padding: 0.75rem;
        border-radius: 0.5rem;
        background: rgba(224, 42, 164, 0.12);
        color: var(--brand);
        margin-right: 1rem;
        transition: transform 0.2s ease;
    }
    .feature-card:hover .feature-icon {
        transform: scale(1.1);
    }
    .feature-card p {
        color: #4b5563;
    }
    .insight-block {
        display: grid;
        grid-template-columns: 1fr 1fr;
        background: #1f2937;
        border-radius: 1rem;
        overflow: hidden;
    }
    .insight-copy {
        padding: 3rem;
        color: #fff;
    }
    .insight-copy p {
        color: #d1d5db;
        font-size: 1.125rem;
    }
    .insight-copy ul {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .insight-copy .check {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 1.25rem;
        height: 1.25rem;
        border-radius: 50%;
        background: var(--brand);
        font-size: 0.625rem;
        margin-right: 0.75rem;
    }
    .insight-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    @media (max-width: 1024px) {
        .feature-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .insight-block {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 640px) {
        .feature-grid {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
