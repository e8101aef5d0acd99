use yew::prelude::*;

use crate::content::{IntegrationLogo, INTEGRATION_FEATURES, INTEGRATION_LOGOS};
use crate::utils::dom::use_in_view;
use crate::utils::motion::{marquee_duration_secs, reveal_style};

// logo width plus the gap between logos
const LOGO_SLOT_PX: f64 = 148.0;

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
struct MarqueeProps {
    logos: &'static [IntegrationLogo],
    direction: Direction,
    speed: f64,
}

/// Endless logo strip. The track holds the logos twice and slides by half its
/// width so the loop is seamless; hovering pauses it.
#[function_component(Marquee)]
fn marquee(props: &MarqueeProps) -> Html {
    let track_px = LOGO_SLOT_PX * props.logos.len() as f64;
    let animation = match props.direction {
        Direction::Left => "marquee-left",
        Direction::Right => "marquee-right",
    };
    let style = format!(
        "animation: {} {}s linear infinite;",
        animation,
        marquee_duration_secs(track_px, props.speed)
    );

    html! {
        <div class="marquee">
            <div class="marquee-track" {style}>
                { for props.logos.iter().chain(props.logos.iter()).enumerate().map(|(i, item)| html! {
                    <div key={i} class="marquee-logo">
                        <img src={item.logo} alt={item.name} width="100" height="40" loading="lazy" />
                    </div>
                })}
            </div>
        </div>
    }
}

#[function_component(Integration)]
pub fn integration() -> Html {
    let highlight = use_node_ref();
    let visible = use_in_view(highlight.clone(), 0.3);
    let (first_row, second_row) = INTEGRATION_LOGOS.split_at(6);

    html! {
        <section id="integrations" class="integration">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Seamless "}<span class="gradient-text">{"integrations"}</span></h2>
                    <p>{"Connect Vibe Report with your favorite workplace tools for a frictionless experience."}</p>
                </div>

                <div class="marquees">
                    <Marquee logos={first_row} direction={Direction::Left} speed={30.0} />
                    <Marquee logos={second_row} direction={Direction::Right} speed={25.0} />
                </div>

                <div class="integration-highlight" ref={highlight} style={reveal_style(visible, 0.2, 0.8, 40.0)}>
                    <div>
                        <h3>{"Connect with your existing tools in just a few clicks"}</h3>
                        <p>{"Vibe Report integrates with 30+ workplace tools, making it easy to incorporate employee feedback into your existing workflows. Set up once and get valuable insights delivered where your team already works."}</p>
                        <ul class="integration-features">
                            { for INTEGRATION_FEATURES.iter().map(|feature| html! {
                                <li key={*feature}><i class="fas fa-check"></i><span>{*feature}</span></li>
                            })}
                        </ul>
                    </div>
                    <div class="integration-image">
                        <img
                            src="https://images.unsplash.com/photo-1573164713988-8665fc963095?auto=format&fit=crop&w=1170&q=80"
                            alt="Integration Showcase"
                            loading="lazy"
                        />
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .integration {
        padding: 6rem 0;
        overflow: hidden;
    }
    .marquees {
        margin-bottom: 4rem;
    }
    .marquee {
        position: relative;
        overflow: hidden;
        padding: 1rem 0;
        -webkit-mask-image: linear-gradient(90deg, transparent, #fff 100px, #fff calc(100% - 100px), transparent);
        mask-image: linear-gradient(90deg, transparent, #fff 100px, #fff calc(100% - 100px), transparent);
    }
    .marquee-track {
        display: flex;
        width: max-content;
    }
    .marquee:hover .marquee-track {
        animation-play-state: paused !important;
    }
    .marquee-logo {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100px;
        height: 64px;
        margin-right: 48px;
        padding: 0 1rem;
        background: #fff;
        border-radius: 0.5rem;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .marquee-logo img {
        max-height: 40px;
        width: auto;
        object-fit: contain;
        filter: grayscale(1);
        opacity: 0.8;
        transition: filter 0.2s ease, opacity 0.2s ease;
    }
    .marquee-logo:hover img {
        filter: none;
        opacity: 1;
    }
    @keyframes marquee-left {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    @keyframes marquee-right {
        from { transform: translateX(-50%); }
        to { transform: translateX(0); }
    }
    .integration-highlight {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
        background: #f9fafb;
        border-radius: 1rem;
        padding: 3rem;
    }
    .integration-features {
        list-style: none;
        padding: 0;
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 0.75rem;
    }
    .integration-features i {
        color: var(--brand);
        margin-right: 0.5rem;
    }
    .integration-image img {
        width: 100%;
        height: 24rem;
        object-fit: cover;
        border-radius: 0.75rem;
    }
    @media (max-width: 1024px) {
        .integration-highlight {
            grid-template-columns: 1fr;
        }
    }
                "#}
            </style>
        </section>
    }
}
