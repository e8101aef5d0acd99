use web_sys::Element;
use yew::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::utils::dom::EventListener;
use crate::utils::motion::{self, Parallax};

const HEADLINE_STEP_SECS: f64 = 0.15;
const PERKS: [&str; 3] = ["No credit card required", "14-day free trial", "Cancel anytime"];

fn parallax_for(section: &NodeRef) -> Parallax {
    let progress = section
        .cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            motion::scroll_progress(rect.top(), rect.height())
        })
        .unwrap_or(0.0);
    motion::parallax(progress)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let shift = use_state_eq(|| motion::parallax(0.0));
    let entered = use_state(|| false);

    {
        let section = section.clone();
        let shift = shift.clone();
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                // flip on the next frame so the entry transition actually runs
                let reveal = gloo_timers::callback::Timeout::new(0, move || entered.set(true));
                let listener = EventListener::on_window("scroll", move |_| {
                    shift.set(parallax_for(&section));
                });
                move || {
                    drop(reveal);
                    drop(listener);
                }
            },
            (),
        );
    }

    let line_style = |i: usize| motion::reveal_style(*entered, motion::stagger_delay(i, HEADLINE_STEP_SECS), 0.8, 20.0);
    let content_style = format!(
        "transform: translateY({}px); opacity: {};",
        shift.offset_y, shift.opacity
    );

    html! {
        <section id="hero" class="hero" ref={section}>
            <div class="hero-grid-bg"></div>
            <div class="container hero-layout" style={content_style}>
                <div class="hero-copy">
                    <div style={line_style(0)}>
                        <span class="hero-badge">{"Employee Engagement Made Simple"}</span>
                    </div>
                    <h1 class="hero-title" style={line_style(1)}>
                        <span class="block">{"Pulse-check your company's"}</span>
                        <span class="gradient-text">{"heartbeat and happiness"}</span>
                    </h1>
                    <p class="hero-subtitle" style={line_style(2)}>
                        {"Effortlessly gather periodic feedback from your employees, track their engagement levels, and take meaningful action to improve their workplace experience."}
                    </p>
                    <div class="hero-cta" style={line_style(3)}>
                        <Button size={ButtonSize::Lg} class="group">
                            {"Start Free Trial"}
                            <i class="fas fa-arrow-right arrow"></i>
                        </Button>
                        <Button variant={ButtonVariant::Outline} size={ButtonSize::Lg}>{"Book a Demo"}</Button>
                    </div>
                    <div class="hero-perks" style={line_style(4)}>
                        { for PERKS.iter().map(|perk| html! {
                            <div key={*perk} class="perk">
                                <i class="fas fa-circle-check"></i>
                                <span>{*perk}</span>
                            </div>
                        })}
                    </div>
                </div>
                <div class="hero-visual" style={line_style(2)}>
                    <div class="dashboard-card">
                        <img
                            src="https://images.unsplash.com/photo-1568992688065-536aad8a12f6?auto=format&fit=crop&w=1000&q=80"
                            alt="Vibe Report Dashboard"
                        />
                        <div class="dashboard-chrome">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                            <span class="chrome-title">{"Vibe Report Dashboard"}</span>
                        </div>
                        <div class="dashboard-body">
                            <h3>{"Employee Feedback Dashboard"}</h3>
                            <p>{"Track engagement metrics in real-time"}</p>
                            <div class="metric-row">
                                <div class="metric green"><span>{"Happiness"}</span><strong>{"78%"}</strong><small>{"↑ 4%"}</small></div>
                                <div class="metric blue"><span>{"Engagement"}</span><strong>{"82%"}</strong><small>{"↑ 7%"}</small></div>
                                <div class="metric purple"><span>{"Retention"}</span><strong>{"91%"}</strong><small>{"↑ 2%"}</small></div>
                            </div>
                        </div>
                    </div>
                    <div class="floating-badge">
                        <span class="badge-ring">{"85%"}</span>
                        <div>
                            <p class="badge-title">{"Weekly Response Rate"}</p>
                            <p class="badge-trend">{"↑ 12% this month"}</p>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .hero {
        position: relative;
        padding: 9rem 0 8rem;
        overflow: hidden;
        background: #f9fafb;
    }
    .hero-grid-bg {
        position: absolute;
        inset: 0;
        opacity: 0.3;
        background-image: linear-gradient(#e5e7eb 1px, transparent 1px), linear-gradient(90deg, #e5e7eb 1px, transparent 1px);
        background-size: 40px 40px;
    }
    .hero-layout {
        position: relative;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2.5rem;
        align-items: center;
        will-change: transform, opacity;
    }
    .hero-badge {
        background: rgba(224, 42, 164, 0.1);
        color: var(--brand);
        padding: 0.375rem 1rem;
        border-radius: 999px;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .hero-title {
        font-size: 3.5rem;
        line-height: 1.1;
        margin: 1.5rem 0;
    }
    .hero-title .block {
        display: block;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #4b5563;
        margin-bottom: 2rem;
    }
    .hero-cta {
        display: flex;
        gap: 1rem;
        margin-bottom: 3rem;
    }
    .hero-cta .arrow {
        margin-left: 0.5rem;
        transition: transform 0.2s ease;
    }
    .hero-cta .group:hover .arrow {
        transform: translateX(4px);
    }
    .hero-perks {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem 2rem;
        color: #4b5563;
    }
    .perk i {
        color: var(--brand);
        margin-right: 0.5rem;
    }
    .hero-visual {
        position: relative;
    }
    .dashboard-card {
        position: relative;
        background: #fff;
        border-radius: 1rem;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        overflow: hidden;
        border: 1px solid #f3f4f6;
    }
    .dashboard-card img {
        width: 100%;
        display: block;
    }
    .dashboard-chrome {
        position: absolute;
        top: 1rem;
        left: 1rem;
        right: 1rem;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        background: rgba(255, 255, 255, 0.9);
        border-radius: 0.5rem;
        padding: 0.75rem;
    }
    .dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
    }
    .dot.red { background: #ef4444; }
    .dot.yellow { background: #eab308; }
    .dot.green { background: #22c55e; }
    .chrome-title {
        margin-left: auto;
        font-size: 0.75rem;
        color: #6b7280;
    }
    .dashboard-body {
        padding: 1.5rem;
    }
    .metric-row {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 0.75rem;
    }
    .metric {
        display: flex;
        flex-direction: column;
        padding: 0.75rem;
        border-radius: 0.5rem;
        font-size: 0.75rem;
    }
    .metric strong { font-size: 1.125rem; }
    .metric.green { background: #f0fdf4; color: #16a34a; }
    .metric.blue { background: #eff6ff; color: #2563eb; }
    .metric.purple { background: #faf5ff; color: #9333ea; }
    .floating-badge {
        position: absolute;
        bottom: -1.5rem;
        left: -1.5rem;
        display: flex;
        gap: 0.5rem;
        align-items: center;
        background: #fff;
        border-radius: 0.75rem;
        padding: 0.75rem 1rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        animation: float 6s ease-in-out infinite;
    }
    .badge-ring {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        background: rgba(224, 42, 164, 0.2);
        color: var(--brand);
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 0.75rem;
    }
    .badge-title { font-size: 0.75rem; font-weight: 500; margin: 0; }
    .badge-trend { font-size: 0.75rem; color: #16a34a; margin: 0; }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    @media (max-width: 1024px) {
        .hero-layout {
            grid-template-columns: 1fr;
        }
        .hero-title {
            font-size: 2.5rem;
        }
    }
                "#}
            </style>
        </section>
    }
}
