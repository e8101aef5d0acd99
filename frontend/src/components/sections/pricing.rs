use yew::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Tooltip};
use crate::content::{Plan, PLANS};
use crate::utils::dom::use_in_view;
use crate::utils::motion::{reveal_style, stagger_delay};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    #[default]
    Annually,
}

impl BillingCycle {
    /// Per user per month under this cycle.
    pub fn price(self, plan: &Plan) -> u32 {
        match self {
            BillingCycle::Monthly => plan.monthly,
            BillingCycle::Annually => plan.annually,
        }
    }

    /// What a user saves over a year by paying annually, if this cycle
    /// earns a saving at all.
    pub fn yearly_savings(self, plan: &Plan) -> Option<u32> {
        match self {
            BillingCycle::Monthly => None,
            BillingCycle::Annually => Some(plan.monthly.saturating_sub(plan.annually) * 12),
        }
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    index: usize,
    cycle: BillingCycle,
    visible: bool,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &PLANS[props.index];
    let cycle = props.cycle;

    html! {
        <div
            class={classes!("plan-card", plan.popular.then_some("popular"))}
            style={reveal_style(props.visible, stagger_delay(props.index, 0.1), 0.5, 30.0)}
        >
            if plan.popular {
                <div class="popular-badge">{"MOST POPULAR"}</div>
            }
            <div class="plan-head">
                <h3>{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>
                <div class="plan-price">
                    <span class="amount">{format!("${}", cycle.price(plan))}</span>
                    <span class="per">{"per user / month"}</span>
                </div>
                if let Some(savings) = cycle.yearly_savings(plan) {
                    <p class="plan-savings">{format!("Save ${} per user annually", savings)}</p>
                }
                <Button
                    variant={if plan.popular { ButtonVariant::Primary } else { ButtonVariant::Outline }}
                    class="full-width"
                >
                    {if plan.popular { "Start your free trial" } else { "Choose plan" }}
                </Button>
            </div>
            <div class="plan-features">
                <h4>{"Features included:"}</h4>
                <ul>
                    { for plan.features.iter().map(|feature| html! {
                        <li key={feature.text} class={classes!(if feature.included { "included" } else { "excluded" })}>
                            <i class={if feature.included { "fas fa-check" } else { "fas fa-xmark" }}></i>
                            <span>
                                {feature.text}
                                if let Some(tip) = feature.tooltip {
                                    <Tooltip content={tip}>
                                        <i class="far fa-circle-question help-icon"></i>
                                    </Tooltip>
                                }
                            </span>
                        </li>
                    })}
                </ul>
            </div>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let cycle = use_state(BillingCycle::default);
    let cards = use_node_ref();
    let visible = use_in_view(cards.clone(), 0.1);

    let choose = |next: BillingCycle| {
        let cycle = cycle.clone();
        Callback::from(move |_: MouseEvent| cycle.set(next))
    };
    let annual = *cycle == BillingCycle::Annually;

    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Simple, "}<span class="gradient-text">{"transparent"}</span>{" pricing"}</h2>
                    <p>{"Choose a plan that works for your team, with no hidden fees or long-term commitments."}</p>
                </div>

                <div class="billing-toggle-wrap">
                    <div class="billing-toggle" role="group" aria-label="Billing cycle">
                        <button class={classes!("cycle", (!annual).then_some("active"))} onclick={choose(BillingCycle::Monthly)}>
                            {"Monthly"}
                        </button>
                        <button class={classes!("cycle", annual.then_some("active"))} onclick={choose(BillingCycle::Annually)}>
                            {"Annually "}<span class="discount">{"(20% off)"}</span>
                        </button>
                        <div class={classes!("cycle-pill", annual.then_some("right"))}></div>
                    </div>
                </div>

                <div class="plan-grid" ref={cards}>
                    { for (0..PLANS.len()).map(|index| html! {
                        <PlanCard key={index} {index} cycle={*cycle} {visible} />
                    })}
                </div>

                <div class="custom-plan">
                    <h3>{"Need a custom plan?"}</h3>
                    <p>{"We offer tailored solutions for organizations with unique requirements. Our team will work with you to build a plan that perfectly fits your needs."}</p>
                    <Button variant={ButtonVariant::White} size={ButtonSize::Lg}>{"Contact Sales"}</Button>
                </div>
            </div>
            <style>
                {r#"
    .pricing {
        padding: 6rem 0;
        background: #f9fafb;
    }
    .billing-toggle-wrap {
        display: flex;
        justify-content: center;
        margin: -1.5rem 0 3rem;
    }
    .billing-toggle {
        position: relative;
        display: inline-flex;
        background: #fff;
        padding: 0.25rem;
        border-radius: 0.5rem;
        border: 1px solid #e5e7eb;
    }
    .cycle {
        position: relative;
        z-index: 1;
        background: none;
        border: none;
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: #374151;
        cursor: pointer;
        transition: color 0.2s ease;
    }
    .cycle.active {
        color: #fff;
    }
    .discount {
        font-size: 0.75rem;
        opacity: 0.75;
    }
    .cycle-pill {
        position: absolute;
        top: 0.25rem;
        left: 0.25rem;
        width: 45%;
        height: calc(100% - 8px);
        border-radius: 0.375rem;
        background: var(--brand);
        transition: all 0.2s ease-in-out;
    }
    .cycle-pill.right {
        left: 50%;
        width: 50%;
    }
    .plan-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .plan-card {
        position: relative;
        background: #fff;
        border: 1px solid #e5e7eb;
        border-radius: 0.75rem;
        overflow: hidden;
    }
    .plan-card.popular {
        border-color: var(--brand);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .popular-badge {
        position: absolute;
        top: 0;
        right: 0;
        background: var(--brand);
        color: #fff;
        font-size: 0.75rem;
        font-weight: 700;
        padding: 0.25rem 0.75rem;
        border-bottom-left-radius: 0.5rem;
    }
    .plan-head, .plan-features {
        padding: 2rem;
    }
    .plan-features {
        border-top: 1px solid #f3f4f6;
    }
    .plan-description {
        color: #6b7280;
    }
    .plan-price .amount {
        font-size: 2.25rem;
        font-weight: 700;
    }
    .plan-price .per {
        color: #6b7280;
        margin-left: 0.5rem;
    }
    .plan-savings {
        font-size: 0.875rem;
        color: #16a34a;
    }
    .plan-features ul {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .plan-features li i {
        margin-right: 0.5rem;
    }
    .plan-features li.included i { color: #22c55e; }
    .plan-features li.excluded { color: #9ca3af; }
    .plan-features li.excluded i { color: #d1d5db; }
    .help-icon {
        margin-left: 0.25rem;
        color: #9ca3af;
        font-size: 0.8rem;
    }
    .custom-plan {
        margin: 4rem auto 0;
        max-width: 64rem;
        background: #111827;
        color: #fff;
        border-radius: 0.75rem;
        padding: 3rem;
        text-align: center;
    }
    .custom-plan p {
        color: #d1d5db;
        max-width: 42rem;
        margin: 0 auto 1.5rem;
    }
    @media (max-width: 1024px) {
        .plan-grid {
            grid-template-columns: 1fr;
        }
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
    fn test_default_cycle_is_annual() {
        assert_eq!(BillingCycle::default(), BillingCycle::Annually);
    }

    #[test]
    fn test_price_follows_cycle() {
        let growth = &PLANS[1];
        assert_eq!(BillingCycle::Monthly.price(growth), 19);
        assert_eq!(BillingCycle::Annually.price(growth), 15);
    }

    #[test]
    fn test_yearly_savings() {
        assert_eq!(BillingCycle::Annually.yearly_savings(&PLANS[0]), Some(24));
        assert_eq!(BillingCycle::Annually.yearly_savings(&PLANS[1]), Some(48));
        assert_eq!(BillingCycle::Annually.yearly_savings(&PLANS[2]), Some(120));
        assert_eq!(BillingCycle::Monthly.yearly_savings(&PLANS[2]), None);
    }
}
