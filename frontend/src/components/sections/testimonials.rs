use yew::prelude::*;

use crate::carousel::hook::use_carousel;
use crate::carousel::CarouselTimings;
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::content::{Testimonial, TESTIMONIALS};
use crate::utils::format::truncate_text;

const MAX_STARS: u8 = 5;
const DOT_TITLE_CHARS: usize = 48;

/// Whether each of the five stars is filled for `rating`.
fn filled_stars(rating: u8) -> impl Iterator<Item = bool> {
    let rating = rating.min(MAX_STARS);
    (0..MAX_STARS).map(move |star| star < rating)
}

#[derive(Properties, PartialEq)]
struct SlideProps {
    index: usize,
}

#[function_component(Slide)]
fn slide(props: &SlideProps) -> Html {
    let testimonial: &Testimonial = &TESTIMONIALS[props.index];

    html! {
        <div class="testimonial-slide">
            <div class="testimonial-person">
                <img class="testimonial-photo" src={testimonial.image} alt={testimonial.name} />
                <img class="testimonial-logo" src={testimonial.logo} alt={testimonial.company} />
            </div>
            <div class="testimonial-body">
                <div class="testimonial-stars" aria-label={format!("{} out of {} stars", testimonial.rating, MAX_STARS)}>
                    { for filled_stars(testimonial.rating).enumerate().map(|(i, filled)| html! {
                        <i key={i} class={classes!("fa-star", if filled { "fas" } else { "far" })}></i>
                    })}
                </div>
                <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
                <div class="testimonial-author">
                    <p class="name">{testimonial.name}</p>
                    <p class="role">{format!("{}, {}", testimonial.title, testimonial.company)}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_carousel(TESTIMONIALS.len(), CarouselTimings::default());
    let active = carousel.active_index();
    let paused = !carousel.is_autoplaying();

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.previous())
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.next())
    };

    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Loved by "}<span class="gradient-text">{"people teams"}</span></h2>
                    <p>{"Hear from the leaders who use Vibe Report to build healthier, more engaged workplaces."}</p>
                </div>

                <div class="testimonial-stage">
                    // keyed so the entering slide remounts and replays its fade
                    <Slide key={active} index={active} />
                </div>

                <div class="testimonial-controls">
                    <Button
                        variant={ButtonVariant::Outline}
                        size={ButtonSize::Icon}
                        aria_label="Previous testimonial"
                        onclick={on_previous}
                    >
                        <i class="fas fa-chevron-left"></i>
                    </Button>
                    <div class={classes!("testimonial-dots", paused.then_some("paused"))}>
                        { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                            let carousel = carousel.clone();
                            let onclick = Callback::from(move |_: MouseEvent| carousel.go_to(index));
                            html! {
                                <button
                                    key={index}
                                    type="button"
                                    class={classes!("dot", (index == active).then_some("active"))}
                                    aria-label={format!("Go to slide {}", index + 1)}
                                    title={truncate_text(testimonial.quote, DOT_TITLE_CHARS)}
                                    {onclick}
                                ></button>
                            }
                        })}
                    </div>
                    <Button
                        variant={ButtonVariant::Outline}
                        size={ButtonSize::Icon}
                        aria_label="Next testimonial"
                        onclick={on_next}
                    >
                        <i class="fas fa-chevron-right"></i>
                    </Button>
                </div>
            </div>
            <style>
                {r#"
    .testimonials {
        padding: 6rem 0;
    }
    .testimonial-stage {
        max-width: 56rem;
        margin: 0 auto;
        min-height: 20rem;
    }
    .testimonial-slide {
        display: flex;
        gap: 3rem;
        align-items: center;
        background: #fff;
        border: 1px solid #f3f4f6;
        border-radius: 1rem;
        padding: 3rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        animation: testimonial-in 0.5s ease;
    }
    @keyframes testimonial-in {
        from { opacity: 0; transform: translateX(40px); }
        to { opacity: 1; transform: translateX(0); }
    }
    .testimonial-person {
        position: relative;
        flex-shrink: 0;
    }
    .testimonial-photo {
        width: 10rem;
        height: 10rem;
        border-radius: 50%;
        object-fit: cover;
        border: 4px solid rgba(224, 42, 164, 0.2);
    }
    .testimonial-logo {
        position: absolute;
        right: -0.5rem;
        bottom: -0.5rem;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        object-fit: cover;
        border: 3px solid #fff;
        background: #fff;
    }
    .testimonial-stars {
        color: #facc15;
        margin-bottom: 1rem;
    }
    .testimonial-stars i {
        margin-right: 0.2rem;
    }
    .testimonial-body blockquote {
        font-size: 1.25rem;
        line-height: 1.6;
        color: #374151;
        margin: 0 0 1.5rem;
        font-style: italic;
    }
    .testimonial-author .name {
        font-weight: 700;
        margin: 0;
    }
    .testimonial-author .role {
        color: #6b7280;
        margin: 0.25rem 0 0;
    }
    .testimonial-controls {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        margin-top: 2rem;
    }
    .testimonial-dots {
        display: flex;
        gap: 0.5rem;
    }
    .dot {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 999px;
        border: none;
        padding: 0;
        background: #d1d5db;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .dot.active {
        width: 2rem;
        background: var(--brand);
    }
    .testimonial-dots.paused .dot.active {
        background: #9d1c72;
    }
    @media (max-width: 768px) {
        .testimonial-slide {
            flex-direction: column;
            text-align: center;
            padding: 2rem;
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
    fn test_filled_stars_follow_rating() {
        let stars: Vec<bool> = filled_stars(3).collect();
        assert_eq!(stars, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_filled_stars_clamp_to_five() {
        assert_eq!(filled_stars(9).filter(|filled| *filled).count(), 5);
        assert_eq!(filled_stars(0).filter(|filled| *filled).count(), 0);
    }
}
