use chrono::{Datelike, Local};
use log::info;
use yew::prelude::*;

use crate::components::ui::{Button, ButtonSize, Input, Logo};

const COMPANY_LINKS: [&str; 4] = ["About Us", "Careers", "Blog", "Press"];
const PRODUCT_LINKS: [&str; 5] = ["Features", "Integrations", "Pricing", "FAQ", "Support"];
const SOCIAL: [(&str, &str, &str); 4] = [
    ("https://facebook.com", "Facebook", "fab fa-facebook-f"),
    ("https://twitter.com", "Twitter", "fab fa-twitter"),
    ("https://linkedin.com", "LinkedIn", "fab fa-linkedin-in"),
    ("https://instagram.com", "Instagram", "fab fa-instagram"),
];

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_state(|| Local::now().year());
    let email = use_state(String::new);
    let notice = use_state(|| None::<&'static str>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let subscribe = {
        let email = email.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            if looks_like_email(&email) {
                info!("newsletter signup requested");
                notice.set(Some("Thanks! You're on the list."));
                email.set(String::new());
            } else {
                notice.set(Some("Please enter a valid email address."));
            }
        })
    };

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-about">
                        <Logo />
                        <p>{"Effortlessly gather periodic feedback from your employees, track engagement, and take action to improve the workplace experience."}</p>
                        <div class="social-links">
                            { for SOCIAL.iter().map(|(href, label, icon)| html! {
                                <a key={*label} href={*href} target="_blank" rel="noreferrer" aria-label={*label} class="social-link">
                                    <i class={*icon}></i>
                                </a>
                            })}
                        </div>
                    </div>
                    <div>
                        <h4>{"Company"}</h4>
                        <ul class="footer-links">
                            { for COMPANY_LINKS.iter().map(|item| html! { <li key={*item}><a href="#">{*item}</a></li> }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Product"}</h4>
                        <ul class="footer-links">
                            { for PRODUCT_LINKS.iter().map(|item| html! { <li key={*item}><a href="#">{*item}</a></li> }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Stay Updated"}</h4>
                        <p>{"Subscribe to our newsletter to get the latest updates."}</p>
                        <div class="newsletter">
                            <Input
                                input_type="email"
                                placeholder="Your email address"
                                aria_label="Email address"
                                value={(*email).clone()}
                                oninput={on_email}
                            />
                            <Button size={ButtonSize::Sm} onclick={subscribe}>{"Subscribe"}</Button>
                        </div>
                        if let Some(text) = *notice {
                            <p class="newsletter-notice">{text}</p>
                        }
                    </div>
                </div>

                <div class="footer-contact">
                    <div><i class="fas fa-envelope"></i><span>{"hello@vibereport.com"}</span></div>
                    <div><i class="fas fa-phone"></i><span>{"+1 (555) 123-4567"}</span></div>
                    <div><i class="fas fa-location-dot"></i><span>{"123 Feedback Lane, San Francisco, CA"}</span></div>
                </div>

                <div class="footer-bottom">
                    <div>{format!("© {} Vibe Report. All rights reserved.", *year)}</div>
                    <div class="legal-links">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#">{"Cookies"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
    .site-footer {
        background: #f9fafb;
        padding: 4rem 0 2rem;
        border-top: 1px solid #e5e7eb;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr 2fr;
        gap: 2.5rem;
    }
    .site-footer h4 {
        font-weight: 600;
        margin-bottom: 1rem;
    }
    .site-footer p {
        color: #4b5563;
    }
    .footer-links {
        list-style: none;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .footer-links a, .legal-links a {
        color: #4b5563;
        text-decoration: none;
    }
    .footer-links a:hover, .legal-links a:hover {
        color: var(--brand);
    }
    .social-links {
        display: flex;
        gap: 0.75rem;
        margin-top: 1rem;
    }
    .social-link {
        color: #6b7280;
        transition: transform 0.2s ease, color 0.2s ease;
    }
    .social-link:hover {
        color: var(--brand);
        transform: translateY(-3px);
    }
    .newsletter {
        display: flex;
        gap: 0.5rem;
    }
    .newsletter-notice {
        font-size: 0.875rem;
        margin-top: 0.5rem;
    }
    .footer-contact {
        margin-top: 3rem;
        padding-top: 2rem;
        border-top: 1px solid #e5e7eb;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
        color: #4b5563;
    }
    .footer-contact i {
        color: var(--brand);
        margin-right: 0.5rem;
    }
    .footer-bottom {
        margin-top: 3rem;
        padding-top: 2rem;
        border-top: 1px solid #e5e7eb;
        display: flex;
        justify-content: space-between;
        font-size: 0.875rem;
        color: #6b7280;
    }
    .legal-links {
        display: flex;
        gap: 2rem;
    }
    @media (max-width: 768px) {
        .footer-grid, .footer-contact {
            grid-template-columns: 1fr;
        }
        .footer-bottom {
            flex-direction: column;
            gap: 1rem;
        }
    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("pat@example.com"));
        assert!(looks_like_email("  pat@example.co.uk "));
        assert!(!looks_like_email("pat"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("pat@localhost"));
        assert!(!looks_like_email("pat@example."));
    }
}
