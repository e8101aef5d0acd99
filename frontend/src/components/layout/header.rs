use yew::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Logo};
use crate::config;
use crate::content::NAV_LINKS;
use crate::utils::dom::{self, EventListener};

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::header_scroll_threshold()
}

/// The mobile menu only makes sense below the desktop breakpoint.
fn menu_should_close(width: f64, menu_open: bool) -> bool {
    menu_open && width >= config::mobile_breakpoint()
}

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_state_eq(|| is_scrolled(dom::scroll_y()));
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::on_window("scroll", move |_| {
                    scrolled.set(is_scrolled(dom::scroll_y()));
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        let is_open = *menu_open;
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                let listener = EventListener::on_window("resize", move |_| {
                    let width = dom::inner_width().unwrap_or(0.0);
                    if menu_should_close(width, open) {
                        menu_open.set(false);
                    }
                });
                dom::set_body_scroll_lock(open);
                move || {
                    drop(listener);
                    dom::set_body_scroll_lock(false);
                }
            },
            is_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
                <div class="container header-inner">
                    <Logo />
                    <nav class="desktop-nav">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.href} href={link.href} class="nav-link">{link.title}</a>
                        })}
                    </nav>
                    <div class="header-actions">
                        <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm}>{"Log In"}</Button>
                        <Button size={ButtonSize::Sm}>{"Start Free Trial"}</Button>
                    </div>
                    <button
                        class="menu-toggle"
                        onclick={toggle_menu}
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    >
                        <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                </div>
            </header>
            if *menu_open {
                <div class="mobile-menu">
                    <nav class="mobile-nav">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a key={link.href} href={link.href} class="mobile-nav-link" onclick={close_menu.clone()}>
                                {link.title}
                            </a>
                        })}
                        <div class="mobile-actions">
                            <Button variant={ButtonVariant::Outline} size={ButtonSize::Lg} class="full-width">{"Log In"}</Button>
                            <Button size={ButtonSize::Lg} class="full-width">{"Start Free Trial"}</Button>
                        </div>
                    </nav>
                </div>
            }
            <style>{HEADER_CSS}</style>
        </>
    }
}

const HEADER_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        padding: 1.25rem 0;
        transition: all 0.3s ease;
        background: transparent;
    }
    .site-header.scrolled {
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(12px);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        padding: 0.75rem 0;
    }
    .header-inner {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .desktop-nav, .header-actions {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .nav-link {
        position: relative;
        padding: 0.5rem 0.75rem;
        font-weight: 500;
        color: inherit;
        text-decoration: none;
        transition: color 0.2s ease;
    }
    .nav-link::after {
        content: "";
        position: absolute;
        left: 0;
        bottom: 0;
        height: 2px;
        width: 0;
        background: var(--brand);
        transition: width 0.2s ease;
    }
    .nav-link:hover {
        color: var(--brand);
    }
    .nav-link:hover::after {
        width: 100%;
    }
    .menu-toggle {
        display: none;
        background: none;
        border: none;
        font-size: 1.5rem;
        padding: 0.5rem;
        cursor: pointer;
    }
    .mobile-menu {
        position: fixed;
        inset: 0;
        z-index: 40;
        background: #fff;
        padding: 5rem 1rem 0;
        animation: drop-in 0.2s ease;
    }
    .mobile-nav {
        display: flex;
        flex-direction: column;
        padding: 2rem 0;
    }
    .mobile-nav-link {
        font-size: 1.125rem;
        font-weight: 500;
        padding: 0.75rem 0;
        border-bottom: 1px solid #f3f4f6;
        color: inherit;
        text-decoration: none;
    }
    .mobile-actions {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding-top: 1.5rem;
    }
    @keyframes drop-in {
        from { opacity: 0; transform: translateY(-20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (max-width: 767px) {
        .desktop-nav, .header-actions {
            display: none;
        }
        .menu-toggle {
            display: block;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn test_menu_closes_only_on_desktop_width() {
        assert!(menu_should_close(1024.0, true));
        assert!(menu_should_close(768.0, true));
        assert!(!menu_should_close(500.0, true));
        assert!(!menu_should_close(1024.0, false));
    }
}
