use yew::prelude::*;

/// Brand mark; the roundel spins once while hovered.
#[function_component(Logo)]
pub fn logo() -> Html {
    let hovered = use_state(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <a href="#hero" class="logo" {onmouseenter} {onmouseleave}>
            <span class={classes!("logo-mark", (*hovered).then_some("spinning"))}>
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path
                        d="M21.6 12C21.6 17.302 17.302 21.6 12 21.6C6.69807 21.6 2.4 17.302 2.4 12C2.4 6.69807 6.69807 2.4 12 2.4C17.302 2.4 21.6 6.69807 21.6 12Z"
                        stroke="white"
                        stroke-width="2"
                    />
                    <path d="M12 8V16" stroke="white" stroke-width="2" stroke-linecap="round" />
                    <path d="M16 12L8 12" stroke="white" stroke-width="2" stroke-linecap="round" />
                </svg>
            </span>
            <span class="logo-text">{"Vibe Report"}</span>
        </a>
    }
}
