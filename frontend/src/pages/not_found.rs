use yew::prelude::*;
use yew_router::components::Link;

use crate::components::ui::Logo;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <Logo />
            <h1>{"404"}</h1>
            <p>{"This page wandered off. The rest of Vibe Report is still here."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary btn-lg">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
    .not-found {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        text-align: center;
        padding: 2rem;
    }
    .not-found h1 {
        font-size: 5rem;
        margin: 0;
        color: var(--brand);
    }
    .not-found p {
        color: #6b7280;
    }
                "#}
            </style>
        </div>
    }
}
