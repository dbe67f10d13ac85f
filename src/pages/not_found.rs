use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        text-align: center;
                        padding: 2rem;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        color: var(--accent);
                    }
                    .not-found .back-home {
                        margin-top: 1rem;
                        color: var(--accent);
                        font-weight: 600;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page slipped out of the training set."}</p>
            <Link<Route> to={Route::Home} classes="back-home">
                {"Back to the front page"}
            </Link<Route>>
        </div>
    }
}
