use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::layout::use_page;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page("Page Not Found");

    html! {
        <div class="page not-found">
            <p class="eyebrow">{"404"}</p>
            <h1>{"This page wandered off."}</h1>
            <p>{"The page you are looking for does not exist or has moved."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary btn-lg">{"Back to Home"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    padding: 10rem 1.5rem 6rem;
                    text-align: center;
                }
                .not-found h1 {
                    color: var(--text-strong);
                    font-size: clamp(2rem, 5vw, 3rem);
                }
                .not-found p {
                    color: var(--text-muted);
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
