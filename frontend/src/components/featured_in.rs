use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal};
use crate::config;
use crate::data::PUBLICATIONS;
use crate::Route;

#[function_component(FeaturedIn)]
pub fn featured_in() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config::REVEAL_THRESHOLD_LATE);

    html! {
        <section ref={section_ref} class="featured-section">
            <p class="eyebrow">{"Recognized by Global Tech Media"}</p>
            <div class="publications">
                { for PUBLICATIONS.iter().enumerate().map(|(i, (name, aria))| html! {
                    <div
                        key={*name}
                        role="img"
                        aria-label={*aria}
                        class={classes!("publication", "reveal", reveal_class(visible, "shown", "hidden"))}
                        style={stagger_style(0, 100, i)}
                    >
                        {*name}
                    </div>
                }) }
            </div>
            <Link<Route> to={Route::Portfolio} classes="btn btn-outline btn-lg">
                {"View Our Work →"}
            </Link<Route>>
            <style>
                {r#"
                .featured-section {
                    padding: 8rem 1.5rem;
                    text-align: center;
                    background: var(--surface);
                    border-top: 1px solid var(--border);
                }
                .publications {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 4rem 6rem;
                    margin: 4rem auto 5rem;
                    max-width: 900px;
                }
                .publication {
                    font-size: 2.25rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    color: var(--text-faint);
                }
                .publication:hover {
                    color: var(--accent);
                    transform: scale(1.1) rotate(1deg);
                }
                "#}
            </style>
        </section>
    }
}
