use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config::{self, COMPANY_NAME};

const STATS: &[(&str, &str)] = &[
    ("120+", "Projects delivered"),
    ("45", "Engineers"),
    ("12", "Countries served"),
    ("98%", "Client retention"),
];

#[function_component(About)]
pub fn about() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config::REVEAL_THRESHOLD);
    let state = reveal_class(visible, "shown", "hidden");

    html! {
        <section ref={section_ref} class="about-section">
            <div class={classes!("about-copy", "reveal", state)}>
                <p class="eyebrow">{"Who We Are"}</p>
                <h2>{format!("{} is an engineering studio from Dhaka.", COMPANY_NAME)}</h2>
                <p>{"Since 2014 we have helped startups and enterprises turn ambitious ideas into reliable software. Our teams pair senior engineers with designers and product thinkers, so every release is built to last."}</p>
            </div>
            <dl class={classes!("about-stats", "reveal", state)}>
                { for STATS.iter().map(|(value, label)| html! {
                    <div key={*label} class="stat">
                        <dt>{*value}</dt>
                        <dd>{*label}</dd>
                    </div>
                }) }
            </dl>
            <style>
                {r#"
                .about-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-copy h2 {
                    font-size: 2.5rem;
                    color: var(--text-strong);
                }
                .about-copy p {
                    color: var(--text-muted);
                    line-height: 1.7;
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    margin: 0;
                }
                .stat dt {
                    font-size: 2.5rem;
                    font-weight: 900;
                    color: var(--accent);
                }
                .stat dd {
                    margin: 0;
                    color: var(--text-muted);
                }
                @media (max-width: 768px) {
                    .about-section {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
