use yew::prelude::*;

use crate::components::about::About;
use crate::data::{CULTURE_VALUES, TRUSTED_BY};
use crate::pages::layout::{use_page, PageBanner};

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_page("About");

    html! {
        <div class="page">
            <PageBanner
                title="Our Story"
                subtitle="A collective of passionate engineers and creative problem solvers based in Dhaka."
            />

            <section class="logo-wall">
                <p class="eyebrow">{"Trusted By Global Leaders"}</p>
                <div class="logo-grid">
                    { for TRUSTED_BY.iter().map(|(name, _)| html! {
                        <span key={*name} class="logo-name">{*name}</span>
                    }) }
                </div>
            </section>

            <About />

            <section class="culture">
                <h2>{"Driven by our culture of excellence."}</h2>
                <div class="culture-grid">
                    { for CULTURE_VALUES.iter().map(|(title, description)| html! {
                        <div key={*title} class="culture-card">
                            <h4>{*title}</h4>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .logo-wall {
                    padding: 4rem 1.5rem;
                    text-align: center;
                    background: var(--surface);
                    border-bottom: 1px solid var(--border);
                }
                .logo-grid {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 3rem;
                    margin-top: 2.5rem;
                    opacity: 0.5;
                    filter: grayscale(1);
                    transition: all 0.7s;
                }
                .logo-grid:hover {
                    opacity: 1;
                    filter: none;
                }
                .logo-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: var(--text-faint);
                }
                .culture {
                    padding: 6rem 1.5rem;
                    background: var(--surface-alt);
                    text-align: center;
                }
                .culture h2 {
                    color: var(--text-strong);
                    margin: 0 0 3rem;
                }
                .culture-grid {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .culture-card {
                    padding: 2rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 1.5rem;
                }
                .culture-card h4 {
                    color: var(--text-strong);
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }
                .culture-card p {
                    color: var(--text-muted);
                    font-size: 0.875rem;
                }
                @media (max-width: 768px) {
                    .culture-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
