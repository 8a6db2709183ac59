use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal};
use crate::config;
use crate::data::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config::REVEAL_THRESHOLD);

    html! {
        <section ref={section_ref} id="services" class="services-section">
            <div class="section-heading">
                <p class="eyebrow">{"What We Do"}</p>
                <h2>{"Services built for scale"}</h2>
            </div>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <div
                        key={service.id}
                        id={service.id}
                        class={classes!("service-card", "reveal", reveal_class(visible, "shown", "hidden"))}
                        style={stagger_style(0, 100, i)}
                    >
                        <div class="service-icon" aria-hidden="true">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .services-section {
                    padding: 6rem 1.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 1.5rem;
                    padding: 2rem;
                    transition: box-shadow 0.3s, transform 0.3s;
                }
                .service-card:hover {
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                    transform: translateY(-4px);
                }
                .service-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .service-card h3 {
                    color: var(--text-strong);
                    margin: 0 0 0.5rem;
                }
                .service-card p {
                    color: var(--text-muted);
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
