use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal};
use crate::config;
use crate::data::PROCESS_STEPS;

#[function_component(Process)]
pub fn process() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config::REVEAL_THRESHOLD_LATE);

    html! {
        <section ref={section_ref} class="process-section">
            <div class="section-heading">
                <p class="eyebrow">{"How We Work"}</p>
                <h2>{"A process without surprises"}</h2>
            </div>
            <ol class="process-steps">
                { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                    <li
                        key={step.number}
                        class={classes!("process-step", "reveal", reveal_class(visible, "shown", "hidden"))}
                        style={stagger_style(0, 150, i)}
                    >
                        <span class="step-number">{step.number}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </li>
                }) }
            </ol>
            <style>
                {r#"
                .process-section {
                    padding: 6rem 1.5rem;
                    background: var(--surface-alt);
                }
                .process-steps {
                    list-style: none;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .step-number {
                    font-size: 3rem;
                    font-weight: 900;
                    color: var(--accent);
                    opacity: 0.3;
                }
                .process-step h3 {
                    color: var(--text-strong);
                }
                .process-step p {
                    color: var(--text-muted);
                }
                @media (max-width: 768px) {
                    .process-steps {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
