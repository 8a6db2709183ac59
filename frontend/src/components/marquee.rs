use yew::prelude::*;

use crate::data::{MARQUEE_TECH, TESTIMONIALS};

/// Tech stack ticker under the hero.
#[function_component(Marquee)]
pub fn marquee() -> Html {
    // Rendered twice so the loop has no visible seam.
    let items = MARQUEE_TECH.iter().chain(MARQUEE_TECH.iter());

    html! {
        <div class="marquee" aria-hidden="true">
            <div class="marquee-track">
                { for items.enumerate().map(|(i, tech)| html! {
                    <span key={i} class="marquee-item">{*tech}</span>
                }) }
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let cards = TESTIMONIALS.iter().chain(TESTIMONIALS.iter());

    html! {
        <section class="testimonials-section">
            <div class="section-heading">
                <p class="eyebrow">{"Client Voices"}</p>
                <h2>{"What our partners say"}</h2>
            </div>
            <div class="marquee testimonials-marquee">
                <div class="marquee-track slow">
                    { for cards.enumerate().map(|(i, t)| html! {
                        <figure key={i} class="testimonial-card" aria-hidden={(i >= TESTIMONIALS.len()).to_string()}>
                            <blockquote>{format!("“{}”", t.quote)}</blockquote>
                            <figcaption>
                                <strong>{t.author}</strong>
                                <span>{t.role}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .testimonials-section {
                    padding: 6rem 0;
                    overflow: hidden;
                }
                .testimonial-card {
                    flex: 0 0 22rem;
                    margin: 0 1rem;
                    padding: 2rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 1.5rem;
                }
                .testimonial-card blockquote {
                    margin: 0 0 1.5rem;
                    font-size: 1.05rem;
                    color: var(--text-strong);
                    line-height: 1.6;
                }
                .testimonial-card figcaption {
                    display: flex;
                    flex-direction: column;
                    font-size: 0.85rem;
                    color: var(--text-muted);
                }
                .testimonials-marquee:hover .marquee-track {
                    animation-play-state: paused;
                }
                "#}
            </style>
        </section>
    }
}
