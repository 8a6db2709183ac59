use yew::prelude::*;

use crate::components::contact::Contact;
use crate::config::ADDRESS;
use crate::data::INQUIRY_STEPS;
use crate::links::map_embed_url;
use crate::pages::layout::{use_page, PageBanner};

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_page("Contact");

    html! {
        <div class="page">
            <PageBanner
                title="Let's Talk"
                subtitle="Have a project in mind or just want to chat about possibilities? We're here."
            />

            <div class="contact-wrap">
                <Contact />
            </div>

            <section class="inquiry">
                <h2>{"Our Process for Inquiries"}</h2>
                <div class="inquiry-steps">
                    { for INQUIRY_STEPS.iter().map(|(step, text)| html! {
                        <div key={*step} class="inquiry-step">
                            <span class="inquiry-label">{*step}</span>
                            <span>{*text}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="map-embed">
                <iframe
                    title="Office location"
                    src={map_embed_url(ADDRESS)}
                    loading="lazy"
                    referrerpolicy="no-referrer-when-downgrade"
                ></iframe>
            </section>

            <style>
                {r#"
                .contact-wrap {
                    background: #020617;
                }
                .inquiry {
                    padding: 6rem 1.5rem;
                    background: var(--surface);
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .inquiry h2 {
                    text-align: center;
                    color: var(--text-strong);
                    margin: 0 0 1.5rem;
                }
                .inquiry-steps {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .inquiry-step {
                    display: flex;
                    gap: 1rem;
                    color: var(--text-muted);
                }
                .inquiry-label {
                    font-weight: 700;
                    color: var(--accent);
                    white-space: nowrap;
                }
                .map-embed iframe {
                    display: block;
                    width: 100%;
                    height: 400px;
                    border: 0;
                    filter: grayscale(0.3);
                }
                "#}
            </style>
        </div>
    }
}
