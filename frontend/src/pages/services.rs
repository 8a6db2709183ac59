use yew::prelude::*;

use crate::components::{fallback_image::FallbackImage, process::Process, services::Services};
use crate::data::PARTNER_BENEFITS;
use crate::pages::layout::{use_page, PageBanner};

const TEAM_IMAGE: &str = "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&q=80&w=1000";

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    use_page("Services");

    html! {
        <div class="page">
            <PageBanner
                title="Our Services"
                subtitle="We offer end-to-end software development services, from initial concept to deployment and beyond."
            />

            <Services />

            <section class="partner">
                <div class="partner-grid">
                    <div>
                        <h2>{"Why Partner with OITS Dhaka?"}</h2>
                        <div class="benefit-list">
                            { for PARTNER_BENEFITS.iter().enumerate().map(|(i, benefit)| html! {
                                <div key={*benefit} class="benefit">
                                    <span class="benefit-number">{i + 1}</span>
                                    <span>{*benefit}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="partner-image">
                        <FallbackImage src={TEAM_IMAGE} alt="Team working together" lazy={true} />
                    </div>
                </div>
            </section>

            <Process />

            <style>
                {r#"
                .partner {
                    padding: 6rem 1.5rem;
                    background: var(--surface);
                    border-top: 1px solid var(--border);
                }
                .partner-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .partner h2 {
                    color: var(--text-strong);
                    margin: 0 0 1.5rem;
                }
                .benefit-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .benefit {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    background: var(--surface-alt);
                    border: 1px solid var(--border);
                    border-radius: 0.75rem;
                    font-weight: 600;
                    color: var(--text-strong);
                }
                .benefit-number {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .partner-image {
                    aspect-ratio: 16 / 9;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .partner-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                @media (max-width: 768px) {
                    .partner-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
