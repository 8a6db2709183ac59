use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    featured_in::FeaturedIn,
    hero::Hero,
    marquee::{Marquee, Testimonials},
    portfolio::Portfolio,
    process::Process,
    services::Services,
};
use crate::pages::layout::use_page;
use crate::Route;

const PREVIEW_PROJECTS: usize = 3;

#[function_component(Home)]
pub fn home() -> Html {
    use_page("Software Engineering Agency");

    html! {
        <div class="page home-page">
            <Hero />
            <Marquee />

            <Services />
            <div class="section-more">
                <Link<Route> to={Route::Services} classes="btn btn-outline btn-lg">
                    {"Explore All Services"}
                </Link<Route>>
            </div>

            <Process />

            <Portfolio limit={Some(PREVIEW_PROJECTS)} />
            <div class="section-more alt">
                <Link<Route> to={Route::Portfolio} classes="btn btn-outline btn-lg">
                    {"View Full Case Studies"}
                </Link<Route>>
            </div>

            <Testimonials />
            <FeaturedIn />

            <section class="pre-footer-cta">
                <h2>{"Ready to transform your business?"}</h2>
                <Link<Route> to={Route::Contact} classes="btn btn-lg btn-light">
                    {"Get Started Today"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .section-more {
                    text-align: center;
                    padding: 0 1.5rem 6rem;
                }
                .section-more.alt {
                    background: var(--surface-alt);
                }
                .pre-footer-cta {
                    padding: 6rem 1.5rem;
                    background: var(--accent);
                    text-align: center;
                }
                .pre-footer-cta h2 {
                    color: #fff;
                    font-size: clamp(1.875rem, 5vw, 3rem);
                    font-weight: 700;
                    margin: 0 0 2rem;
                }
                .btn-light {
                    background: #fff;
                    color: var(--accent);
                }
                .btn-light:hover {
                    background: #eff6ff;
                }
                "#}
            </style>
        </div>
    }
}
