use yew::prelude::*;

use crate::components::portfolio::Portfolio;
use crate::pages::layout::{use_page, BannerTone, PageBanner};

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    use_page("Case Studies");

    html! {
        <div class="page">
            <PageBanner
                title="Case Studies"
                subtitle="Explore our diverse portfolio of high-impact digital solutions."
                tone={BannerTone::Accent}
            />
            <Portfolio />
        </div>
    }
}
