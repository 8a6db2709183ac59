use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::COMPANY_NAME;

/// Sets the document title and starts the page at the top.
#[hook]
pub fn use_page(title: &'static str) {
    use_title(format!("{} | {}", title, COMPANY_NAME));
    use_effect_with_deps(|_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    }, ());
}

#[derive(Clone, Copy, PartialEq)]
pub enum BannerTone {
    Dark,
    Accent,
}

#[derive(Properties, PartialEq)]
pub struct PageBannerProps {
    pub title: &'static str,
    pub subtitle: &'static str,
    #[prop_or(BannerTone::Dark)]
    pub tone: BannerTone,
}

#[function_component(PageBanner)]
pub fn page_banner(props: &PageBannerProps) -> Html {
    let tone = match props.tone {
        BannerTone::Dark => "dark",
        BannerTone::Accent => "accent",
    };
    html! {
        <div class={classes!("page-banner", tone)}>
            <h1>{props.title}</h1>
            <p>{props.subtitle}</p>
            <style>
                {r#"
                .page-banner {
                    padding: 11rem 1.5rem 6rem;
                    text-align: center;
                    color: #fff;
                }
                .page-banner.dark {
                    background: #0f172a;
                }
                .page-banner.accent {
                    background: var(--accent);
                }
                .page-banner h1 {
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    font-weight: 800;
                    margin: 0 0 1.5rem;
                }
                .page-banner p {
                    max-width: 42rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    opacity: 0.75;
                }
                "#}
            </style>
        </div>
    }
}
