use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod data;
mod forms;
mod links;
mod storage;
mod theme;
mod animation {
    pub mod reveal;
    pub mod sequence;
}
mod portfolio {
    pub mod filter;
    pub mod playback;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod cookie_consent;
    pub mod fallback_image;
    pub mod featured_in;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod marquee;
    pub mod portfolio;
    pub mod process;
    pub mod services;
    pub mod video_player;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod layout;
    pub mod not_found;
    pub mod portfolio;
    pub mod services;
}

use components::{
    cookie_consent::CookieConsent,
    footer::Footer,
    header::Header,
};
use pages::{
    about::AboutPage,
    contact::ContactPage,
    home::Home,
    not_found::NotFound,
    portfolio::PortfolioPage,
    services::ServicesPage,
};
use storage::LocalStore;
use theme::Theme;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/portfolio")]
    Portfolio,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <PortfolioPage /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let theme = use_state(|| Theme::load(&LocalStore));

    use_effect_with_deps(move |theme: &Theme| {
        theme::apply_to_document(*theme);
        theme.save(&LocalStore);
        || ()
    }, *theme);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggled();
            info!("Switching to {} theme", next.as_str());
            theme.set(next);
        })
    };

    html! {
        <BrowserRouter>
            <div class="app-container">
                <Header theme={*theme} on_toggle_theme={on_toggle_theme.clone()} />
                <main class="content">
                    <Switch<Route> render={switch} />
                </main>
                <Footer theme={*theme} on_toggle_theme={on_toggle_theme} />
                <CookieConsent />
            </div>
            <style>
                {r#"
                :root {
                    --bg: #ffffff;
                    --surface: #ffffff;
                    --surface-alt: #f8fafc;
                    --surface-glass: rgba(255, 255, 255, 0.85);
                    --border: #e2e8f0;
                    --text-strong: #0f172a;
                    --text-muted: #475569;
                    --text-faint: #94a3b8;
                    --accent: #2563eb;
                    --accent-soft: rgba(37, 99, 235, 0.1);
                }
                html.dark {
                    --bg: #020617;
                    --surface: #0f172a;
                    --surface-alt: #020617;
                    --surface-glass: rgba(15, 23, 42, 0.85);
                    --border: #1e293b;
                    --text-strong: #f8fafc;
                    --text-muted: #94a3b8;
                    --text-faint: #64748b;
                    --accent: #3b82f6;
                    --accent-soft: rgba(59, 130, 246, 0.15);
                }
                body {
                    margin: 0;
                    background: var(--bg);
                    color: var(--text-muted);
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    transition: background 0.3s, color 0.3s;
                }
                .app-container {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                }
                .content {
                    flex: 1;
                }
                .page {
                    animation: fade-in 0.5s both;
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.625rem 1.25rem;
                    border-radius: 0.75rem;
                    border: 2px solid transparent;
                    font-weight: 600;
                    font-size: 0.95rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .btn:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .btn-primary {
                    background: var(--accent);
                    color: #fff;
                }
                .btn-primary:hover {
                    filter: brightness(1.1);
                    box-shadow: 0 10px 25px var(--accent-soft);
                }
                .btn-outline {
                    background: transparent;
                    border-color: var(--border);
                    color: var(--text-strong);
                }
                .btn-outline:hover {
                    border-color: var(--accent);
                    color: var(--accent);
                }
                .btn-sm {
                    padding: 0.375rem 0.875rem;
                    font-size: 0.8rem;
                }
                .btn-lg {
                    padding: 1rem 2rem;
                    font-size: 1.05rem;
                }
                .eyebrow {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: var(--accent);
                    margin: 0 0 0.75rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    color: var(--text-strong);
                    font-size: clamp(1.875rem, 4vw, 2.5rem);
                    margin: 0;
                }
                .reveal {
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .reveal.hidden {
                    opacity: 0;
                    transform: translateY(2rem);
                }
                .reveal.shown {
                    opacity: 1;
                    transform: none;
                }
                .marquee {
                    overflow: hidden;
                    padding: 2rem 0;
                    border-top: 1px solid var(--border);
                    border-bottom: 1px solid var(--border);
                }
                .marquee-track {
                    display: flex;
                    width: max-content;
                    animation: marquee 30s linear infinite;
                }
                .marquee-track.slow {
                    animation-duration: 60s;
                }
                .marquee:hover .marquee-track {
                    animation-play-state: paused;
                }
                .marquee-item {
                    padding: 0 2.5rem;
                    font-weight: 700;
                    font-size: 1.25rem;
                    color: var(--text-faint);
                    white-space: nowrap;
                }
                .spinner {
                    display: inline-block;
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid rgba(255, 255, 255, 0.4);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                @keyframes fade-in {
                    from { opacity: 0; transform: translateY(0.5rem); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .marquee-track, .page, .reveal {
                        animation: none;
                        transition: none;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting {}", config::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}
