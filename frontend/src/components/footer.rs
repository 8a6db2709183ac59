use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::route_for;
use crate::config::{ADDRESS, COMPANY_NAME};
use crate::data::{NAV_ITEMS, SERVICES};
use crate::links::map_link;
use crate::theme::Theme;
use crate::Route;

// (label, glyph)
const SOCIALS: &[(&str, &str)] = &[
    ("GitHub", "GH"),
    ("LinkedIn", "in"),
    ("Twitter", "X"),
    ("Facebook", "f"),
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    // Newsletter signup has no backend yet.
    let on_subscribe = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <span class="logo-mark" aria-hidden="true">{">_"}</span>
                        {COMPANY_NAME}
                    </Link<Route>>
                    <p>{"We architect resilient digital systems that power the world's most innovative brands. From concept to scale, we are your strategic engineering partner."}</p>
                    <a href={map_link(ADDRESS)} target="_blank" rel="noopener noreferrer" class="footer-address" aria-label="View our office location on Google Maps">
                        {"📍 "}{ADDRESS}
                    </a>
                    <div class="footer-socials">
                        { for SOCIALS.iter().map(|(label, glyph)| html! {
                            <a href="#" class="social-link" aria-label={*label}>
                                <span class="social-glyph">{*glyph}</span>
                                <span class="social-tooltip">{*label}</span>
                            </a>
                        }) }
                    </div>
                    <button class="footer-theme-toggle" onclick={toggle_theme} aria-label={format!("Switch to {} mode", props.theme.toggled().as_str())}>
                        { if props.theme == Theme::Dark { "☀️ " } else { "🌙 " } }
                        {props.theme.toggle_label()}
                    </button>
                </div>

                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.label}>
                                <Link<Route> to={route_for(item.href)} classes="footer-link">{item.label}</Link<Route>>
                            </li>
                        }) }
                        <li>
                            <Link<Route> to={Route::About} classes="footer-link">
                                {"Careers "}<span class="hiring-badge">{"Hiring"}</span>
                            </Link<Route>>
                        </li>
                    </ul>
                </div>

                <div>
                    <h4>{"Engineering"}</h4>
                    <ul>
                        { for SERVICES.iter().map(|service| html! {
                            <li key={service.id}>
                                <a href={format!("/services#{}", service.id)} class="footer-link">{service.title}</a>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Stay Informed"}</h4>
                    <p>{"Join our engineering collective for bi-weekly deep dives into modern tech stacks."}</p>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input id="newsletter-email" type="email" placeholder="Work email address" />
                        <button type="submit">{"Subscribe to Insights"}</button>
                    </form>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. Digital Engineering Excellence.", year, COMPANY_NAME)}</p>
                <div class="legal-links">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Legal Compliance"}</a>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #020617;
                    color: #cbd5e1;
                    padding: 6rem 1.5rem 3rem;
                    border-top: 1px solid #0f172a;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto 6rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 4rem;
                }
                .footer-grid h4 {
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    margin-bottom: 2.5rem;
                }
                .footer-grid ul {
                    list-style: none;
                    padding: 0;
                }
                .footer-grid p {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 900;
                    text-decoration: none;
                }
                .footer-address {
                    display: block;
                    margin: 1rem 0;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #64748b;
                    text-decoration: none;
                }
                .footer-address:hover,
                .footer-link:hover {
                    color: #60a5fa;
                }
                .footer-link {
                    display: inline-block;
                    padding: 0.375rem 0;
                    color: #94a3b8;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: transform 0.3s, color 0.3s;
                }
                .footer-link:hover {
                    transform: translateX(4px);
                }
                .hiring-badge {
                    font-size: 0.55rem;
                    background: rgba(37, 99, 235, 0.2);
                    color: #60a5fa;
                    padding: 0.15rem 0.6rem;
                    border-radius: 999px;
                    text-transform: uppercase;
                    animation: pulse 2s infinite;
                }
                .footer-socials {
                    display: flex;
                    gap: 0.5rem;
                }
                .social-link {
                    position: relative;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    color: #94a3b8;
                    text-decoration: none;
                    font-weight: 900;
                }
                .social-tooltip {
                    position: absolute;
                    bottom: 100%;
                    left: 50%;
                    transform: translateX(-50%) scale(0.75);
                    background: #2563eb;
                    color: #fff;
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    padding: 0.3rem 0.7rem;
                    border-radius: 0.5rem;
                    opacity: 0;
                    pointer-events: none;
                    transition: all 0.3s;
                    white-space: nowrap;
                }
                .social-link:hover .social-tooltip,
                .social-link:focus .social-tooltip {
                    opacity: 1;
                    transform: translateX(-50%) scale(1);
                }
                .footer-theme-toggle {
                    margin-top: 1.5rem;
                    background: #0f172a;
                    color: #cbd5e1;
                    border: 1px solid #1e293b;
                    border-radius: 1rem;
                    padding: 0.9rem 1.5rem;
                    font-size: 0.65rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                }
                .newsletter-form input {
                    width: 100%;
                    background: #0f172a;
                    border: 1px solid #1e293b;
                    border-radius: 1rem;
                    padding: 1.1rem 1.5rem;
                    color: #fff;
                    margin-bottom: 1rem;
                    transition: all 0.5s;
                }
                .newsletter-form input:focus {
                    outline: none;
                    border-color: #2563eb;
                    padding-left: 2rem;
                }
                .newsletter-form button {
                    width: 100%;
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 1rem;
                    padding: 1.1rem;
                    font-size: 0.7rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(15, 23, 42, 0.5);
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.65rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: #64748b;
                }
                .legal-links {
                    display: flex;
                    gap: 3rem;
                }
                .legal-links a {
                    color: inherit;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        gap: 2rem;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
