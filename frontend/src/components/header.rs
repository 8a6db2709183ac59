use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{self, COMPANY_NAME};
use crate::data::NAV_ITEMS;
use crate::theme::Theme;
use crate::Route;

/// Exact path match, ignoring a trailing slash.
pub fn is_active(current_path: &str, href: &str) -> bool {
    let trim = |p: &str| -> String {
        let t = p.trim_end_matches('/');
        if t.is_empty() { "/".to_string() } else { t.to_string() }
    };
    trim(current_path) == trim(href)
}

pub fn route_for(href: &str) -> Route {
    Route::recognize(href).unwrap_or(Route::Home)
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current_path = use_location()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let offset = window
                        .as_ref()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(offset > config::SCROLL_THRESHOLD_PX);
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let theme_icon = if *theme == Theme::Dark { "☀️" } else { "🌙" };
    let theme_aria = format!("Switch to {} mode", theme.toggled().as_str());

    let nav_links = |class: &'static str| -> Html {
        NAV_ITEMS.iter().map(|item| {
            let active = is_active(&current_path, item.href);
            html! {
                <div key={item.label} onclick={close_menu.clone()}>
                    <Link<Route> to={route_for(item.href)} classes={classes!(class, active.then(|| "active"))}>
                        <span aria-label={item.aria}>{item.label}</span>
                    </Link<Route>>
                </div>
            }
        }).collect::<Html>()
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <span class="logo-mark" aria-hidden="true">{">_"}</span>
                    <span class="logo-text">{COMPANY_NAME}</span>
                </Link<Route>>

                <nav class="header-nav" aria-label="Main Navigation">
                    { nav_links("nav-link") }
                    <div class="header-actions">
                        <button class="theme-toggle" onclick={toggle_theme.clone()} aria-label={theme_aria.clone()}>
                            {theme_icon}
                        </button>
                        <Link<Route> to={Route::Contact} classes="header-cta">
                            {"Let's Build"}
                        </Link<Route>>
                    </div>
                </nav>

                <div class="mobile-controls">
                    <button class="theme-toggle" onclick={toggle_theme} aria-label={theme_aria}>
                        {theme_icon}
                    </button>
                    <button class="burger-menu" onclick={toggle_menu} aria-expanded={(*menu_open).to_string()}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            if *menu_open {
                <nav class="mobile-menu" aria-label="Mobile Navigation">
                    { nav_links("mobile-link") }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="header-cta mobile-cta">
                            {"Start a Project"}
                        </Link<Route>>
                    </div>
                </nav>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 2rem 0;
                    background: transparent;
                    transition: all 0.5s ease-in-out;
                }
                .site-header.scrolled {
                    padding: 0.75rem 0;
                    background: var(--surface-glass);
                    backdrop-filter: blur(20px);
                    border-bottom: 1px solid var(--border);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                    color: var(--text-strong);
                    font-weight: 900;
                    font-size: 1.5rem;
                    letter-spacing: -0.05em;
                    transition: font-size 0.3s;
                }
                .site-header.scrolled .header-logo {
                    font-size: 1.1rem;
                }
                .logo-mark {
                    background: var(--accent);
                    color: #fff;
                    border-radius: 12px;
                    padding: 0.4rem 0.6rem;
                    font-family: monospace;
                    font-size: 0.9rem;
                }
                .header-nav {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                }
                .nav-link {
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: var(--text-muted);
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .nav-link:hover {
                    color: var(--accent);
                    background: var(--surface-alt);
                }
                .nav-link.active {
                    color: var(--accent);
                    background: var(--accent-soft);
                }
                .header-actions {
                    margin-left: 1rem;
                    padding-left: 1rem;
                    border-left: 1px solid var(--border);
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .theme-toggle {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1.1rem;
                    padding: 0.5rem;
                    border-radius: 999px;
                }
                .header-cta {
                    background: var(--accent);
                    color: #fff;
                    padding: 0.6rem 2rem;
                    border-radius: 999px;
                    font-weight: 900;
                    text-decoration: none;
                    font-size: 0.875rem;
                }
                .mobile-controls {
                    display: none;
                    align-items: center;
                    gap: 0.75rem;
                }
                .burger-menu {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: var(--text-strong);
                    cursor: pointer;
                }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 1.5rem;
                    background: var(--surface);
                    border-bottom: 1px solid var(--border);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15);
                }
                .mobile-link {
                    display: block;
                    padding: 1rem;
                    border-radius: 1rem;
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: var(--text-strong);
                    text-decoration: none;
                }
                .mobile-link.active {
                    color: var(--accent);
                    background: var(--accent-soft);
                }
                .mobile-cta {
                    display: block;
                    text-align: center;
                    margin-top: 1rem;
                    padding: 1.25rem;
                }
                @media (max-width: 768px) {
                    .header-nav {
                        display: none;
                    }
                    .mobile-controls {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_matching() {
        assert!(is_active("/", "/"));
        assert!(is_active("/portfolio", "/portfolio"));
        assert!(is_active("/portfolio/", "/portfolio"));
        assert!(!is_active("/portfolio", "/"));
        assert!(!is_active("/", "/services"));
        assert!(!is_active("/services/web", "/services"));
    }

    #[test]
    fn test_nav_items_resolve_to_routes() {
        assert!(route_for("/contact") == Route::Contact);
        assert!(route_for("/portfolio") == Route::Portfolio);
        assert!(route_for("/") == Route::Home);
    }
}
