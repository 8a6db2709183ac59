use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::storage::{KeyValueStore, LocalStore, COOKIE_CONSENT_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Consent::Accepted => "accepted",
            Consent::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(Consent::Accepted),
            "declined" => Some(Consent::Declined),
            _ => None,
        }
    }
}

/// Stored choice. Unreadable storage counts as "no choice yet".
pub fn stored_consent(store: &dyn KeyValueStore) -> Option<Consent> {
    store
        .get(COOKIE_CONSENT_KEY)
        .ok()
        .flatten()
        .and_then(|v| Consent::parse(&v))
}

pub fn record_consent(store: &dyn KeyValueStore, consent: Consent) {
    if let Err(e) = store.set(COOKIE_CONSENT_KEY, consent.as_str()) {
        warn!("Could not store cookie consent: {}", e);
    }
}

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let is_visible = use_state(|| false);

    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(move |_| {
            let timer = if stored_consent(&LocalStore).is_none() {
                Some(Timeout::new(config::COOKIE_BANNER_DELAY_MS, move || {
                    is_visible.set(true);
                }))
            } else {
                None
            };

            move || drop(timer)
        }, ());
    }

    let choose = |consent: Consent| {
        let is_visible = is_visible.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Cookie consent {}", consent.as_str());
            record_consent(&LocalStore, consent);
            is_visible.set(false);
        })
    };

    let dismiss = {
        let is_visible = is_visible.clone();
        Callback::from(move |_: MouseEvent| is_visible.set(false))
    };

    if !*is_visible {
        return html! {};
    }

    html! {
        <div class="cookie-banner" role="dialog" aria-label="Privacy Preference">
            <div class="cookie-card">
                <div class="cookie-icon" aria-hidden="true">{"🛡️"}</div>
                <div class="cookie-body">
                    <h4>{"Privacy Preference"}</h4>
                    <p>{"We use cookies to improve your experience and analyze site traffic. By clicking \"Accept All\", you agree to our use of cookies."}</p>
                    <div class="cookie-actions">
                        <button class="btn btn-primary btn-sm" onclick={choose(Consent::Accepted)}>{"Accept All"}</button>
                        <button class="btn btn-outline btn-sm" onclick={choose(Consent::Declined)}>{"Decline"}</button>
                    </div>
                </div>
                <button class="cookie-close" onclick={dismiss} aria-label="Close">{"✕"}</button>
            </div>
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    max-width: 28rem;
                    z-index: 110;
                    animation: slideUp 0.5s ease-out;
                }
                .cookie-card {
                    position: relative;
                    display: flex;
                    gap: 1rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-left: 4px solid var(--accent);
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .cookie-icon {
                    font-size: 1.5rem;
                    padding: 0.75rem;
                    background: var(--accent-soft);
                    border-radius: 0.75rem;
                    height: fit-content;
                }
                .cookie-body h4 {
                    margin: 0 0 0.25rem;
                    color: var(--text-strong);
                }
                .cookie-body p {
                    font-size: 0.875rem;
                    color: var(--text-muted);
                    line-height: 1.6;
                }
                .cookie-actions {
                    display: flex;
                    gap: 0.75rem;
                }
                .cookie-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: var(--text-muted);
                    cursor: pointer;
                }
                @keyframes slideUp {
                    from { transform: translateY(2rem); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                @media (max-width: 768px) {
                    .cookie-banner {
                        left: 1.5rem;
                        max-width: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_no_choice_until_recorded() {
        let store = MemoryStore::default();
        assert_eq!(stored_consent(&store), None);

        record_consent(&store, Consent::Declined);
        assert_eq!(stored_consent(&store), Some(Consent::Declined));
        assert_eq!(store.get(COOKIE_CONSENT_KEY).unwrap().as_deref(), Some("declined"));

        record_consent(&store, Consent::Accepted);
        assert_eq!(stored_consent(&store), Some(Consent::Accepted));
    }

    #[test]
    fn test_unknown_value_is_no_choice() {
        let store = MemoryStore::default();
        store.set(COOKIE_CONSENT_KEY, "maybe").unwrap();
        assert_eq!(stored_consent(&store), None);
    }
}
