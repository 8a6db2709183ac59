use log::Level;

pub const COMPANY_NAME: &str = "OITS Dhaka";
pub const TAGLINE: &str = "Engineering digital products that scale";
pub const ADDRESS: &str = "House 42, Road 11, Banani, Dhaka 1213, Bangladesh";
pub const CONTACT_EMAIL: &str = "hello@oitsdhaka.com";
pub const CONTACT_PHONE: &str = "+880 1234 567890";

// Header switches to its compact style past this many pixels.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const COOKIE_BANNER_DELAY_MS: u32 = 2_000;
pub const SIMULATED_SUBMIT_MS: u32 = 1_500;
pub const PORTFOLIO_LOADING_MS: u32 = 500;
pub const CONTROLS_IDLE_MS: u32 = 3_000;
pub const TYPING_TICK_MS: u32 = 15;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_THRESHOLD_LATE: f64 = 0.2;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://oitsdhaka.com"
}

/// Current page URL, falling back to the configured site root.
pub fn current_page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| get_site_url().to_string())
}
