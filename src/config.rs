use log::Level;

/// Section ids in the order they appear on the page.
pub const SECTION_IDS: &[&str] = &["features", "how-it-works", "revolution", "security", "contact"];

/// Share of a section that must be on screen before it counts as active.
pub const ACTIVE_THRESHOLD: f64 = 0.3;

/// Share of a block that must be on screen before its reveal animation runs.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const THEME_STORAGE_KEY: &str = "soapp-theme";

pub const HEADER_SCROLLED_OFFSET: f64 = 10.0;

pub const WELCOME_TOAST_DELAY_MS: u32 = 1_500;
pub const TOAST_LIFETIME_MS: u32 = 5_000;

pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const SUBMITTED_RESET_MS: u32 = 3_000;

pub const SCROLL_TIP_DELAY_MS: u32 = 3_000;
pub const SCROLL_TIP_VISIBLE_MS: u32 = 5_000;
pub const SCROLL_TIP_MAX_PROGRESS: f64 = 0.05;

pub const HERO_STEP_INTERVAL_MS: u32 = 2_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
