//! Application metadata constants

pub const NAME: &str = "themectl";
pub const DISPLAY_NAME: &str = "theme-manager";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the default appearance (`light` or `dark`)
pub const APPEARANCE_ENV: &str = "THEME_APPEARANCE";
