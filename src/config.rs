/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Reload the selected spot periodically
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Refresh interval in milliseconds (15 minutes = 900,000ms)
    pub const REFRESH_INTERVAL_MS: u32 = 900_000;

    /// Glyph repeated once per rating point in the forecast
    pub const STAR_GLYPH: &str = "⭐";

    /// Upper bound on drawn stars
    pub const MAX_RATING: u32 = 5;

    /// Id of the host element the app mounts into
    pub const ROOT_ELEMENT_ID: &str = "app";
}
