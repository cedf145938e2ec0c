//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default endpoint for the image generation service
pub const DEFAULT_GENERATE_URL: &str = "http://localhost:8080/api/v1/dalle";

/// Environment variable overriding the generation endpoint
pub const GENERATE_URL_ENV: &str = "TEESMITH_GENERATE_URL";

/// Default shirt color
pub const DEFAULT_COLOR: &str = "#0CAFFF";

/// Placeholder decal shown before anything is uploaded or generated
pub const PLACEHOLDER_DECAL: &str = "./t-shirt-holder.jpeg";

/// Color swatches offered by the color picker
pub const PALETTE: &[&str] = &[
    "#0CAFFF", "#EFBD4E", "#80C670", "#726DE8", "#353934", "#2CCCE4",
    "#FF8A65", "#7098DA", "#C19277", "#FF96AD", "#512314", "#5F123D",
];

/// Application name
#[allow(dead_code)]
pub const APP_NAME: &str = "Teesmith";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the generation endpoint, honoring the environment override
pub fn generate_url() -> String {
    std::env::var(GENERATE_URL_ENV).unwrap_or_else(|_| DEFAULT_GENERATE_URL.to_string())
}
