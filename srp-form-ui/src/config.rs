//! Prediction service configuration taken from the host page.
//!
//! The page may carry `<meta name="srp-api-base" content="https://...">`;
//! without it the client talks to the default local service.

use log::info;
use srp_core::config::ClientConfig;

/// Name of the meta tag holding the prediction service base URL.
pub const META_NAME: &str = "srp-api-base";

/// Build the client configuration from the current document.
pub fn config_from_document() -> ClientConfig {
    let base_url = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| {
            d.query_selector(&format!("meta[name=\"{}\"]", META_NAME))
                .ok()
                .flatten()
        })
        .and_then(|e| e.get_attribute("content"));
    let config = ClientConfig::from_optional(base_url.as_deref());
    info!("Prediction service: {}", config.predict_url());
    config
}
