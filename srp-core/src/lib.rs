//! Core of the solar radiation forecast form.
//!
//! - `geography`: region → state catalog, embedded as CSV
//! - `query` / `session`: field values, validation, and the submission gate
//! - `selector`: the region → state cascade
//! - `prediction` / `classify`: results, the result slot, and categories
//! - `client`: HTTP client for the prediction service (`api` feature)

pub mod classify;
#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod geography;
pub mod prediction;
pub mod query;
pub mod selector;
pub mod session;

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
