//! Solar Radiation Forecast Form, year select variant
//!
//! Same form as `form-year-input`, but the year comes from a select of
//! years around the current one. The select starts empty.

use dioxus::prelude::*;
use srp_core::current_year;
use srp_core::session::FormSession;
use srp_form_ui::components::{FormHeader, PredictionForm, YearMode};
use srp_form_ui::config::config_from_document;
use srp_form_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("solar-form-select-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let year = use_hook(current_year);
    use_context_provider(|| AppState::new(config_from_document(), FormSession::new()));
    use_hook(|| log::info!("forecast form mounted (year select, {})", year));

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            FormHeader {
                title: "Solar Radiation Forecast".to_string(),
                subtitle: "Pick a Brazilian region and state, then the year and month to forecast".to_string(),
            }
            PredictionForm { year_mode: YearMode::Select { current_year: year } }
        }
    }
}
