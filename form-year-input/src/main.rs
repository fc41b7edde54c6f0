//! Solar Radiation Forecast Form
//!
//! Collects region, state, year and month, sends them to the prediction
//! service, and shows the predicted radiation with its agricultural category.
//! The year is typed freely; any positive year is accepted.

use dioxus::prelude::*;
use srp_core::session::FormSession;
use srp_form_ui::components::{FormHeader, PredictionForm, YearMode};
use srp_form_ui::config::config_from_document;
use srp_form_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("solar-form-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| AppState::new(config_from_document(), FormSession::new()));
    use_hook(|| log::info!("forecast form mounted (year input)"));

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            FormHeader {
                title: "Solar Radiation Forecast".to_string(),
                subtitle: "Pick a Brazilian region and state, then the year and month to forecast".to_string(),
            }
            PredictionForm { year_mode: YearMode::Input }
        }
    }
}
