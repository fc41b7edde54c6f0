//! Result area: placeholder, prediction with its category, or the generic error.

use super::ErrorDisplay;
use crate::state::AppState;
use dioxus::prelude::*;
use srp_core::prediction::ResultView;

#[component]
pub fn ResultPanel() -> Element {
    let state = use_context::<AppState>();
    let view = state.result.read().view();
    let pending = state.is_pending();

    rsx! {
        div {
            id: "result-panel",
            style: "min-height: 160px; padding: 16px; border: 1px solid #E0E0E0; border-radius: 4px; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center;",
            if pending {
                p {
                    style: "margin: 0 0 8px 0; color: #666;",
                    "Requesting prediction..."
                }
            }
            match view {
                ResultView::Placeholder(text) => rsx! {
                    h2 {
                        style: "margin: 0; font-size: 18px; color: #666;",
                        "{text}"
                    }
                },
                ResultView::Prediction { value, category } => {
                    let badge_style = format!(
                        "display: inline-block; padding: 2px 10px; border-radius: 12px; color: white; background: {}; font-weight: bold;",
                        category.color()
                    );
                    let label = category.label();
                    let explanation = category.explanation();
                    rsx! {
                        h2 {
                            style: "margin: 0 0 8px 0; font-size: 20px;",
                            "Prediction: {value}"
                        }
                        span {
                            style: "{badge_style}",
                            "{label}"
                        }
                        p {
                            style: "margin: 8px 0 0 0; font-size: 14px;",
                            "{explanation}"
                        }
                    }
                }
                ResultView::Error(message) => rsx! {
                    ErrorDisplay { message: message }
                },
            }
        }
    }
}
