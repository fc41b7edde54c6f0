//! The complete form: inputs on one side, result on the other.

use super::{MonthInput, RegionSelector, ResultPanel, StateSelector, YearField, YearMode};
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PredictionFormProps {
    #[props(default)]
    pub year_mode: YearMode,
}

/// Region, state, year and month controls with a submit button and the result panel.
///
/// Submitting with invalid fields only reveals the inline errors. A valid
/// submission sends a request without waiting for earlier ones; the fields
/// keep their values either way.
#[component]
pub fn PredictionForm(props: PredictionFormProps) -> Element {
    let mut state = use_context::<AppState>();

    let on_submit = move |_: Event<MouseData>| {
        state.submit();
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: stretch;",
            div {
                style: "flex: 1 1 280px; padding: 16px; border: 1px solid #E0E0E0; border-radius: 4px;",
                RegionSelector {}
                StateSelector {}
                YearField { mode: props.year_mode }
                MonthInput {}
                button {
                    r#type: "button",
                    style: "margin-top: 12px; padding: 8px 24px; font-weight: bold; border-radius: 4px; border: 1px solid #1565C0; background: #1976D2; color: white; cursor: pointer;",
                    onclick: on_submit,
                    "Request"
                }
            }
            div {
                style: "flex: 1 1 280px;",
                ResultPanel {}
            }
        }
    }
}
