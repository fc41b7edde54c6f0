//! Numeric month input.

use super::FieldError;
use crate::state::AppState;
use dioxus::prelude::*;
use srp_core::geography::GeographyCatalog;
use srp_core::query::Field;

#[component]
pub fn MonthInput() -> Element {
    let mut state = use_context::<AppState>();
    let session = state.session.read().clone();
    let month = session.query().month;
    let error = session.visible_error(Field::Month, GeographyCatalog::builtin());

    let on_input = move |evt: Event<FormData>| {
        state.session.write().set_month(&evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column;",
            label {
                r#for: "month-input",
                style: "font-weight: bold; margin-bottom: 4px;",
                "Month: "
            }
            input {
                id: "month-input",
                r#type: "number",
                min: "1",
                max: "12",
                value: "{month}",
                oninput: on_input,
            }
            FieldError { message: error }
        }
    }
}
