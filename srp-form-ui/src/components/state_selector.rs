//! Dropdown selector for choosing a state of the selected region.

use super::FieldError;
use crate::state::AppState;
use dioxus::prelude::*;
use srp_core::geography::GeographyCatalog;
use srp_core::query::Field;
use srp_core::selector::SelectorState;

/// State dropdown selector.
/// Options are derived from the current region on every render; with no
/// region chosen the list is empty and the control is disabled.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let catalog = GeographyCatalog::builtin();
    let session = state.session.read().clone();
    let options = session.state_options(catalog).to_vec();
    let unconstrained = session.selector_state() == SelectorState::Unconstrained;
    let selected = session.query().state;
    let error = session.visible_error(Field::State, catalog);

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.session.write().select_state(&value);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column;",
            label {
                r#for: "state-select",
                style: "font-weight: bold; margin-bottom: 4px;",
                "State: "
            }
            select {
                id: "state-select",
                disabled: unconstrained,
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select"
                }
                for entry in options.iter() {
                    option {
                        value: "{entry.code}",
                        selected: entry.code == selected,
                        "{entry.name}"
                    }
                }
            }
            FieldError { message: error }
        }
    }
}
