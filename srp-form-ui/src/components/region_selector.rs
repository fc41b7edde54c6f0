//! Dropdown selector for choosing a region.

use super::FieldError;
use crate::state::AppState;
use dioxus::prelude::*;
use srp_core::geography::GeographyCatalog;
use srp_core::query::Field;

/// Region dropdown selector.
/// Selecting a region replaces the state options and clears the chosen state.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let catalog = GeographyCatalog::builtin();
    let session = state.session.read().clone();
    let selected = session.query().region;
    let error = session.visible_error(Field::Region, catalog);
    let regions: Vec<(&'static str, String)> = catalog
        .regions()
        .map(|r| (r.code(), format!("{} ({})", r.label(), r.code())))
        .collect();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.session.write().select_region(&value);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; margin-bottom: 4px;",
                "Region: "
            }
            select {
                id: "region-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select"
                }
                for (code, label) in regions.iter() {
                    option {
                        value: "{code}",
                        selected: *code == selected,
                        "{label}"
                    }
                }
            }
            FieldError { message: error }
        }
    }
}
