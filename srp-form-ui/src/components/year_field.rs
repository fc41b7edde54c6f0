//! Year control, either a free numeric input or a select of nearby years.

use super::FieldError;
use crate::state::AppState;
use dioxus::prelude::*;
use srp_core::geography::GeographyCatalog;
use srp_core::query::{year_options, Field};

/// How the year is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearMode {
    /// Any positive year may be typed.
    #[default]
    Input,
    /// A select of years around `current_year`.
    Select { current_year: i32 },
}

#[derive(Props, Clone, PartialEq)]
pub struct YearFieldProps {
    #[props(default)]
    pub mode: YearMode,
}

#[component]
pub fn YearField(props: YearFieldProps) -> Element {
    let mut state = use_context::<AppState>();
    let session = state.session.read().clone();
    let year = session.query().year;
    let error = session.visible_error(Field::Year, GeographyCatalog::builtin());

    let on_change = move |evt: Event<FormData>| {
        state.session.write().set_year(&evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column;",
            label {
                r#for: "year-field",
                style: "font-weight: bold; margin-bottom: 4px;",
                "Year: "
            }
            match props.mode {
                YearMode::Input => rsx! {
                    input {
                        id: "year-field",
                        r#type: "number",
                        min: "1",
                        value: "{year}",
                        oninput: on_change,
                    }
                },
                YearMode::Select { current_year } => rsx! {
                    select {
                        id: "year-field",
                        onchange: on_change,
                        option {
                            value: "",
                            selected: year.is_empty(),
                            "Select"
                        }
                        for option_year in year_options(current_year) {
                            option {
                                value: "{option_year}",
                                selected: option_year.to_string() == year,
                                "{option_year}"
                            }
                        }
                    }
                },
            }
            FieldError { message: error }
        }
    }
}
