//! Reusable Dioxus RSX components for the forecast form apps.

mod error_display;
mod field_error;
mod form_header;
mod month_input;
mod prediction_form;
mod region_selector;
mod result_panel;
mod state_selector;
mod year_field;

pub use error_display::ErrorDisplay;
pub use field_error::FieldError;
pub use form_header::FormHeader;
pub use month_input::MonthInput;
pub use prediction_form::PredictionForm;
pub use region_selector::RegionSelector;
pub use result_panel::ResultPanel;
pub use state_selector::StateSelector;
pub use year_field::{YearField, YearMode};
