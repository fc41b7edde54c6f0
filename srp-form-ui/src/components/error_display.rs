//! Failed submission display.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shown under the message; the fields keep their values, so resubmitting is enough.
    #[props(default = "Check your connection and submit again.".to_string())]
    pub hint: String,
}

/// Displays the generic submission error in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.message}" }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px;",
                    "{props.hint}"
                }
            }
        }
    }
}
