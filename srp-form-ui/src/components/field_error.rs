use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FieldErrorProps {
    #[props(!optional)]
    pub message: Option<&'static str>,
}

/// Inline message under a form control; renders nothing while the field is valid.
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    rsx! {
        if let Some(message) = props.message {
            p {
                style: "margin: 4px 0 0 0; font-size: 12px; color: #C62828;",
                "{message}"
            }
        }
    }
}
