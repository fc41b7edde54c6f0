//! Form header component with title and subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FormHeaderProps {
    /// Form title
    pub title: String,
    /// Short explanation under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for the form showing title and optional subtitle.
#[component]
pub fn FormHeader(props: FormHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
