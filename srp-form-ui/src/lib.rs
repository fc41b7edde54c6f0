//! Shared Dioxus components for the solar radiation forecast form apps.
//!
//! This crate provides:
//! - `config`: prediction service configuration read from the host page
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, inputs, result panel)

pub mod components;
pub mod config;
pub mod state;
