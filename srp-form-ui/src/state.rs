//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use log::{debug, info};
use srp_core::client::PredictionClient;
use srp_core::config::ClientConfig;
use srp_core::geography::GeographyCatalog;
use srp_core::prediction::ResultSlot;
use srp_core::session::FormSession;

/// Shared state of one prediction form.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Field values and the region → state cascade
    pub session: Signal<FormSession>,
    /// The single displayed result; the last request to complete writes it
    pub result: Signal<ResultSlot>,
    /// Number of requests still waiting for a response
    pub in_flight: Signal<usize>,
    /// Client for the prediction service
    pub client: Signal<PredictionClient>,
}

impl AppState {
    /// Create a new AppState for `session`, talking to the service in `config`.
    pub fn new(config: ClientConfig, session: FormSession) -> Self {
        Self {
            session: Signal::new(session),
            result: Signal::new(ResultSlot::new()),
            in_flight: Signal::new(0),
            client: Signal::new(PredictionClient::new(config)),
        }
    }

    /// Validate and, when every field is valid, send the query. The handler
    /// does not wait; the result is stored whenever the response arrives.
    pub fn submit(&mut self) {
        let query = self
            .session
            .write()
            .attempt_submit(GeographyCatalog::builtin());
        let Some(query) = query else {
            debug!("Submit ignored: form has errors");
            return;
        };
        let client = self.client.read().clone();
        *self.in_flight.write() += 1;
        let mut state = *self;
        spawn(async move {
            let result = client.submit(&query).await;
            info!("Storing result for {}: {:?}", query, result.category());
            let previous = state.result.write().store(result);
            debug!("Replaced result {:?}", previous);
            let pending = (state.in_flight)().saturating_sub(1);
            state.in_flight.set(pending);
        });
    }

    pub fn is_pending(&self) -> bool {
        (self.in_flight)() > 0
    }
}
