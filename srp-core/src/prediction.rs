//! Prediction results, the single result slot, and the wire format of the
//! prediction service.

use crate::classify::{classify, Category};
use crate::query::Query;
use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text shown for any failed submission. The cause is only logged.
pub const GENERIC_ERROR: &str = "Error processing the request.";

/// Text shown before the first submission.
pub const PLACEHOLDER: &str = "The result will appear here";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionResult {
    /// No submission has happened yet.
    #[default]
    Empty,
    Success { value: f64 },
    Failure { message: String },
}

impl PredictionResult {
    pub fn failure() -> Self {
        PredictionResult::Failure {
            message: GENERIC_ERROR.to_string(),
        }
    }

    /// Category of a successful prediction. Empty and Failure are never classified.
    pub fn category(&self) -> Option<Category> {
        match self {
            PredictionResult::Success { value } => Some(classify(*value)),
            _ => None,
        }
    }
}

/// The one displayed result.
///
/// Writes are last-writer-wins: there is no request ordering or cancellation,
/// so an older request that completes after a newer one overwrites it. This
/// race is known and accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSlot {
    current: PredictionResult,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed result, returning the previous one.
    pub fn store(&mut self, result: PredictionResult) -> PredictionResult {
        std::mem::replace(&mut self.current, result)
    }

    pub fn view(&self) -> ResultView {
        ResultView::from(&self.current)
    }
}

/// What the result area renders, recomputed from the current result.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Placeholder(&'static str),
    Prediction { value: String, category: Category },
    Error(String),
}

impl From<&PredictionResult> for ResultView {
    fn from(result: &PredictionResult) -> Self {
        match result {
            PredictionResult::Empty => ResultView::Placeholder(PLACEHOLDER),
            PredictionResult::Success { value } => ResultView::Prediction {
                value: format!("{:.2}", value),
                category: classify(*value),
            },
            PredictionResult::Failure { message } => ResultView::Error(message.clone()),
        }
    }
}

/// Request body for `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredictRequest {
    pub state: String,
    pub region: String,
    pub month: u32,
    pub year: i64,
}

impl From<&Query> for PredictRequest {
    fn from(query: &Query) -> Self {
        Self {
            state: query.state().to_string(),
            region: query.region().code().to_string(),
            month: query.month(),
            year: query.year(),
        }
    }
}

/// Response body of `POST /predict`. The service answers failures with
/// `{"error": "..."}` instead of a prediction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub prediction: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictResponse {
    /// The prediction as a number. Numeric strings are accepted.
    pub fn value(&self) -> anyhow::Result<f64> {
        let value = match &self.prediction {
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| anyhow!("prediction {} is not representable", n))?,
            Some(Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| anyhow!("prediction {:?} is not numeric: {}", s, e))?,
            Some(other) => bail!("prediction has unexpected type: {}", other),
            None => match &self.error {
                Some(err) => bail!("service reported an error: {}", err),
                None => bail!("response has no prediction field"),
            },
        };
        if !value.is_finite() {
            bail!("prediction {} is not finite", value);
        }
        Ok(value)
    }
}
