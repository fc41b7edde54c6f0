//! Prediction and classification commands.

use anyhow::bail;
use log::info;
use srp_core::classify::classify;
use srp_core::client::PredictionClient;
use srp_core::config::ClientConfig;
use srp_core::current_year;
use srp_core::geography::GeographyCatalog;
use srp_core::prediction::ResultView;
use srp_core::query::{PartialQuery, Query};

/// Text printed for a result view.
pub fn render(view: &ResultView) -> String {
    match view {
        ResultView::Placeholder(text) => text.to_string(),
        ResultView::Prediction { value, category } => format!(
            "Prediction: {}\nCategory: {}\n{}",
            value,
            category.label(),
            category.explanation()
        ),
        ResultView::Error(message) => message.clone(),
    }
}

/// One-line description of a query: `São Paulo (SP, SE) 2026-07`.
pub fn describe(query: &Query) -> String {
    let catalog = GeographyCatalog::builtin();
    let name = catalog.state_name(query.state()).unwrap_or(query.state());
    format!(
        "{} ({}, {}) {}-{:02}",
        name,
        query.state(),
        query.region(),
        query.year(),
        query.month()
    )
}

/// Validate the raw arguments, printing every field error to stderr.
pub fn build_query(
    region: &str,
    state: &str,
    year: Option<&str>,
    month: &str,
) -> anyhow::Result<Query> {
    let year = year
        .map(str::to_string)
        .unwrap_or_else(|| current_year().to_string());
    let partial = PartialQuery::new(region, state, &year, month);
    match partial.to_query(GeographyCatalog::builtin()) {
        Ok(query) => Ok(query),
        Err(validation) => {
            let errors = validation.errors();
            for (field, message) in &errors {
                eprintln!("{}: {}", field, message);
            }
            bail!("{} invalid field(s)", errors.len())
        }
    }
}

/// Request a prediction and print it. A failed request exits with the
/// generic error; the cause is in the log.
pub async fn run_predict(
    region: &str,
    state: &str,
    year: Option<&str>,
    month: &str,
    base_url: &str,
) -> anyhow::Result<()> {
    let query = build_query(region, state, year, month)?;
    let client = PredictionClient::new(ClientConfig::new(base_url));
    info!("Using prediction service {}", client.config().predict_url());

    println!("{}", describe(&query));
    let result = client.submit(&query).await;
    let view = ResultView::from(&result);
    println!("{}", render(&view));
    if let ResultView::Error(message) = view {
        bail!(message);
    }
    Ok(())
}

pub fn run_classify(value: f64) {
    let category = classify(value);
    println!("{}\n{}", category.label(), category.explanation());
}

#[cfg(test)]
mod tests {
    use super::*;
    use srp_core::classify::Category;
    use srp_core::prediction::{GENERIC_ERROR, PLACEHOLDER};

    #[test]
    fn test_render() {
        assert_eq!(render(&ResultView::Placeholder(PLACEHOLDER)), PLACEHOLDER);
        let text = render(&ResultView::Prediction {
            value: "842.50".to_string(),
            category: Category::Normal,
        });
        assert!(text.starts_with("Prediction: 842.50\nCategory: Normal\n"));
        assert_eq!(
            render(&ResultView::Error(GENERIC_ERROR.to_string())),
            GENERIC_ERROR
        );
    }

    #[test]
    fn test_describe() {
        let query = build_query("SE", "SP", Some("2026"), "7").unwrap();
        assert_eq!(describe(&query), "São Paulo (SP, SE) 2026-07");
    }

    #[test]
    fn test_build_query_counts_errors() {
        let err = build_query("", "SP", Some("2025"), "5").unwrap_err();
        assert_eq!(err.to_string(), "1 invalid field(s)");
        let err = build_query("SE", "PR", Some("0"), "13").unwrap_err();
        assert_eq!(err.to_string(), "3 invalid field(s)");
    }

    #[test]
    fn test_build_query_default_year() {
        let query = build_query("SE", "SP", None, "7").unwrap();
        assert_eq!(query.year(), i64::from(current_year()));
    }

    #[tokio::test]
    async fn test_predict_unreachable_service() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let err = run_predict("SE", "SP", Some("2026"), "7", &base_url)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), GENERIC_ERROR);
    }
}
