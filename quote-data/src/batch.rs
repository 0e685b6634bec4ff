use quote_core::{Estimator, QuoteRequest, QuoteResult};
use serde::Serialize;
use tracing::warn;

/// Outcome of estimating one CSV row. Exactly one of `quote` and `error`
/// is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRow {
    /// 1-based data row, header excluded.
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchRow {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Estimates every request in order. A rejected row is recorded and the
/// batch carries on.
pub fn estimate_batch(
    estimator: &Estimator,
    requests: &[QuoteRequest],
) -> Vec<BatchRow> {
    requests
        .iter()
        .enumerate()
        .map(|(idx, request)| {
            let row = idx + 1;
            match estimator.estimate(request) {
                Ok(quote) => BatchRow {
                    row,
                    quote: Some(quote),
                    error: None,
                },
                Err(e) => {
                    warn!(row, error = %e, "quote row rejected");
                    BatchRow {
                        row,
                        quote: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
}
