use async_trait::async_trait;
use price_core::{EstimatorError, HouseFeatures, Prediction, PriceEstimator};
use reqwest::Client;
use tracing::debug;

/// [`PriceEstimator`] backed by a remote service speaking the `/predict`
/// contract: one POST with the features as a JSON body, one JSON object
/// with a numeric `predicted_price` back.
///
/// The client enforces no timeout and performs no retries; a call is one
/// attempt, and a slow service simply keeps the future pending.
pub struct HttpEstimator {
    client: Client,
    base_url: String,
}

impl HttpEstimator {
    /// Creates a client for the service at `base_url` (scheme + authority,
    /// with or without a trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[async_trait]
impl PriceEstimator for HttpEstimator {
    async fn predict(
        &self,
        features: &HouseFeatures,
    ) -> Result<Prediction, EstimatorError> {
        let url = self.predict_url();
        debug!(%url, "requesting price estimate");

        let response = self
            .client
            .post(&url)
            .json(features)
            .send()
            .await
            .map_err(|e| EstimatorError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(EstimatorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| EstimatorError::Request(e.to_string()))?;
        let prediction: Prediction = serde_json::from_str(&body)
            .map_err(|e| EstimatorError::MalformedResponse(e.to_string()))?;

        debug!(price = prediction.predicted_price, "estimate received");
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_the_base_url() {
        let estimator = HttpEstimator::new("http://127.0.0.1:8000/");

        assert_eq!(estimator.predict_url(), "http://127.0.0.1:8000/predict");
    }

    #[test]
    fn bare_base_url_is_used_as_is() {
        let estimator = HttpEstimator::new("https://estimator.example.com");

        assert_eq!(
            estimator.predict_url(),
            "https://estimator.example.com/predict"
        );
    }
}
