use async_trait::async_trait;
use thiserror::Error;

use crate::models::{HouseFeatures, Prediction};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimatorError {
    /// The request never produced a response (refused connection, DNS, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded as a prediction.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// A single-shot price estimator.
///
/// One call issues exactly one attempt; retries, if any, are the caller's
/// decision. Implementations live in backend crates so the UI depends on
/// this contract rather than on a transport.
#[async_trait]
pub trait PriceEstimator: Send + Sync {
    async fn predict(&self, features: &HouseFeatures) -> Result<Prediction, EstimatorError>;
}
