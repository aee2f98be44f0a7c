pub mod estimator;
pub mod form;
pub mod models;

pub use estimator::{EstimatorError, PriceEstimator};
pub use form::EstimateForm;
pub use models::*;
