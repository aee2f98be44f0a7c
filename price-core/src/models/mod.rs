mod field;
mod house_features;
mod prediction;

pub use field::{Field, FieldKind};
pub use house_features::{FieldValueError, HouseFeatures};
pub use prediction::Prediction;
