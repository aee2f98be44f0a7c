//! The editable buffer layer between the keyboard and [`HouseFeatures`].
//!
//! Free-entry fields are held as raw strings exactly as typed; closed-choice
//! fields are held as already-valid selections. Validation is the explicit
//! parse step that turns the buffers into a feature set, collecting one
//! message per offending field instead of silently coercing.

use crate::models::{Field, HouseFeatures};

/// Form state for composing a prediction request.
#[derive(Debug, Clone)]
pub struct EstimateForm {
    // Free-entry buffers
    pub bedrooms: String,
    pub bathrooms: String,
    pub sqft_living: String,
    pub sqft_above: String,
    pub sqft_basement: String,
    pub yr_built: String,
    pub yr_renovated: String,

    // Closed-choice selections, valid by construction
    pub floors: i64,
    pub waterfront: i64,
    pub view: i64,
    pub condition: i64,
    pub grade: i64,

    /// Messages from the last failed validation, one per offending field.
    pub errors: Vec<String>,
}

impl EstimateForm {
    /// A form pre-filled with the default feature set.
    pub fn new() -> Self {
        Self::from_features(&HouseFeatures::default())
    }

    pub fn from_features(features: &HouseFeatures) -> Self {
        Self {
            bedrooms: features.bedrooms.to_string(),
            bathrooms: features.bathrooms.to_string(),
            sqft_living: features.sqft_living.to_string(),
            sqft_above: features.sqft_above.to_string(),
            sqft_basement: features.sqft_basement.to_string(),
            yr_built: features.yr_built.to_string(),
            yr_renovated: features.yr_renovated.to_string(),
            floors: features.floors,
            waterfront: features.waterfront,
            view: features.view,
            condition: features.condition,
            grade: features.grade,
            errors: Vec::new(),
        }
    }

    /// Parses every buffer into a [`HouseFeatures`], collecting errors.
    ///
    /// On `Err` the per-field messages are in [`errors`](Self::errors) and
    /// no feature set is produced.
    pub fn validate(&mut self) -> Result<HouseFeatures, ()> {
        let mut errors = Vec::new();
        let mut features = HouseFeatures::default();

        let free = [
            (Field::Bedrooms, self.bedrooms.as_str()),
            (Field::Bathrooms, self.bathrooms.as_str()),
            (Field::SqftLiving, self.sqft_living.as_str()),
            (Field::SqftAbove, self.sqft_above.as_str()),
            (Field::SqftBasement, self.sqft_basement.as_str()),
            (Field::YrBuilt, self.yr_built.as_str()),
            (Field::YrRenovated, self.yr_renovated.as_str()),
        ];
        for (field, raw) in free {
            if raw.trim().is_empty() {
                errors.push(format!("{} is required", field.label()));
            } else if let Err(e) = features.set_raw(field, raw) {
                errors.push(e.to_string());
            }
        }

        let chosen = [
            (Field::Floors, self.floors),
            (Field::Waterfront, self.waterfront),
            (Field::View, self.view),
            (Field::Condition, self.condition),
            (Field::Grade, self.grade),
        ];
        for (field, value) in chosen {
            if let Err(e) = features.set(field, value) {
                errors.push(e.to_string());
            }
        }

        self.errors = errors;
        if self.errors.is_empty() {
            Ok(features)
        } else {
            Err(())
        }
    }
}

impl Default for EstimateForm {
    fn default() -> Self {
        Self::new()
    }
}
