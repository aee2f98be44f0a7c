use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::field::Field;

/// Error returned when a control value cannot be stored in a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldValueError {
    #[error("{0} must be a whole number")]
    NotNumeric(&'static str),

    #[error("{value} is not a valid value for {field}")]
    OutOfDomain { field: &'static str, value: i64 },
}

/// The complete set of attributes submitted to the prediction service.
///
/// Every field always holds a value; there is no optionality and no NaN.
/// Serialization produces the exact twelve-key JSON object the `/predict`
/// endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseFeatures {
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub sqft_living: i64,
    pub floors: i64,
    pub waterfront: i64,
    pub view: i64,
    pub condition: i64,
    pub grade: i64,
    pub sqft_above: i64,
    pub sqft_basement: i64,
    pub yr_built: i64,
    pub yr_renovated: i64,
}

impl Default for HouseFeatures {
    fn default() -> Self {
        Self {
            bedrooms: 3,
            bathrooms: 2,
            sqft_living: 1500,
            floors: 1,
            waterfront: 0,
            view: 0,
            condition: 3,
            grade: 7,
            sqft_above: 1000,
            sqft_basement: 500,
            yr_built: 2000,
            yr_renovated: 0,
        }
    }
}

impl HouseFeatures {
    pub fn get(&self, field: Field) -> i64 {
        match field {
            Field::Bedrooms => self.bedrooms,
            Field::Bathrooms => self.bathrooms,
            Field::SqftLiving => self.sqft_living,
            Field::Floors => self.floors,
            Field::Waterfront => self.waterfront,
            Field::View => self.view,
            Field::Condition => self.condition,
            Field::Grade => self.grade,
            Field::SqftAbove => self.sqft_above,
            Field::SqftBasement => self.sqft_basement,
            Field::YrBuilt => self.yr_built,
            Field::YrRenovated => self.yr_renovated,
        }
    }

    /// Writes exactly `field`, leaving every other field untouched.
    ///
    /// Values outside a closed-choice field's domain are rejected, so a
    /// selector-backed field can never hold an out-of-set value.
    pub fn set(
        &mut self,
        field: Field,
        value: i64,
    ) -> Result<(), FieldValueError> {
        if !field.kind().allows(value) {
            return Err(FieldValueError::OutOfDomain {
                field: field.label(),
                value,
            });
        }

        match field {
            Field::Bedrooms => self.bedrooms = value,
            Field::Bathrooms => self.bathrooms = value,
            Field::SqftLiving => self.sqft_living = value,
            Field::Floors => self.floors = value,
            Field::Waterfront => self.waterfront = value,
            Field::View => self.view = value,
            Field::Condition => self.condition = value,
            Field::Grade => self.grade = value,
            Field::SqftAbove => self.sqft_above = value,
            Field::SqftBasement => self.sqft_basement = value,
            Field::YrBuilt => self.yr_built = value,
            Field::YrRenovated => self.yr_renovated = value,
        }
        Ok(())
    }

    /// Parses a raw control string as a whole number and stores it via
    /// [`set`](Self::set). Non-numeric input is an error, never NaN.
    pub fn set_raw(
        &mut self,
        field: Field,
        raw: &str,
    ) -> Result<(), FieldValueError> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| FieldValueError::NotNumeric(field.label()))?;
        self.set(field, value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::field::FieldKind;
    use super::*;

    #[test]
    fn defaults_match_the_service_contract() {
        let features = HouseFeatures::default();

        assert_eq!(features.bedrooms, 3);
        assert_eq!(features.bathrooms, 2);
        assert_eq!(features.sqft_living, 1500);
        assert_eq!(features.floors, 1);
        assert_eq!(features.waterfront, 0);
        assert_eq!(features.view, 0);
        assert_eq!(features.condition, 3);
        assert_eq!(features.grade, 7);
        assert_eq!(features.sqft_above, 1000);
        assert_eq!(features.sqft_basement, 500);
        assert_eq!(features.yr_built, 2000);
        assert_eq!(features.yr_renovated, 0);
    }

    #[test]
    fn set_updates_exactly_the_named_field() {
        for &field in Field::all() {
            let baseline = HouseFeatures::default();
            let mut updated = baseline.clone();

            let new_value = match field.kind() {
                FieldKind::Numeric => baseline.get(field) + 1,
                FieldKind::Labeled(options) => options
                    .iter()
                    .map(|(v, _)| *v)
                    .find(|v| *v != baseline.get(field))
                    .unwrap(),
                FieldKind::Range { min, max } => {
                    if baseline.get(field) == min { max } else { min }
                }
            };

            updated.set(field, new_value).unwrap();
            assert_eq!(updated.get(field), new_value);

            for &other in Field::all() {
                if other != field {
                    assert_eq!(
                        updated.get(other),
                        baseline.get(other),
                        "{other:?} changed while setting {field:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn set_raw_stores_the_parsed_number() {
        let mut features = HouseFeatures::default();

        features.set_raw(Field::Bedrooms, "5").unwrap();

        assert_eq!(features.bedrooms, 5);
    }

    #[test]
    fn set_raw_trims_whitespace() {
        let mut features = HouseFeatures::default();

        features.set_raw(Field::SqftLiving, "  2400 ").unwrap();

        assert_eq!(features.sqft_living, 2400);
    }

    #[test]
    fn set_raw_rejects_non_numeric_input() {
        let mut features = HouseFeatures::default();

        let result = features.set_raw(Field::Bedrooms, "many");

        assert_eq!(result, Err(FieldValueError::NotNumeric("Bedrooms")));
        assert_eq!(features.bedrooms, 3, "failed parse must not mutate");
    }

    #[test]
    fn set_raw_rejects_fractional_input() {
        let mut features = HouseFeatures::default();

        let result = features.set_raw(Field::Bathrooms, "2.5");

        assert_eq!(result, Err(FieldValueError::NotNumeric("Bathrooms")));
    }

    #[test]
    fn closed_choice_fields_reject_out_of_set_values() {
        let mut features = HouseFeatures::default();

        assert_eq!(
            features.set(Field::Waterfront, 2),
            Err(FieldValueError::OutOfDomain {
                field: "Waterfront",
                value: 2,
            })
        );
        assert!(features.set(Field::View, 4).is_err());
        assert!(features.set(Field::Condition, 0).is_err());
        assert!(features.set(Field::Grade, 13).is_err());
        assert!(features.set(Field::Floors, 6).is_err());

        assert_eq!(features, HouseFeatures::default());
    }

    #[test]
    fn wire_body_has_exactly_the_twelve_keys() {
        let body = serde_json::to_value(HouseFeatures::default()).unwrap();
        let object = body.as_object().unwrap();

        assert_eq!(object.len(), 12);
        for field in Field::all() {
            assert!(
                object.contains_key(field.key()),
                "missing wire key {}",
                field.key()
            );
            assert!(object[field.key()].is_number());
        }
    }
}
