use serde::{Deserialize, Serialize};

/// Response returned by the prediction service.
///
/// The contract only requires a numeric `predicted_price`; any extra keys
/// in the body are ignored during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_price: f64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_the_minimal_response_shape() {
        let prediction: Prediction =
            serde_json::from_str(r#"{ "predicted_price": 452000 }"#).unwrap();

        assert_eq!(prediction.predicted_price, 452000.0);
    }

    #[test]
    fn extra_response_keys_are_ignored() {
        let prediction: Prediction = serde_json::from_str(
            r#"{ "predicted_price": 325500.5, "model_version": "v3", "latency_ms": 1200 }"#,
        )
        .unwrap();

        assert_eq!(prediction.predicted_price, 325500.5);
    }

    #[test]
    fn non_numeric_price_fails_to_decode() {
        let result = serde_json::from_str::<Prediction>(r#"{ "predicted_price": "cheap" }"#);

        assert!(result.is_err());
    }
}
