//! Prediction form payload, endpoint response shape and result panel markup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder markup shown while a prediction request is in flight.
pub const PENDING_MARKUP: &str = r#"<div class="text-center text-slate-500">Predicting...</div>"#;

/// Markup shown when the request fails or the response cannot be decoded.
pub const ERROR_MARKUP: &str = r#"<div class="text-red-500">Unable to predict right now.</div>"#;

/// Form fields serialised as a flat JSON object of string values.
///
/// Field order is stable (sorted by name), so payloads compare and log
/// deterministically.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PredictPayload {
    fields: BTreeMap<String, String>,
}

impl PredictPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field value; a repeated name keeps the latest value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PredictPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Response body of the prediction endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub predicted_deposit: f64,
    pub confidence: f64,
    pub model_name: String,
    pub interpretation: String,
}

/// Currency line of the result panel; whole amounts print without a decimal
/// part ("$500", "$512.75").
pub fn format_deposit(value: f64) -> String {
    format!("${value}")
}

/// Confidence fraction scaled to a percentage with one decimal ("87.0%").
pub fn format_confidence(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Result panel markup for a decoded prediction.
///
/// Server-supplied text lands in the page via innerHTML, so it is escaped
/// here.
pub fn result_markup(prediction: &Prediction) -> String {
    format!(
        r#"<div class="p-4 rounded-2xl glass shadow-soft">
  <div class="flex items-center justify-between">
    <div>
      <p class="text-sm uppercase tracking-wide text-slate-500">Predicted Deposit</p>
      <p class="text-3xl font-bold">{deposit}</p>
      <p class="text-sm mt-2 text-slate-500">Confidence: {confidence}</p>
    </div>
    <span class="metric-chip">{model}</span>
  </div>
  <p class="mt-3 text-sm text-slate-600 dark:text-slate-300">{interpretation}</p>
</div>"#,
        deposit = format_deposit(prediction.predicted_deposit),
        confidence = format_confidence(prediction.confidence),
        model = escape_html(&prediction.model_name),
        interpretation = escape_html(&prediction.interpretation),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Prediction {
        Prediction {
            predicted_deposit: 500.0,
            confidence: 0.87,
            model_name: "RF".to_string(),
            interpretation: "test".to_string(),
        }
    }

    #[test]
    fn test_deposit_formatting_drops_trailing_zero_fraction() {
        assert_eq!(format_deposit(500.0), "$500");
        assert_eq!(format_deposit(512.75), "$512.75");
        assert_eq!(format_deposit(0.5), "$0.5");
    }

    #[test]
    fn test_confidence_formatting_one_decimal() {
        assert_eq!(format_confidence(0.87), "87.0%");
        assert_eq!(format_confidence(0.912), "91.2%");
        assert_eq!(format_confidence(1.0), "100.0%");
    }

    #[test]
    fn test_payload_serialises_as_flat_string_object() {
        let mut payload = PredictPayload::new();
        payload.insert("loan_amount", "1000");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"loan_amount":"1000"}"#);
    }

    #[test]
    fn test_empty_payload_serialises_as_empty_object() {
        let json = serde_json::to_string(&PredictPayload::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_repeated_field_keeps_latest_value() {
        let mut payload = PredictPayload::new();
        payload.insert("age", "30");
        payload.insert("age", "31");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("age"), Some("31"));
    }

    #[test]
    fn test_result_markup_carries_all_response_fields() {
        let markup = result_markup(&sample());
        assert!(markup.contains("Predicted Deposit"));
        assert!(markup.contains("$500"));
        assert!(markup.contains("Confidence: 87.0%"));
        assert!(markup.contains(r#"<span class="metric-chip">RF</span>"#));
        assert!(markup.contains(">test</p>"));
    }

    #[test]
    fn test_result_markup_escapes_server_text() {
        let mut prediction = sample();
        prediction.interpretation = "<script>alert(1)</script>".to_string();
        prediction.model_name = "A & B".to_string();
        let markup = result_markup(&prediction);
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(markup.contains("A &amp; B"));
    }

    #[test]
    fn test_prediction_decodes_from_endpoint_json() {
        let body = r#"{
            "predicted_deposit": 1543.21,
            "confidence": 0.89,
            "model_name": "Gradient Boosting Regressor",
            "interpretation": "Customer is likely to place a term deposit."
        }"#;
        let prediction: Prediction = serde_json::from_str(body).unwrap();
        assert_eq!(prediction.predicted_deposit, 1543.21);
        assert_eq!(prediction.model_name, "Gradient Boosting Regressor");
    }
}
