use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::UploadError;

/// Flat metric mapping returned by the backend. Only numeric entries are kept.
pub type ReportResults = BTreeMap<String, f64>;

/// Decoded body of a `POST /upload` response.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadResponse {
    /// The backend rejected the upload and said why.
    Failed { error: String },
    /// Metrics plus the still-encoded chart document.
    Report { results: ReportResults, chart: String },
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    results: Option<Map<String, Value>>,
    #[serde(default)]
    chart: Option<String>,
}

impl UploadResponse {
    /// Parse a response body. The HTTP status is deliberately ignored: the
    /// backend answers validation failures with 400 and a JSON `error`.
    pub fn from_body(body: &str) -> Result<Self, UploadError> {
        let raw: RawResponse =
            serde_json::from_str(body).map_err(|err| UploadError::InvalidBody(err.to_string()))?;

        if let Some(error) = raw.error.as_ref().and_then(error_text) {
            return Ok(Self::Failed { error });
        }

        let results = raw
            .results
            .ok_or_else(|| UploadError::InvalidBody("missing `results`".into()))?;
        let chart = raw
            .chart
            .ok_or_else(|| UploadError::InvalidBody("missing `chart`".into()))?;

        let results = results
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|number| (key, number)))
            .collect();

        Ok(Self::Report { results, chart })
    }
}

/// Only "truthy" error values count; `""`, `null`, `false` and `0` mean no error.
fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Chart description handed to Plotly as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    #[serde(default = "empty_series")]
    pub data: Value,
    #[serde(default = "empty_layout")]
    pub layout: Value,
}

fn empty_series() -> Value {
    Value::Array(Vec::new())
}

fn empty_layout() -> Value {
    Value::Object(Map::new())
}

impl ChartPayload {
    /// Decode the JSON string carried in the `chart` field.
    pub fn decode(encoded: &str) -> Result<Self, UploadError> {
        serde_json::from_str(encoded).map_err(|err| UploadError::Chart(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_body_keeps_numeric_metrics() {
        let body = json!({
            "results": {
                "Initial_Balance": 1000,
                "Win_Rate": 55.5,
                "Note": "ignored"
            },
            "chart": "{\"data\":[],\"layout\":{}}"
        })
        .to_string();

        match UploadResponse::from_body(&body).unwrap() {
            UploadResponse::Report { results, chart } => {
                assert_eq!(results.get("Initial_Balance"), Some(&1000.0));
                assert_eq!(results.get("Win_Rate"), Some(&55.5));
                assert!(!results.contains_key("Note"));
                assert_eq!(chart, "{\"data\":[],\"layout\":{}}");
            }
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn error_field_wins_over_results() {
        let body = r#"{"error":"bad file","results":{},"chart":"{}"}"#;
        assert_eq!(
            UploadResponse::from_body(body).unwrap(),
            UploadResponse::Failed {
                error: "bad file".into()
            }
        );
    }

    #[test]
    fn empty_error_is_not_an_error() {
        let body = r#"{"error":"","results":{"Net_Profit":3},"chart":"{}"}"#;
        assert!(matches!(
            UploadResponse::from_body(body),
            Ok(UploadResponse::Report { .. })
        ));
    }

    #[test]
    fn only_truthy_error_values_fail_the_upload() {
        let cases = [
            (json!(true), Some("true")),
            (json!(1), Some("1")),
            (json!({"code": 7}), Some(r#"{"code":7}"#)),
            (json!("bad file"), Some("bad file")),
            (json!(false), None),
            (json!(0), None),
            (json!(0.0), None),
            (json!(""), None),
            (json!(null), None),
        ];
        for (value, expected) in cases {
            assert_eq!(
                error_text(&value).as_deref(),
                expected,
                "error value {value}"
            );
        }
    }

    #[test]
    fn falsy_error_with_report_is_a_report() {
        let body = r#"{"error":false,"results":{"Net_Profit":3},"chart":"{}"}"#;
        assert!(matches!(
            UploadResponse::from_body(body),
            Ok(UploadResponse::Report { .. })
        ));
    }

    #[test]
    fn non_json_body_is_invalid() {
        let err = UploadResponse::from_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, UploadError::InvalidBody(_)));
    }

    #[test]
    fn report_without_chart_is_invalid() {
        let err = UploadResponse::from_body(r#"{"results":{}}"#).unwrap_err();
        assert!(matches!(err, UploadError::InvalidBody(msg) if msg.contains("chart")));
    }

    #[test]
    fn chart_decodes_data_and_layout() {
        let chart = ChartPayload::decode(
            r#"{"data":[{"type":"scatter","y":[1,2]}],"layout":{"title":"Equity"}}"#,
        )
        .unwrap();
        assert_eq!(chart.data[0]["type"], "scatter");
        assert_eq!(chart.layout["title"], "Equity");
    }

    #[test]
    fn chart_missing_fields_default_to_empty() {
        let chart = ChartPayload::decode("{}").unwrap();
        assert_eq!(chart.data, json!([]));
        assert_eq!(chart.layout, json!({}));
    }

    #[test]
    fn malformed_chart_is_reported() {
        assert!(matches!(
            ChartPayload::decode("{\"data\":"),
            Err(UploadError::Chart(_))
        ));
    }
}
