//! Payload parsing for planning requests.
//!
//! Presence of the three top-level fields is checked before any typed
//! deserialization, so a missing field is reported as a validation error
//! while a malformed one is an internal failure.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::plan::LoadRequest;

/// Top-level fields every payload must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["load", "fuels", "powerplants"];

/// Failure to turn a payload into a [`LoadRequest`].
#[derive(Error, Debug)]
pub enum RequestError {
    /// One or more required fields are absent or `null`.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// Fields are present but do not have the expected shape.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The payload file could not be read.
    #[error("cannot read \"{path}\": {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Returns the required fields that are absent or `null` in `payload`.
pub fn missing_fields(payload: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|field| payload.get(field).is_none_or(Value::is_null))
        .collect()
}

impl LoadRequest {
    /// Builds a request from an already-parsed JSON payload.
    ///
    /// # Errors
    ///
    /// [`RequestError::MissingFields`] if `load`, `fuels` or `powerplants` is
    /// absent; [`RequestError::Malformed`] if any field has the wrong shape.
    pub fn from_value(payload: Value) -> Result<Self, RequestError> {
        let missing = missing_fields(&payload);
        if !missing.is_empty() {
            return Err(RequestError::MissingFields(missing));
        }
        Ok(serde_json::from_value(payload)?)
    }

    /// Parses a request from JSON text.
    ///
    /// # Errors
    ///
    /// See [`LoadRequest::from_value`].
    pub fn from_json_str(s: &str) -> Result<Self, RequestError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Reads and parses a JSON payload file.
    ///
    /// # Errors
    ///
    /// [`RequestError::Io`] if the file cannot be read, otherwise see
    /// [`LoadRequest::from_value`].
    pub fn from_json_file(path: &Path) -> Result<Self, RequestError> {
        let content = fs::read_to_string(path).map_err(|source| RequestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload() -> Value {
        json!({
            "load": 480,
            "fuels": {
                "gas(euro/MWh)": 13.4,
                "kerosine(euro/MWh)": 50.8,
                "co2(euro/ton)": 20,
                "wind(%)": 60
            },
            "powerplants": [
                {"name": "gas", "type": "gasfired", "efficiency": 0.5, "pmin": 100, "pmax": 400},
                {"name": "wind", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 200}
            ]
        })
    }

    #[test]
    fn parses_complete_payload() {
        let request = LoadRequest::from_value(payload()).unwrap();
        assert_eq!(request.load, 480.0);
        assert_eq!(request.powerplants.len(), 2);
        assert_eq!(request.fuels.wind_pct, 60.0);
    }

    #[test]
    fn reports_every_missing_field() {
        let err = LoadRequest::from_value(json!({"fuels": {}})).unwrap_err();
        match err {
            RequestError::MissingFields(fields) => assert_eq!(fields, vec!["load", "powerplants"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn null_field_counts_as_missing() {
        let mut p = payload();
        p["load"] = Value::Null;
        assert!(matches!(
            LoadRequest::from_value(p),
            Err(RequestError::MissingFields(f)) if f == vec!["load"]
        ));
    }

    #[test]
    fn zero_load_is_present() {
        let mut p = payload();
        p["load"] = json!(0);
        assert!(LoadRequest::from_value(p).is_ok());
    }

    #[test]
    fn malformed_plant_is_not_a_missing_field() {
        let mut p = payload();
        p["powerplants"][0]["efficiency"] = Value::Null;
        assert!(matches!(
            LoadRequest::from_value(p),
            Err(RequestError::Malformed(_))
        ));
    }

    #[test]
    fn non_object_payload_reports_all_fields_missing() {
        let err = LoadRequest::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, RequestError::MissingFields(f) if f.len() == 3));
    }
}
