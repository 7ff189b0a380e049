use std::io::Read;

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;

/// One location fix as exported by the Festina app.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationSample {
    #[serde(rename = "timestamp", deserialize_with = "timestamp_ms")]
    pub timestamp_ms: i64,
    #[serde(rename = "long", deserialize_with = "number")]
    pub longitude: f64,
    #[serde(rename = "lat", deserialize_with = "number")]
    pub latitude: f64,
    #[serde(deserialize_with = "number")]
    pub altitude: f64,
    #[serde(deserialize_with = "number")]
    pub accuracy: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeartrateSample {
    #[serde(rename = "timestamp", deserialize_with = "timestamp_ms")]
    pub timestamp_ms: i64,
    #[serde(deserialize_with = "beats_per_minute")]
    pub heartrate: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestinaExport {
    pub location_data: Vec<LocationSample>,
    pub heartrate_data: Vec<HeartrateSample>,
}

impl FestinaExport {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let export: FestinaExport = serde_json::from_str(json)?;
        export.log_summary();
        Ok(export)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let export: FestinaExport = serde_json::from_reader(reader)?;
        export.log_summary();
        Ok(export)
    }

    fn log_summary(&self) {
        info!(
            "loaded festina export: {} location samples, {} heart rate samples",
            self.location_data.len(),
            self.heartrate_data.len()
        );
    }
}

// The app is not consistent about quoting numbers, so every numeric field
// takes either a JSON number or a string holding one.

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn integral_f64(v: f64) -> Option<i64> {
    // 2^63 is exactly representable, anything at or beyond it does not fit.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if v.is_finite() && v.fract() == 0.0 && (-LIMIT..LIMIT).contains(&v) {
        Some(v as i64)
    } else {
        None
    }
}

fn integral(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
        }
        _ => None,
    }
}

fn timestamp_ms<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    integral(&value).ok_or_else(|| {
        D::Error::invalid_value(unexpected(&value), &"an epoch timestamp in milliseconds")
    })
}

fn beats_per_minute<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    integral(&value)
        .and_then(|bpm| u32::try_from(bpm).ok())
        .ok_or_else(|| D::Error::invalid_value(unexpected(&value), &"a heart rate in bpm"))
}

fn number<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    };
    parsed.ok_or_else(|| D::Error::invalid_value(unexpected(&value), &"a number"))
}
