//! Structured record form of a version, as persisted in the version file.
//!
//! ```json
//! {
//!     "major": 1,
//!     "minor": 4,
//!     "patch": 0,
//!     "preRelease": "rc.1",
//!     "metaBuild": "5114f85"
//! }
//! ```
//!
//! `preRelease` and `metaBuild` are only written when set.

use crate::domain::SemVer;
use crate::error::{Result, VersionError};
use serde_json::{Map, Value};

const MAJOR: &str = "major";
const MINOR: &str = "minor";
const PATCH: &str = "patch";
const PRE_RELEASE: &str = "preRelease";
const META_BUILD: &str = "metaBuild";

impl SemVer {
    /// Project this version onto its record form
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert(MAJOR.to_string(), Value::from(self.major()));
        record.insert(MINOR.to_string(), Value::from(self.minor()));
        record.insert(PATCH.to_string(), Value::from(self.patch()));
        if let Some(pre_release) = self.pre_release() {
            record.insert(PRE_RELEASE.to_string(), Value::from(pre_release));
        }
        if let Some(build_metadata) = self.build_metadata() {
            record.insert(META_BUILD.to_string(), Value::from(build_metadata));
        }
        Value::Object(record)
    }

    /// Build a version from a decoded record.
    ///
    /// Numeric fields may be JSON integers or numeric strings. A `null`
    /// optional field is treated as absent.
    pub fn from_record(record: &Value) -> Result<Self> {
        let fields = record
            .as_object()
            .ok_or_else(|| VersionError::structure("expected an object"))?;

        Ok(SemVer::with_parts(
            numeric_field(fields, MAJOR)?,
            numeric_field(fields, MINOR)?,
            numeric_field(fields, PATCH)?,
            text_field(fields, PRE_RELEASE)?,
            text_field(fields, META_BUILD)?,
        ))
    }

    /// Decode JSON text and build a version from the resulting record
    pub fn from_json(json: &str) -> Result<Self> {
        let record: Value =
            serde_json::from_str(json).map_err(|e| VersionError::decode(e.to_string()))?;
        SemVer::from_record(&record)
    }
}

fn numeric_field(fields: &Map<String, Value>, name: &str) -> Result<u64> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(VersionError::structure(format!(
            "missing field '{}'",
            name
        ))),
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().and_then(integral))
            .ok_or_else(|| {
                VersionError::structure(format!("field '{}' is not a non-negative integer", name))
            }),
        Some(Value::String(s)) => {
            let text = s.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
                .ok_or_else(|| {
                    VersionError::structure(format!("field '{}' is not numeric: '{}'", name, s))
                })
        }
        Some(_) => Err(VersionError::structure(format!(
            "field '{}' is not numeric",
            name
        ))),
    }
}

/// Whole, non-negative floats such as `1.0` that fit in a `u64`
fn integral(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

fn text_field(fields: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(VersionError::structure(format!(
            "field '{}' is not a string",
            name
        ))),
    }
}
