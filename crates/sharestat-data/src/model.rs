//! Document shapes exchanged with EDGAR and the local snapshot file.
//!
//! The company-concept endpoint returns
//! `{ cik, taxonomy, tag, label, description, entityName, units: { shares: [...] } }`.
//! Every field is treated as optional: a document without `units.shares`, or
//! with something other than an array there, simply has no observations.
//!
//! The snapshot file holds an already aggregated [`EntitySummary`]:
//! `{ entityName, max: { val, fy }, min: { val, fy } }`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Display name used when a document carries no entity name.
pub const UNKNOWN_ENTITY: &str = "Unknown Entity";

/// Raw company-concept response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDocument {
    /// Central Index Key as reported by the API (usually a number)
    #[serde(default)]
    pub cik: Option<Value>,

    /// Taxonomy of the concept (e.g. "dei")
    #[serde(default)]
    pub taxonomy: Option<String>,

    /// Concept tag (e.g. "EntityCommonStockSharesOutstanding")
    #[serde(default)]
    pub tag: Option<String>,

    /// Human readable label of the concept
    #[serde(default)]
    pub label: Option<String>,

    /// Concept description
    #[serde(default)]
    pub description: Option<String>,

    /// Reporting entity name
    #[serde(default)]
    pub entity_name: Option<Value>,

    /// Facts keyed by unit of measure, kept untyped
    #[serde(default)]
    pub units: Option<Value>,
}

impl ConceptDocument {
    /// Builds a document from arbitrary JSON, keeping whatever fields have
    /// the expected type and dropping the rest.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            cik: value.get("cik").cloned(),
            taxonomy: text("taxonomy"),
            tag: text("tag"),
            label: text("label"),
            description: text("description"),
            entity_name: value.get("entityName").cloned(),
            units: value.get("units").cloned(),
        }
    }

    /// Entity name, if present as a non-empty string.
    pub fn entity_name(&self) -> Option<&str> {
        match self.entity_name.as_ref()? {
            Value::String(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    /// Entity name, or [`UNKNOWN_ENTITY`] when absent.
    pub fn entity_name_or_default(&self) -> &str {
        self.entity_name().unwrap_or(UNKNOWN_ENTITY)
    }

    /// Observations reported in the `shares` unit, in document order.
    ///
    /// Entries that are not JSON objects carry no fields and come back as
    /// empty observations.
    pub fn shares(&self) -> Vec<RawObservation> {
        let Some(Value::Array(entries)) = self.units.as_ref().and_then(|units| units.get("shares"))
        else {
            return Vec::new();
        };

        entries
            .iter()
            .map(|entry| {
                if entry.is_object() {
                    RawObservation::deserialize(entry).unwrap_or_default()
                } else {
                    RawObservation::default()
                }
            })
            .collect()
    }
}

/// A single `{fy, val}` entry of the shares series, as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Fiscal year, string or number
    #[serde(default)]
    pub fy: Option<Value>,

    /// Reported value
    #[serde(default)]
    pub val: Option<Value>,
}

impl RawObservation {
    /// String form of the fiscal year.
    ///
    /// `None` when the year is missing or falsy: null, an empty string, zero,
    /// or a value that is neither a string nor a number. Integral numbers are
    /// printed without a fraction, so `2021` and `2021.0` both give `"2021"`.
    pub fn fiscal_year_label(&self) -> Option<String> {
        match self.fy.as_ref()? {
            Value::String(label) if !label.is_empty() => Some(label.clone()),
            Value::Number(number) => number_label(number),
            _ => None,
        }
    }

    /// Value as a finite, non-zero number.
    ///
    /// Strings are never coerced.
    pub fn value(&self) -> Option<f64> {
        self.val
            .as_ref()?
            .as_f64()
            .filter(|val| *val != 0.0 && val.is_finite())
    }
}

fn number_label(number: &Number) -> Option<String> {
    let float = number.as_f64()?;
    (float != 0.0 && float.is_finite()).then(|| number_text(number))
}

/// Text of a JSON number, without a fraction when it is integral.
fn number_text(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    number
        .as_f64()
        .map_or_else(|| number.to_string(), |float| float.to_string())
}

/// One selected observation: its value and fiscal year label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// Observed value
    pub val: f64,

    /// Fiscal year label
    #[serde(deserialize_with = "de_year_label")]
    pub fy: String,
}

impl Extremum {
    /// Create a new extremum.
    pub fn new(val: f64, fy: impl Into<String>) -> Self {
        Self { val, fy: fy.into() }
    }
}

/// Entity name plus the largest and smallest selected observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    /// Reporting entity name; required, may be empty
    pub entity_name: String,

    /// Largest value
    #[serde(default)]
    pub max: Option<Extremum>,

    /// Smallest value
    #[serde(default)]
    pub min: Option<Extremum>,
}

impl EntitySummary {
    /// Create a summary with both extrema present.
    pub fn new(entity_name: impl Into<String>, max: Extremum, min: Extremum) -> Self {
        Self {
            entity_name: entity_name.into(),
            max: Some(max),
            min: Some(min),
        }
    }
}

fn de_year_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(label) => Ok(label),
        Value::Number(number) => Ok(number_text(&number)),
        other => Err(serde::de::Error::custom(format!(
            "fiscal year must be a string or number, got {other}"
        ))),
    }
}
