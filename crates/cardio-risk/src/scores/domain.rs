use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a bundled risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreId {
    #[serde(rename = "cha2ds2_vasc")]
    Cha2ds2Vasc,
    #[serde(rename = "has_bled")]
    HasBled,
    #[serde(rename = "timi")]
    Timi,
    #[serde(rename = "heart")]
    Heart,
}

impl ScoreId {
    /// Catalog order.
    pub const ALL: [ScoreId; 4] = [
        ScoreId::Cha2ds2Vasc,
        ScoreId::HasBled,
        ScoreId::Timi,
        ScoreId::Heart,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreId::Cha2ds2Vasc => "cha2ds2_vasc",
            ScoreId::HasBled => "has_bled",
            ScoreId::Timi => "timi",
            ScoreId::Heart => "heart",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ScoreId::Cha2ds2Vasc => 0,
            ScoreId::HasBled => 1,
            ScoreId::Timi => 2,
            ScoreId::Heart => 3,
        }
    }
}

impl fmt::Display for ScoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreId {
    type Err = ScoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                '₂' => '2',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "cha2ds2_vasc" | "cha2ds2vasc" => Ok(ScoreId::Cha2ds2Vasc),
            "has_bled" | "hasbled" => Ok(ScoreId::HasBled),
            "timi" | "timi_ua_nstemi" => Ok(ScoreId::Timi),
            "heart" => Ok(ScoreId::Heart),
            _ => Err(ScoreError::UnknownScore {
                id: raw.to_string(),
            }),
        }
    }
}

/// How malformed field values are treated during coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Unparseable numbers and unknown codes are rejected.
    #[default]
    Strict,
    /// Unparseable numbers and unknown codes fall back to the field default.
    Lenient,
}

impl InputPolicy {
    pub fn label(self) -> &'static str {
        match self {
            InputPolicy::Strict => "strict",
            InputPolicy::Lenient => "lenient",
        }
    }
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(InputPolicy::Strict),
            "lenient" => Ok(InputPolicy::Lenient),
            other => Err(format!("unknown input policy '{other}'")),
        }
    }
}

/// Raw value supplied for a single clinical field.
///
/// Enumeration codes travel as [`FieldValue::Text`]; text is also how CLI and
/// form inputs arrive before coercion. Arrays and objects land in
/// [`FieldValue::Other`] and read as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Field values collected for one scoring request.
///
/// Built once and never mutated by the engine. Absent fields take their
/// declared default during evaluation; JSON `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClinicalInput {
    values: BTreeMap<String, FieldValue>,
}

impl ClinicalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any previous value for `name`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ClinicalInput
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ClinicalInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<FieldValue>>::deserialize(deserializer)?;
        Ok(Self {
            values: raw
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value)))
                .collect(),
        })
    }
}

/// Named risk category selected by thresholding the point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Intermediate,
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Intermediate => "intermediate",
            RiskTier::High => "high",
        }
    }
}

/// Points contributed by one field, kept for transparent display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub field: &'static str,
    pub points: u8,
    pub notes: String,
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: ScoreId,
    pub points: u8,
    pub max_points: u8,
    pub tier: RiskTier,
    pub interpretation: String,
    pub components: Vec<ScoreComponent>,
}

/// Failures surfaced by a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("unknown score '{id}' (known scores: cha2ds2_vasc, has_bled, timi, heart)")]
    UnknownScore { id: String },
    #[error("field '{field}' expects an integer, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("field '{field}' does not accept code '{code}' (allowed: {})", allowed.join(", "))]
    UnknownCode {
        field: &'static str,
        code: String,
        allowed: Vec<&'static str>,
    },
}

impl ScoreError {
    /// True when the caller supplied a bad field value rather than a bad score id.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ScoreError::InvalidNumber { .. } | ScoreError::UnknownCode { .. }
        )
    }
}
