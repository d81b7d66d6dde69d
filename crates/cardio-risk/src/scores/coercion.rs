use tracing::warn;

use super::catalog::CodedOption;
use super::domain::{ClinicalInput, FieldValue, InputPolicy, ScoreError, ScoreId};

const TRUE_WORDS: &[&str] = &["true", "yes", "y", "si", "sí", "on"];
const FALSE_WORDS: &[&str] = &["false", "no", "n", "off"];

/// Typed view over a [`ClinicalInput`] that applies field defaults.
///
/// Missing values never fail. A value of the wrong kind is treated as
/// missing; malformed numbers and unknown codes are rejected or defaulted
/// according to the [`InputPolicy`].
pub struct FieldReader<'a> {
    input: &'a ClinicalInput,
    policy: InputPolicy,
    score: ScoreId,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(input: &'a ClinicalInput, policy: InputPolicy, score: ScoreId) -> Self {
        Self {
            input,
            policy,
            score,
        }
    }

    /// Boolean field, `false` when absent or unrecognised.
    ///
    /// Numbers, including numeric text, count as present when their whole
    /// part is non-zero.
    pub fn flag(&self, name: &'static str) -> bool {
        match self.input.get(name) {
            None | Some(FieldValue::Other(_)) => false,
            Some(FieldValue::Boolean(value)) => *value,
            Some(FieldValue::Integer(value)) => *value != 0,
            Some(FieldValue::Decimal(value)) => whole_number(*value).is_some_and(|n| n != 0),
            Some(FieldValue::Text(raw)) => {
                let normalized = raw.trim().to_lowercase();
                if normalized.is_empty() || FALSE_WORDS.contains(&normalized.as_str()) {
                    false
                } else if TRUE_WORDS.contains(&normalized.as_str()) {
                    true
                } else if let Some(number) = parse_number(&normalized) {
                    number != 0
                } else {
                    warn!(score = %self.score, field = name, value = %raw, "unrecognised boolean, using false");
                    false
                }
            }
        }
    }

    /// Integer field, `0` when absent or blank. Decimals are truncated.
    pub fn integer(&self, name: &'static str) -> Result<i64, ScoreError> {
        match self.input.get(name) {
            None | Some(FieldValue::Boolean(_)) | Some(FieldValue::Other(_)) => Ok(0),
            Some(FieldValue::Integer(value)) => Ok(*value),
            Some(FieldValue::Decimal(value)) => match whole_number(*value) {
                Some(number) => Ok(number),
                None => self.reject_number(name, value.to_string()),
            },
            Some(FieldValue::Text(raw)) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                match parse_number(trimmed) {
                    Some(value) => Ok(value),
                    None => self.reject_number(name, raw.clone()),
                }
            }
        }
    }

    /// Enumeration field, `T::DEFAULT` when absent or blank.
    pub fn option<T: CodedOption>(&self, name: &'static str) -> Result<T, ScoreError> {
        let raw = match self.input.get(name) {
            Some(FieldValue::Text(raw)) => raw,
            _ => return Ok(T::DEFAULT),
        };

        if raw.trim().is_empty() {
            return Ok(T::DEFAULT);
        }

        match T::from_code(raw) {
            Some(option) => Ok(option),
            None => match self.policy {
                InputPolicy::Strict => Err(ScoreError::UnknownCode {
                    field: name,
                    code: raw.clone(),
                    allowed: T::ALL.iter().map(|option| option.code()).collect(),
                }),
                InputPolicy::Lenient => {
                    warn!(score = %self.score, field = name, code = %raw, "unknown code, using default");
                    Ok(T::DEFAULT)
                }
            },
        }
    }

    fn reject_number(&self, name: &'static str, value: String) -> Result<i64, ScoreError> {
        match self.policy {
            InputPolicy::Strict => Err(ScoreError::InvalidNumber { field: name, value }),
            InputPolicy::Lenient => {
                warn!(score = %self.score, field = name, value = %value, "unparseable number, using 0");
                Ok(0)
            }
        }
    }
}

/// Truncates a finite decimal; `None` for NaN and infinities.
fn whole_number(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

fn parse_number(raw: &str) -> Option<i64> {
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().and_then(whole_number))
}
