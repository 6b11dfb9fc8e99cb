//! Response Normalizer — coerces free-text model output into a `SkillMatchResult`.
//!
//! Parsing is two-stage and the order is fixed:
//! 1. strict: the whole completion must be a JSON object
//! 2. fallback: the slice from the first `{` to the last `}` must be a JSON object
//!
//! Validation then checks the four required keys and the shape of each value.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::analysis::models::SkillMatchResult;
use crate::llm_client::LlmError;

pub const MATCHED_SKILLS: &str = "matched_skills";
pub const MISSING_SKILLS: &str = "missing_skills";
pub const ADDITIONAL_SKILLS: &str = "additional_skills";
pub const MATCH_PERCENTAGE: &str = "match_percentage";

/// Keys every completion must carry, in canonical order.
pub const REQUIRED_KEYS: [&str; 4] = [
    MATCHED_SKILLS,
    MISSING_SKILLS,
    ADDITIONAL_SKILLS,
    MATCH_PERCENTAGE,
];

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Could not find valid JSON in model response")]
    MalformedResponse { raw: String },

    #[error("Model response is missing required key(s): {}", .missing.join(", "))]
    SchemaViolation {
        missing: Vec<&'static str>,
        raw: String,
    },

    #[error("Field '{field}' has an unusable value: {value}")]
    TypeCoercion {
        field: &'static str,
        value: String,
        raw: String,
    },

    #[error("Completion service error: {0}")]
    Upstream(#[from] LlmError),
}

impl AnalysisError {
    /// The offending model output, when the failure came from normalization.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AnalysisError::MalformedResponse { raw }
            | AnalysisError::SchemaViolation { raw, .. }
            | AnalysisError::TypeCoercion { raw, .. } => Some(raw),
            AnalysisError::Upstream(_) => None,
        }
    }
}

/// Normalizes a raw completion into a typed result.
pub fn normalize(raw: &str) -> Result<SkillMatchResult, AnalysisError> {
    let object = extract_object(raw).ok_or_else(|| AnalysisError::MalformedResponse {
        raw: raw.to_string(),
    })?;

    let missing: Vec<&'static str> = REQUIRED_KEYS
        .into_iter()
        .filter(|key| !object.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(AnalysisError::SchemaViolation {
            missing,
            raw: raw.to_string(),
        });
    }

    Ok(SkillMatchResult::new(
        skill_list(MATCHED_SKILLS, &object[MATCHED_SKILLS], raw)?,
        skill_list(MISSING_SKILLS, &object[MISSING_SKILLS], raw)?,
        skill_list(ADDITIONAL_SKILLS, &object[ADDITIONAL_SKILLS], raw)?,
        percentage(&object[MATCH_PERCENTAGE], raw)?,
    ))
}

/// Strict parse first, bracket slice second. Only JSON objects qualify.
fn extract_object(raw: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(raw) {
        return Some(object);
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if start >= end {
        return None;
    }

    match serde_json::from_str::<Value>(&raw[start..=end]) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

fn skill_list(field: &'static str, value: &Value, raw: &str) -> Result<Vec<String>, AnalysisError> {
    let coercion_error = || AnalysisError::TypeCoercion {
        field,
        value: value.to_string(),
        raw: raw.to_string(),
    };

    value
        .as_array()
        .ok_or_else(coercion_error)?
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(coercion_error))
        .collect()
}

/// Numbers pass through; numeric strings are trimmed and parsed. Non-finite values are rejected.
fn percentage(value: &Value, raw: &str) -> Result<f64, AnalysisError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|p| p.is_finite())
        .ok_or_else(|| AnalysisError::TypeCoercion {
            field: MATCH_PERCENTAGE,
            value: value.to_string(),
            raw: raw.to_string(),
        })
}
