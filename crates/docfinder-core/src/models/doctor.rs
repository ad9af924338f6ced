use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const GENERAL_PHYSICIAN: &str = "General Physician";

/// One directory entry as served by the data provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DoctorRecord {
    pub name: String,
    /// Comma-separated specialty tags.
    #[serde(default, deserialize_with = "lenient_text")]
    pub speciality: Option<String>,
    #[serde(default, alias = "consultationMode", deserialize_with = "lenient_text")]
    pub consultation_mode: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub experience: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub heads: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub clinic: Option<String>,
}

impl DoctorRecord {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            speciality: None,
            consultation_mode: None,
            fee: None,
            experience: None,
            heads: None,
            clinic: None,
        }
    }

    /// Trimmed, non-empty tokens of the `speciality` field.
    pub fn speciality_tokens(&self) -> impl Iterator<Item = &str> {
        self.speciality
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn has_any_speciality(&self, selected: &BTreeSet<String>) -> bool {
        self.speciality_tokens().any(|token| selected.contains(token))
    }

    #[must_use]
    pub fn fee_or_zero(&self) -> f64 {
        self.fee.unwrap_or(0.0)
    }

    #[must_use]
    pub fn experience_or_zero(&self) -> f64 {
        self.experience.unwrap_or(0.0)
    }

    #[must_use]
    pub fn display_speciality(&self) -> &str {
        match self.speciality.as_deref() {
            Some(value) if !value.trim().is_empty() => value,
            _ => GENERAL_PHYSICIAN,
        }
    }

    #[must_use]
    pub fn display_experience(&self) -> String {
        self.experience
            .map_or_else(|| "N/A".to_string(), |years| years.to_string())
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_number_value))
}

fn parse_number_value(value: &Value) -> Option<f64> {
    if let Some(raw) = value.as_f64() {
        return raw.is_finite().then_some(raw);
    }
    value
        .as_str()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|raw| raw.is_finite())
}
