use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DocFinderError, Result};

pub const ALL_CONSULTATION_MODES: &str = "All";

/// Consultation radio selection. `All` disables the consultation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum ConsultationMode {
    #[default]
    All,
    Mode(String),
}

impl ConsultationMode {
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CONSULTATION_MODES {
            Self::All
        } else {
            Self::Mode(value.to_string())
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CONSULTATION_MODES,
            Self::Mode(value) => value,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<ConsultationMode> for String {
    fn from(value: ConsultationMode) -> Self {
        value.as_str().to_string()
    }
}

impl Display for ConsultationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    None,
    Fees,
    Experience,
}

impl SortKey {
    /// Value carried by the `sort` query key; `None` is never written.
    #[must_use]
    pub const fn query_value(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Fees => Some("fees"),
            Self::Experience => Some("experience"),
        }
    }

    #[must_use]
    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "fees" => Some(Self::Fees),
            "experience" => Some(Self::Experience),
            _ => None,
        }
    }
}

impl FromStr for SortKey {
    type Err = DocFinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            other => Self::from_query_value(other).ok_or_else(|| {
                DocFinderError::Validation(format!(
                    "unknown sort key: {s} (expected none|fees|experience)"
                ))
            }),
        }
    }
}

/// The complete filter/sort state of the directory view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub name_query: String,
    pub selected_specialities: BTreeSet<String>,
    pub consultation_mode: ConsultationMode,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name_query = name.into();
        self
    }

    #[must_use]
    pub fn with_speciality(mut self, speciality: impl Into<String>) -> Self {
        self.selected_specialities.insert(speciality.into());
        self
    }

    #[must_use]
    pub fn with_consultation(mut self, mode: ConsultationMode) -> Self {
        self.consultation_mode = mode;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}
