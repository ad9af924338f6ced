use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{DoctorRecord, SpecialityOption};

/// The session's doctor list. Built once from a successful load and never mutated.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    records: Arc<[DoctorRecord]>,
    specialities: Arc<[String]>,
    loaded_at: DateTime<Utc>,
}

impl DatasetStore {
    #[must_use]
    pub fn new(records: Vec<DoctorRecord>) -> Self {
        let specialities = collect_specialities(&records);
        Self {
            records: records.into(),
            specialities: specialities.into(),
            loaded_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[DoctorRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique specialty labels across all records, sorted.
    #[must_use]
    pub fn specialities(&self) -> &[String] {
        &self.specialities
    }

    #[must_use]
    pub fn has_speciality(&self, label: &str) -> bool {
        self.specialities
            .binary_search_by(|known| known.as_str().cmp(label))
            .is_ok()
    }

    #[must_use]
    pub fn speciality_options(&self) -> Vec<SpecialityOption> {
        self.specialities
            .iter()
            .map(|label| SpecialityOption::from_label(label))
            .collect()
    }

    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn collect_specialities(records: &[DoctorRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(DoctorRecord::speciality_tokens)
        .map(ToString::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
