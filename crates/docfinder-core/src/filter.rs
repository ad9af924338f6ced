use crate::models::{ConsultationMode, DoctorRecord, FilterCriteria, SortKey};

/// Runs name, specialty and consultation stages, then sorts. `dataset` is left untouched.
#[must_use]
pub fn apply(dataset: &[DoctorRecord], criteria: &FilterCriteria) -> Vec<DoctorRecord> {
    let name_query = criteria.name_query.trim().to_lowercase();
    let mut out = dataset
        .iter()
        .filter(|doctor| matches_name(doctor, &name_query))
        .filter(|doctor| matches_specialities(doctor, criteria))
        .filter(|doctor| matches_consultation(doctor, &criteria.consultation_mode))
        .cloned()
        .collect::<Vec<_>>();
    sort_doctors(&mut out, criteria.sort_key);
    out
}

/// Stable sort; equal keys keep their incoming order.
pub fn sort_doctors(doctors: &mut [DoctorRecord], sort_key: SortKey) {
    match sort_key {
        SortKey::None => {}
        SortKey::Fees => doctors.sort_by(|a, b| a.fee_or_zero().total_cmp(&b.fee_or_zero())),
        SortKey::Experience => doctors.sort_by(|a, b| {
            b.experience_or_zero()
                .total_cmp(&a.experience_or_zero())
        }),
    }
}

pub(crate) fn name_contains(doctor: &DoctorRecord, lowered_query: &str) -> bool {
    doctor.name.to_lowercase().contains(lowered_query)
}

fn matches_name(doctor: &DoctorRecord, lowered_query: &str) -> bool {
    lowered_query.is_empty() || name_contains(doctor, lowered_query)
}

fn matches_specialities(doctor: &DoctorRecord, criteria: &FilterCriteria) -> bool {
    criteria.selected_specialities.is_empty()
        || doctor.has_any_speciality(&criteria.selected_specialities)
}

fn matches_consultation(doctor: &DoctorRecord, mode: &ConsultationMode) -> bool {
    match mode {
        ConsultationMode::All => true,
        ConsultationMode::Mode(wanted) => doctor.consultation_mode.as_deref() == Some(wanted),
    }
}
