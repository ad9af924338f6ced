use crate::filter::name_contains;
use crate::models::DoctorRecord;

pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_SUGGESTIONS: usize = 3;

/// Up to [`MAX_SUGGESTIONS`] records whose name contains `partial_name`, in dataset order.
///
/// Inputs shorter than [`MIN_QUERY_CHARS`] characters produce no suggestions.
#[must_use]
pub fn suggest(dataset: &[DoctorRecord], partial_name: &str) -> Vec<DoctorRecord> {
    if !is_suggestible(partial_name) {
        return Vec::new();
    }
    let lowered = partial_name.to_lowercase();
    dataset
        .iter()
        .filter(|doctor| name_contains(doctor, &lowered))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[must_use]
pub fn is_suggestible(partial_name: &str) -> bool {
    partial_name.chars().count() >= MIN_QUERY_CHARS
}
