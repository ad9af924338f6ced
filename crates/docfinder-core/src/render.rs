use serde::Serialize;

use crate::error::DocFinderError;
use crate::models::{DoctorCard, DoctorRecord, SpecialityOption};

pub const NO_RESULTS_MESSAGE: &str = "No doctors found matching your criteria.";
pub const LOAD_FAILED_MESSAGE: &str = "Error loading doctor data. Please try again later.";

/// Why the session never got a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadFailure {
    pub source: String,
    pub code: String,
    pub reason: String,
}

impl LoadFailure {
    #[must_use]
    pub fn from_error(source: impl Into<String>, err: &DocFinderError) -> Self {
        Self {
            source: source.into(),
            code: err.code().to_string(),
            reason: err.to_string(),
        }
    }
}

/// What the renderer is asked to show after a recomputation.
#[derive(Debug, Clone, Copy)]
pub enum ResultView<'a> {
    Doctors(&'a [DoctorRecord]),
    LoadFailed(&'a LoadFailure),
}

impl ResultView<'_> {
    /// The status line to show instead of cards, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Doctors(doctors) if doctors.is_empty() => Some(NO_RESULTS_MESSAGE),
            Self::Doctors(_) => None,
            Self::LoadFailed(_) => Some(LOAD_FAILED_MESSAGE),
        }
    }

    #[must_use]
    pub fn cards(&self) -> Vec<DoctorCard> {
        match self {
            Self::Doctors(doctors) => doctors.iter().map(DoctorCard::from).collect(),
            Self::LoadFailed(_) => Vec::new(),
        }
    }
}

pub trait Renderer {
    fn render(&mut self, view: ResultView<'_>);
}

/// Receives the specialty checkboxes to build, once, right after load.
pub trait FilterOptionsSink {
    fn show_options(&mut self, options: &[SpecialityOption]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_and_load_failure_have_distinct_messages() {
        let empty: Vec<DoctorRecord> = Vec::new();
        let failure = LoadFailure::from_error(
            "https://example.test",
            &DocFinderError::HttpStatus {
                url: "https://example.test".to_string(),
                status: 500,
            },
        );
        assert_eq!(ResultView::Doctors(&empty).message(), Some(NO_RESULTS_MESSAGE));
        assert_eq!(
            ResultView::LoadFailed(&failure).message(),
            Some(LOAD_FAILED_MESSAGE)
        );
        assert_eq!(failure.code, "HTTP_STATUS");
    }

    #[test]
    fn non_empty_results_render_cards_without_message() {
        let doctors = vec![DoctorRecord::named("Dr. A")];
        let view = ResultView::Doctors(&doctors);
        assert_eq!(view.message(), None);
        assert_eq!(view.cards()[0].name, "Dr. A");
    }
}
