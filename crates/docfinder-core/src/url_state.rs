use reqwest::Url;

use crate::config::ControlConfig;
use crate::models::{ConsultationMode, FilterCriteria, SortKey};
use crate::store::DatasetStore;

pub const NAME_KEY: &str = "name";
pub const SPECIALITY_KEY: &str = "speciality";
pub const CONSULTATION_KEY: &str = "consultation";
pub const SORT_KEY: &str = "sort";

/// Maps [`FilterCriteria`] to and from the page's query string.
///
/// Encoding is canonical: keys are always written in the order
/// `name`, `speciality`*, `consultation`, `sort`, and defaults are omitted.
/// Decoding never fails; values without a matching control fall back to the
/// default for that criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCodec {
    consultation_modes: Vec<String>,
    base: Url,
}

impl QueryCodec {
    #[must_use]
    pub fn new(consultation_modes: Vec<String>, base: Url) -> Self {
        Self {
            consultation_modes,
            base,
        }
    }

    #[must_use]
    pub fn from_config(config: &ControlConfig) -> Self {
        Self::new(config.consultation_modes.clone(), config.page_url.clone())
    }

    #[must_use]
    pub fn consultation_modes(&self) -> &[String] {
        &self.consultation_modes
    }

    /// Finds the consultation radio for `value`, `None` when the page has no such option.
    #[must_use]
    pub fn lookup_consultation(&self, value: &str) -> Option<ConsultationMode> {
        if value == ConsultationMode::All.as_str() {
            return Some(ConsultationMode::All);
        }
        self.consultation_modes
            .iter()
            .find(|mode| mode.as_str() == value)
            .map(|mode| ConsultationMode::Mode(mode.clone()))
    }

    #[must_use]
    pub fn encode(&self, criteria: &FilterCriteria) -> String {
        self.location_for(criteria)
            .query()
            .unwrap_or_default()
            .to_string()
    }

    /// The page location carrying `criteria`; no `?` at all when every criterion is default.
    #[must_use]
    pub fn location_for(&self, criteria: &FilterCriteria) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);

        let pairs = canonical_pairs(criteria);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    #[must_use]
    pub fn decode(&self, query: &str) -> FilterCriteria {
        let mut url = self.base.clone();
        let raw = query.strip_prefix('?').unwrap_or(query);
        url.set_query(if raw.is_empty() { None } else { Some(raw) });

        let mut criteria = FilterCriteria::default();
        let mut name = None;
        let mut consultation = None;
        let mut sort = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                NAME_KEY if name.is_none() => name = Some(value.into_owned()),
                SPECIALITY_KEY if !value.is_empty() => {
                    criteria.selected_specialities.insert(value.into_owned());
                }
                CONSULTATION_KEY if consultation.is_none() => {
                    consultation = Some(value.into_owned());
                }
                SORT_KEY if sort.is_none() => sort = Some(value.into_owned()),
                _ => {}
            }
        }

        criteria.name_query = name.unwrap_or_default();
        criteria.consultation_mode = consultation
            .as_deref()
            .and_then(|value| self.lookup_consultation(value))
            .unwrap_or_default();
        criteria.sort_key = sort
            .as_deref()
            .and_then(SortKey::from_query_value)
            .unwrap_or_default();
        criteria
    }

    /// Narrows `criteria` to what the page can show: specialties without a checkbox
    /// are dropped, an unknown consultation mode becomes `All`, and the name is trimmed.
    #[must_use]
    pub fn resolve(&self, criteria: &FilterCriteria, store: &DatasetStore) -> FilterCriteria {
        FilterCriteria {
            name_query: criteria.name_query.trim().to_string(),
            selected_specialities: criteria
                .selected_specialities
                .iter()
                .filter(|label| store.has_speciality(label))
                .cloned()
                .collect(),
            consultation_mode: self
                .lookup_consultation(criteria.consultation_mode.as_str())
                .unwrap_or_default(),
            sort_key: criteria.sort_key,
        }
    }

    /// Decodes the query of a full location such as the current page URL.
    #[must_use]
    pub fn decode_location(&self, location: &Url) -> FilterCriteria {
        self.decode(location.query().unwrap_or_default())
    }
}

fn canonical_pairs(criteria: &FilterCriteria) -> Vec<(&'static str, &str)> {
    let mut pairs = Vec::new();
    if !criteria.name_query.is_empty() {
        pairs.push((NAME_KEY, criteria.name_query.as_str()));
    }
    for speciality in &criteria.selected_specialities {
        pairs.push((SPECIALITY_KEY, speciality.as_str()));
    }
    if !criteria.consultation_mode.is_all() {
        pairs.push((CONSULTATION_KEY, criteria.consultation_mode.as_str()));
    }
    if let Some(sort) = criteria.sort_key.query_value() {
        pairs.push((SORT_KEY, sort));
    }
    pairs
}
