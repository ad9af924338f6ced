use std::collections::BTreeSet;

use tracing::debug;

use crate::autocomplete::suggest;
use crate::filter::apply;
use crate::history::History;
use crate::models::{ConsultationMode, DoctorRecord, FilterCriteria, SortKey};
use crate::render::{Renderer, ResultView};
use crate::store::DatasetStore;
use crate::url_state::QueryCodec;

/// Input the control surface reacts to, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The search box text changed; refreshes suggestions only.
    SearchInput(String),
    ControlChanged(ControlChange),
    EnterPressed,
    /// Index into the currently shown suggestions.
    SuggestionPicked(usize),
    /// Back/forward moved the history to another entry.
    NavigationPopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlChange {
    SpecialityToggled { label: String, checked: bool },
    ConsultationSelected(String),
    SortSelected(SortKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Rendered { count: usize },
    SuggestionsRefreshed { count: usize },
    /// The event referred to a control or suggestion that does not exist.
    Ignored,
    /// The session never loaded; nothing reacts any more.
    Inert,
}

/// Live widget state: what a user sees checked and typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    pub search_text: String,
    pub checked_specialities: BTreeSet<String>,
    pub consultation: ConsultationMode,
    pub sort: SortKey,
}

impl ControlState {
    /// The criteria these controls express. The search text is trimmed.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            name_query: self.search_text.trim().to_string(),
            selected_specialities: self.checked_specialities.clone(),
            consultation_mode: self.consultation.clone(),
            sort_key: self.sort,
        }
    }
}

/// Owns control state and routes events to the codec, the filter engine and the renderer.
#[derive(Debug, Clone)]
pub struct ControlSurface {
    codec: QueryCodec,
    controls: ControlState,
    criteria: FilterCriteria,
    suggestions: Vec<DoctorRecord>,
}

impl ControlSurface {
    #[must_use]
    pub fn new(codec: QueryCodec) -> Self {
        Self {
            codec,
            controls: ControlState::default(),
            criteria: FilterCriteria::default(),
            suggestions: Vec::new(),
        }
    }

    #[must_use]
    pub const fn controls(&self) -> &ControlState {
        &self.controls
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn codec(&self) -> &QueryCodec {
        &self.codec
    }

    /// Suggestions currently shown; the panel is hidden when this is empty.
    #[must_use]
    pub fn suggestions(&self) -> &[DoctorRecord] {
        &self.suggestions
    }

    /// Honors a deep-linked location before the first render.
    pub fn initialize(
        &mut self,
        store: &DatasetStore,
        history: &mut impl History,
        renderer: &mut impl Renderer,
    ) -> DispatchOutcome {
        self.restore_from_location(store, history, renderer)
    }

    pub fn dispatch(
        &mut self,
        event: ControlEvent,
        store: &DatasetStore,
        history: &mut impl History,
        renderer: &mut impl Renderer,
    ) -> DispatchOutcome {
        debug!(?event, "control event");
        match event {
            ControlEvent::SearchInput(text) => {
                self.suggestions = suggest(store.records(), &text);
                self.controls.search_text = text;
                DispatchOutcome::SuggestionsRefreshed {
                    count: self.suggestions.len(),
                }
            }
            ControlEvent::ControlChanged(change) => {
                if !self.apply_change(change, store) {
                    return DispatchOutcome::Ignored;
                }
                self.commit_controls(store, history, renderer)
            }
            ControlEvent::EnterPressed => self.commit_controls(store, history, renderer),
            ControlEvent::SuggestionPicked(index) => {
                let Some(picked) = self.suggestions.get(index) else {
                    return DispatchOutcome::Ignored;
                };
                self.controls.search_text = picked.name.clone();
                self.suggestions.clear();
                self.commit_controls(store, history, renderer)
            }
            ControlEvent::NavigationPopped => self.restore_from_location(store, history, renderer),
        }
    }

    fn apply_change(&mut self, change: ControlChange, store: &DatasetStore) -> bool {
        match change {
            ControlChange::SpecialityToggled { label, checked } => {
                if !store.has_speciality(&label) {
                    return false;
                }
                if checked {
                    self.controls.checked_specialities.insert(label);
                } else {
                    self.controls.checked_specialities.remove(&label);
                }
                true
            }
            ControlChange::ConsultationSelected(value) => {
                match self.codec.lookup_consultation(&value) {
                    Some(mode) => {
                        self.controls.consultation = mode;
                        true
                    }
                    None => false,
                }
            }
            ControlChange::SortSelected(sort) => {
                self.controls.sort = sort;
                true
            }
        }
    }

    /// User-driven path: controls → criteria → URL (replace) → filter → render.
    fn commit_controls(
        &mut self,
        store: &DatasetStore,
        history: &mut impl History,
        renderer: &mut impl Renderer,
    ) -> DispatchOutcome {
        self.criteria = self.controls.criteria();
        history.replace_location(self.codec.location_for(&self.criteria));
        self.render_current(store, renderer)
    }

    /// Navigation path: URL → controls → criteria → filter → render.
    ///
    /// The entry is rewritten in place only when it names values the controls
    /// cannot show, so the location always encodes the live criteria.
    fn restore_from_location(
        &mut self,
        store: &DatasetStore,
        history: &mut impl History,
        renderer: &mut impl Renderer,
    ) -> DispatchOutcome {
        let decoded = self.codec.decode_location(history.location());
        self.set_controls(self.codec.resolve(&decoded, store));
        self.suggestions.clear();
        self.criteria = self.controls.criteria();

        let canonical = self.codec.location_for(&self.criteria);
        if self.codec.decode_location(&canonical) != decoded {
            debug!(from = %history.location(), to = %canonical, "canonicalized location");
            history.replace_location(canonical);
        }
        self.render_current(store, renderer)
    }

    fn set_controls(&mut self, resolved: FilterCriteria) {
        self.controls = ControlState {
            search_text: resolved.name_query,
            checked_specialities: resolved.selected_specialities,
            consultation: resolved.consultation_mode,
            sort: resolved.sort_key,
        };
    }

    fn render_current(
        &self,
        store: &DatasetStore,
        renderer: &mut impl Renderer,
    ) -> DispatchOutcome {
        let results = apply(store.records(), &self.criteria);
        debug!(
            count = results.len(),
            total = store.len(),
            "recomputed directory view"
        );
        renderer.render(ResultView::Doctors(&results));
        DispatchOutcome::Rendered {
            count: results.len(),
        }
    }
}
