use tracing::{info, warn};

use crate::control::{ControlEvent, ControlState, ControlSurface, DispatchOutcome};
use crate::history::{History, SessionHistory};
use crate::models::{DoctorRecord, FilterCriteria};
use crate::provider::DoctorProvider;
use crate::render::{FilterOptionsSink, LoadFailure, Renderer, ResultView};
use crate::store::DatasetStore;
use crate::url_state::QueryCodec;

#[derive(Debug)]
enum SessionState {
    Ready {
        store: DatasetStore,
        surface: ControlSurface,
    },
    Failed(LoadFailure),
}

/// One page session: a single load followed by serialized control events.
#[derive(Debug)]
pub struct DirectorySession<H, R> {
    state: SessionState,
    history: H,
    renderer: R,
}

impl<H: History, R: Renderer> DirectorySession<H, R> {
    /// Fetches the dataset once. A failed fetch leaves the session inert for good.
    pub fn start(
        provider: &dyn DoctorProvider,
        codec: QueryCodec,
        mut history: H,
        mut renderer: R,
        options: &mut impl FilterOptionsSink,
    ) -> Self {
        let source = provider.describe();
        let records = match provider.fetch() {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    source = %source,
                    code = err.code(),
                    error = %err,
                    "doctor list load failed"
                );
                let failure = LoadFailure::from_error(source, &err);
                renderer.render(ResultView::LoadFailed(&failure));
                return Self {
                    state: SessionState::Failed(failure),
                    history,
                    renderer,
                };
            }
        };

        let store = DatasetStore::new(records);
        info!(
            source = %source,
            records = store.len(),
            specialities = store.specialities().len(),
            loaded_at = %store.loaded_at(),
            "doctor list loaded"
        );
        options.show_options(&store.speciality_options());

        let mut surface = ControlSurface::new(codec);
        surface.initialize(&store, &mut history, &mut renderer);
        Self {
            state: SessionState::Ready { store, surface },
            history,
            renderer,
        }
    }

    pub fn dispatch(&mut self, event: ControlEvent) -> DispatchOutcome {
        match &mut self.state {
            SessionState::Ready { store, surface } => {
                surface.dispatch(event, store, &mut self.history, &mut self.renderer)
            }
            SessionState::Failed(_) => DispatchOutcome::Inert,
        }
    }

    #[must_use]
    pub fn store(&self) -> Option<&DatasetStore> {
        match &self.state {
            SessionState::Ready { store, .. } => Some(store),
            SessionState::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn load_failure(&self) -> Option<&LoadFailure> {
        match &self.state {
            SessionState::Failed(failure) => Some(failure),
            SessionState::Ready { .. } => None,
        }
    }

    #[must_use]
    pub fn criteria(&self) -> Option<&FilterCriteria> {
        match &self.state {
            SessionState::Ready { surface, .. } => Some(surface.criteria()),
            SessionState::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn controls(&self) -> Option<&ControlState> {
        match &self.state {
            SessionState::Ready { surface, .. } => Some(surface.controls()),
            SessionState::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn suggestions(&self) -> &[DoctorRecord] {
        match &self.state {
            SessionState::Ready { surface, .. } => surface.suggestions(),
            SessionState::Failed(_) => &[],
        }
    }

    #[must_use]
    pub const fn history(&self) -> &H {
        &self.history
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<R: Renderer> DirectorySession<SessionHistory, R> {
    /// Moves one entry back and replays the resulting popstate, if any.
    pub fn go_back(&mut self) -> DispatchOutcome {
        if !self.history.back() {
            return DispatchOutcome::Ignored;
        }
        self.dispatch(ControlEvent::NavigationPopped)
    }

    pub fn go_forward(&mut self) -> DispatchOutcome {
        if !self.history.forward() {
            return DispatchOutcome::Ignored;
        }
        self.dispatch(ControlEvent::NavigationPopped)
    }

    /// Follows a deep link within the page: adds a history entry carrying the
    /// resolved form of `query`.
    pub fn open_query(&mut self, query: &str) -> DispatchOutcome {
        let SessionState::Ready { store, surface } = &self.state else {
            return DispatchOutcome::Inert;
        };
        let codec = surface.codec();
        let criteria = codec.resolve(&codec.decode(query), store);
        let location = codec.location_for(&criteria);
        self.history.push(location);
        self.dispatch(ControlEvent::NavigationPopped)
    }
}
