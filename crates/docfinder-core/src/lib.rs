// Every fallible public API here returns the same `DocFinderError`.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod autocomplete;
pub mod config;
pub mod control;
pub mod error;
pub mod filter;
pub mod history;
pub mod models;
pub mod provider;
pub mod render;
pub mod session;
pub mod store;
pub mod url_state;

pub use autocomplete::suggest;
pub use config::AppConfig;
pub use control::{ControlChange, ControlEvent, ControlSurface, DispatchOutcome};
pub use error::{DocFinderError, Result};
pub use filter::apply;
pub use history::{History, SessionHistory};
pub use provider::{DoctorProvider, provider_for};
pub use render::{FilterOptionsSink, Renderer, ResultView};
pub use session::DirectorySession;
pub use store::DatasetStore;
pub use url_state::QueryCodec;
