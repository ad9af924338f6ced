use reqwest::Url;

use crate::error::{DocFinderError, Result};

use super::env::{read_non_empty_env, split_csv};

const ENV_CONSULTATION_MODES: &str = "DOCFINDER_CONSULTATION_MODES";
const ENV_PAGE_URL: &str = "DOCFINDER_PAGE_URL";

const DEFAULT_CONSULTATION_MODES: &str = "Video Consult,In Clinic";
pub const DEFAULT_PAGE_URL: &str = "http://localhost/";

/// Options rendered by the page around the filter engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlConfig {
    /// Consultation radio values besides `All`, in document order.
    pub consultation_modes: Vec<String>,
    /// Location the page lives at; filter state is carried in its query.
    pub page_url: Url,
}

impl ControlConfig {
    pub(super) fn from_env() -> Result<Self> {
        Ok(Self {
            consultation_modes: parse_consultation_modes(
                read_non_empty_env(ENV_CONSULTATION_MODES).as_deref(),
            ),
            page_url: parse_page_url(read_non_empty_env(ENV_PAGE_URL).as_deref()).map_err(
                |err| DocFinderError::Validation(format!("invalid {ENV_PAGE_URL}: {err}")),
            )?,
        })
    }

    /// Default consultation modes at the default page location.
    pub fn defaults() -> Result<Self> {
        Ok(Self {
            consultation_modes: parse_consultation_modes(None),
            page_url: parse_page_url(None)?,
        })
    }

    pub fn with_page_url(mut self, raw: &str) -> Result<Self> {
        self.page_url = parse_page_url(Some(raw))?;
        Ok(self)
    }
}

fn parse_consultation_modes(raw: Option<&str>) -> Vec<String> {
    let modes = split_csv(raw.unwrap_or(DEFAULT_CONSULTATION_MODES))
        .into_iter()
        .filter(|mode| mode != "All")
        .collect::<Vec<_>>();
    if modes.is_empty() {
        return split_csv(DEFAULT_CONSULTATION_MODES);
    }
    modes
}

fn parse_page_url(raw: Option<&str>) -> Result<Url> {
    let raw = raw.unwrap_or(DEFAULT_PAGE_URL);
    let url =
        Url::parse(raw.trim()).map_err(|err| DocFinderError::Validation(format!("{raw}: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(DocFinderError::Validation(format!(
            "unsupported page scheme: {other}"
        ))),
    }
}
