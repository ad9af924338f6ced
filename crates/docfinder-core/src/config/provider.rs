use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use reqwest::Url;

use crate::error::{DocFinderError, Result};

use super::env::{read_env_u64, read_non_empty_env};

const ENV_DATA_URL: &str = "DOCFINDER_DATA_URL";
const ENV_HTTP_TIMEOUT_MS: &str = "DOCFINDER_HTTP_TIMEOUT_MS";

pub const DEFAULT_DATA_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";
const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;

/// Where the doctor list is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Http(Url),
    File(PathBuf),
}

impl DataSource {
    /// `http(s)://` values are endpoints; anything without a scheme is a local path.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DocFinderError::InvalidEndpoint("empty data source".to_string()));
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|err| DocFinderError::InvalidEndpoint(format!("{trimmed}: {err}")))?;
            return Ok(Self::Http(url));
        }
        if trimmed.contains("://") {
            return Err(DocFinderError::InvalidEndpoint(format!(
                "unsupported scheme: {trimmed}"
            )));
        }
        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(url) => f.write_str(url.as_str()),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub source: DataSource,
    pub timeout_ms: u64,
}

impl ProviderConfig {
    pub(super) fn from_env() -> Result<Self> {
        let source = match read_non_empty_env(ENV_DATA_URL) {
            Some(raw) => DataSource::parse(&raw).map_err(|err| {
                DocFinderError::Validation(format!("invalid {ENV_DATA_URL}: {err}"))
            })?,
            None => DataSource::parse(DEFAULT_DATA_URL)?,
        };
        Ok(Self {
            source,
            timeout_ms: read_env_u64(ENV_HTTP_TIMEOUT_MS, DEFAULT_HTTP_TIMEOUT_MS, 1),
        })
    }

    pub fn with_source(mut self, raw: &str) -> Result<Self> {
        self.source = DataSource::parse(raw)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_accepts_https_endpoint() {
        let source = DataSource::parse(DEFAULT_DATA_URL).expect("default endpoint");
        assert!(matches!(source, DataSource::Http(_)));
        assert_eq!(source.to_string(), DEFAULT_DATA_URL);
    }

    #[test]
    fn data_source_treats_plain_values_as_paths() {
        let source = DataSource::parse(" fixtures/doctors.json ").expect("path");
        assert_eq!(source, DataSource::File(PathBuf::from("fixtures/doctors.json")));
    }

    #[test]
    fn data_source_rejects_other_schemes_and_blank_values() {
        assert!(matches!(
            DataSource::parse("ftp://example.com/doctors.json"),
            Err(DocFinderError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            DataSource::parse("   "),
            Err(DocFinderError::InvalidEndpoint(_))
        ));
    }
}
