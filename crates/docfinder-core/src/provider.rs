use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use crate::config::{DataSource, ProviderConfig};
use crate::error::{DocFinderError, Result};
use crate::models::DoctorRecord;

/// Source of the session's doctor list. Called exactly once per session.
pub trait DoctorProvider {
    fn fetch(&self) -> Result<Vec<DoctorRecord>>;

    fn describe(&self) -> String;
}

#[derive(Clone)]
pub struct HttpDoctorProvider {
    url: Url,
    http: Client,
}

impl std::fmt::Debug for HttpDoctorProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDoctorProvider")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpDoctorProvider {
    pub fn new(url: Url, timeout_ms: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self { url, http })
    }
}

impl DoctorProvider for HttpDoctorProvider {
    fn fetch(&self) -> Result<Vec<DoctorRecord>> {
        let resp = self.http.get(self.url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DocFinderError::HttpStatus {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text()?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the same JSON array from a local file.
#[derive(Debug, Clone)]
pub struct FileDoctorProvider {
    path: PathBuf,
}

impl FileDoctorProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DoctorProvider for FileDoctorProvider {
    fn fetch(&self) -> Result<Vec<DoctorRecord>> {
        if !self.path.exists() {
            return Err(DocFinderError::NotFound(self.path.display().to_string()));
        }
        let body = fs::read_to_string(&self.path)?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn provider_for(config: &ProviderConfig) -> Result<Box<dyn DoctorProvider>> {
    Ok(match &config.source {
        DataSource::Http(url) => Box::new(HttpDoctorProvider::new(url.clone(), config.timeout_ms)?),
        DataSource::File(path) => Box::new(FileDoctorProvider::new(path.clone())),
    })
}

/// Parses a provider body; anything but a JSON array of records is an error.
pub fn parse_records(body: &str) -> Result<Vec<DoctorRecord>> {
    Ok(serde_json::from_str::<Vec<DoctorRecord>>(body)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn parse_records_accepts_array_of_records() {
        let records = parse_records(r#"[{"name":"Dr. A"},{"name":"Dr. B","fee":200}]"#)
            .expect("parse records");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].fee, Some(200.0));
    }

    #[test]
    fn parse_records_rejects_non_array_bodies() {
        let err = parse_records(r#"{"doctors":[]}"#).expect_err("object body must fail");
        assert!(matches!(err, DocFinderError::Json(_)));
        assert!(err.is_load_failure());
    }

    #[test]
    fn file_provider_reads_records_from_disk() {
        let mut file = NamedTempFile::new().expect("tempfile");
        write!(file, r#"[{{"name":"Dr. Disk","speciality":"Dentist"}}]"#).expect("write");
        let provider = FileDoctorProvider::new(file.path());
        let records = provider.fetch().expect("fetch");
        assert_eq!(records[0].name, "Dr. Disk");
        assert_eq!(provider.describe(), file.path().display().to_string());
    }

    #[test]
    fn file_provider_reports_missing_file_as_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = FileDoctorProvider::new(dir.path().join("missing.json"));
        let err = provider.fetch().expect_err("missing file must fail");
        assert!(matches!(err, DocFinderError::NotFound(_)));
    }

    #[test]
    fn provider_for_builds_http_provider_without_network_access() {
        let config = ProviderConfig {
            source: DataSource::parse("https://example.test/doctors.json").expect("source"),
            timeout_ms: 50,
        };
        let provider = provider_for(&config).expect("provider");
        assert_eq!(provider.describe(), "https://example.test/doctors.json");
    }
}
