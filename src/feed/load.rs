use std::fs;
use std::time::Duration;

use anyhow::{Context, Result};

use super::records::InterfaceRecord;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the records feed lives. Anything that does not look like an
/// http(s) URL is treated as a local file path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    Http(String),
    File(String),
}

impl FeedSource {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Http(location.to_owned())
        } else {
            Self::File(location.to_owned())
        }
    }

    pub fn location(&self) -> &str {
        match self {
            Self::Http(url) => url,
            Self::File(path) => path,
        }
    }
}

/// Fetch and decode the full record set from the feed.
///
/// Runs on a worker thread; callers decide what a failure means (initial
/// load shows an error screen, periodic refresh keeps the previous set).
pub fn load_records(source: &FeedSource) -> Result<Vec<InterfaceRecord>> {
    let raw = match source {
        FeedSource::Http(url) => fetch_http(url)?,
        FeedSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read records feed {path}"))?,
    };

    let records: Vec<InterfaceRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse records feed {}", source.location()))?;
    Ok(records)
}

fn fetch_http(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to fetch records feed {url}"))?
        .error_for_status()
        .with_context(|| format!("records feed {url} returned an error status"))?;

    response
        .text()
        .with_context(|| format!("failed to read records feed body from {url}"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_detects_http_schemes() {
        assert_eq!(
            FeedSource::parse("http://host/interfaces.json"),
            FeedSource::Http("http://host/interfaces.json".to_owned())
        );
        assert_eq!(
            FeedSource::parse("https://host/interfaces.json"),
            FeedSource::Http("https://host/interfaces.json".to_owned())
        );
    }

    #[test]
    fn parse_falls_back_to_file_path() {
        assert_eq!(
            FeedSource::parse("data/interfaces.json"),
            FeedSource::File("data/interfaces.json".to_owned())
        );
    }

    #[test]
    fn load_records_reads_a_json_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id":"1","source":"A","target":"B","protocol":"SFTP","schedule":"daily","担当者":"X"}}]"#
        )
        .expect("write feed");

        let source = FeedSource::File(file.path().to_string_lossy().into_owned());
        let records = load_records(&source).expect("feed loads");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].owner, "X");
    }

    #[test]
    fn load_records_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write feed");

        let source = FeedSource::File(file.path().to_string_lossy().into_owned());
        assert!(load_records(&source).is_err());
    }

    #[test]
    fn load_records_reports_a_missing_file() {
        let source = FeedSource::File("/nonexistent/interfaces.json".to_owned());
        assert!(load_records(&source).is_err());
    }
}
