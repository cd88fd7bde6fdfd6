use std::{fmt, io, path::PathBuf};

use bank_holidays::{parse_holidays, HolidayResponse};
use log::debug;
use thiserror::Error;
use tokio::{fs, time::Duration};

pub const DEFAULT_SOURCE: &str = "https://www.gov.uk/bank-holidays.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch holiday dataset: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to read holiday dataset: {0}")]
    Read(#[from] io::Error),
    #[error("failed to decode holiday dataset: {0}")]
    Decode(#[from] serde_json::Error),
}

pub async fn load(source: &Source, timeout: Duration) -> Result<HolidayResponse, LoadError> {
    let bytes = match source {
        Source::Url(url) => fetch(url, timeout).await?,
        Source::File(path) => {
            debug!("Reading {}", path.display());
            fs::read(path).await?
        }
    };

    Ok(parse_holidays(bytes)?)
}

async fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, reqwest::Error> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    debug!("Sending HTTP request to {url}");
    let response = client.get(url).send().await?.error_for_status()?;

    debug!("Reading response body");
    Ok(response.bytes().await?.to_vec())
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Router};
    use tokio::net::TcpListener;

    use super::*;

    const DOCUMENT: &str = r#"{
        "england-and-wales": {"division": "england-and-wales", "events": [
            {"title": "Boxing Day", "date": "2025-12-26", "notes": "", "bunting": true}
        ]},
        "scotland": {"division": "scotland", "events": []},
        "northern-ireland": {"division": "northern-ireland", "events": []}
    }"#;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_from_file() {
        let path = temp_file("holidays.json", DOCUMENT);
        let data = load(&Source::File(path.clone()), Duration::from_secs(1))
            .await
            .unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(data.england_and_wales.events[0].title, "Boxing Day");
        assert!(data.scotland.events.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let path = std::env::temp_dir().join("bank-holidays-does-not-exist.json");
        let err = load(&Source::File(path), Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Read(_)));
    }

    #[tokio::test]
    async fn bad_date_is_decode_error() {
        let path = temp_file("bad-date.json", &DOCUMENT.replace("2025-12-26", "2025-12-32"));
        let err = load(&Source::File(path.clone()), Duration::from_secs(1))
            .await
            .unwrap_err();
        std::fs::remove_file(path).unwrap();

        assert!(matches!(err, LoadError::Decode(_)));
    }

    async fn serve_upstream() -> String {
        let router = Router::new()
            .route("/bank-holidays.json", get(|| async { DOCUMENT }))
            .route(
                "/broken.json",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream failure") }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn loads_from_url() {
        let base = serve_upstream().await;
        let data = load(
            &Source::Url(format!("{base}/bank-holidays.json")),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(data.england_and_wales.events[0].title, "Boxing Day");
        assert_eq!(data.northern_ireland.name, "northern-ireland");
    }

    #[tokio::test]
    async fn error_status_is_fetch_error() {
        let base = serve_upstream().await;
        let err = load(
            &Source::Url(format!("{base}/broken.json")),
            Duration::from_secs(5),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, LoadError::Fetch(_)));
    }

    #[tokio::test]
    async fn invalid_url_is_fetch_error() {
        let err = load(&Source::Url("not a url".into()), Duration::from_secs(1))
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Fetch(_)));
    }
}
