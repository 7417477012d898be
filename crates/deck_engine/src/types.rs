use std::fmt;

use serde::Deserialize;

/// Wire representation of one spot in a listing page.
///
/// Field names follow the listing service's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotRecord {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
    pub place_name: String,
}

/// One decoded page of the listing endpoint.
///
/// `next_cursor == None` means the upstream has no further pages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedPage {
    pub items: Vec<SpotRecord>,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PageLoaded {
        result: Result<FetchedPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedBody => write!(f, "malformed body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
