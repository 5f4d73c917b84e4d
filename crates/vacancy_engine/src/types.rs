use std::fmt;

use vacancy_core::{FilterOptions, Generation, ResultPage};

/// Why a request against the vacancy API failed. The listing core collapses
/// every kind into one failed outcome; the kind survives for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "malformed payload"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// What the engine thread reports back to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    VacanciesFetched {
        generation: Generation,
        result: Result<ResultPage, FetchError>,
    },
    OptionsLoaded {
        language: String,
        options: FilterOptions,
    },
}
