//! Vacancy listing engine: API client, option cache, and effect execution.
mod client;
mod coordinator;
mod engine;
mod options;
mod types;

pub use client::{ClientSettings, ReqwestApi, VacancyApi, DEFAULT_BASE_URL};
pub use coordinator::ListingCoordinator;
pub use engine::{EngineCommand, EngineHandle};
pub use options::{CategoryCache, SentinelLabels};
pub use types::{EngineEvent, FailureKind, FetchError};
