use std::sync::{mpsc, Arc};
use std::thread;

use tokio::sync::Mutex;

use vacancy_core::{Generation, QueryDescriptor};

use crate::client::{ClientSettings, ReqwestApi, VacancyApi};
use crate::options::{CategoryCache, SentinelLabels};
use crate::types::{EngineEvent, FetchError};

/// Work the coordinator hands to the engine thread.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    FetchVacancies {
        generation: Generation,
        language: String,
        query: QueryDescriptor,
    },
    LoadOptions {
        language: String,
    },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Spawns the engine thread over a reqwest-backed API client.
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let api: Arc<dyn VacancyApi> = Arc::new(ReqwestApi::new(settings)?);
        Ok(Self::with_api(api, SentinelLabels::default()))
    }

    /// Spawns the engine thread over any API implementation.
    pub fn with_api(api: Arc<dyn VacancyApi>, labels: SentinelLabels) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let cache = Arc::new(Mutex::new(CategoryCache::new(labels)));
            // Each command runs as its own task, so overlapping fetches are
            // genuinely concurrent and resolve in arbitrary order.
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let cache = cache.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api, cache, command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: Arc<dyn VacancyApi>,
    cache: Arc<Mutex<CategoryCache>>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchVacancies {
            generation,
            language,
            query,
        } => {
            let result = api.fetch_vacancies(&language, &query).await;
            let _ = event_tx.send(EngineEvent::VacanciesFetched { generation, result });
        }
        EngineCommand::LoadOptions { language } => {
            let mut cache = cache.lock().await;
            let options = cache.load(api.as_ref(), &language).await;
            let _ = event_tx.send(EngineEvent::OptionsLoaded { language, options });
        }
    }
}
