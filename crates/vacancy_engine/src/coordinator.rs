use listing_logging::{listing_debug, listing_warn};

use vacancy_core::{update, Effect, ListingState, ListingViewModel, Msg};

use crate::engine::{EngineCommand, EngineHandle};
use crate::types::EngineEvent;

/// Runtime half of fetch coordination: applies messages to the pure core,
/// forwards effects to the engine thread, and pumps engine events back in as
/// messages. All state mutation happens on the caller's thread.
pub struct ListingCoordinator {
    state: ListingState,
    engine: EngineHandle,
}

impl ListingCoordinator {
    pub fn new(engine: EngineHandle) -> Self {
        Self::with_state(ListingState::default(), engine)
    }

    pub fn with_state(state: ListingState, engine: EngineHandle) -> Self {
        Self { state, engine }
    }

    /// Kicks off the mount transition: option load plus the first page.
    pub fn start(&mut self) {
        self.dispatch(Msg::Started);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::FetchVacancies {
                generation,
                language,
                query,
            } => {
                listing_debug!(
                    "issuing fetch {generation}: /{language}/vacancies?{}",
                    query.query_string()
                );
                self.engine.send(EngineCommand::FetchVacancies {
                    generation,
                    language,
                    query,
                });
            }
            Effect::LoadOptions { language } => {
                listing_debug!("loading filter options for '{language}'");
                self.engine.send(EngineCommand::LoadOptions { language });
            }
        }
    }

    /// Drains pending engine events into core messages. Returns whether any
    /// event was applied; shells call this from their idle loop.
    pub fn pump(&mut self) -> bool {
        let mut applied = false;
        while let Some(event) = self.engine.try_recv() {
            applied = true;
            let msg = match event {
                EngineEvent::VacanciesFetched { generation, result } => match result {
                    Ok(page) => Msg::VacanciesLoaded {
                        generation,
                        result: page,
                    },
                    Err(err) => {
                        listing_warn!("vacancy fetch {generation} failed: {err}");
                        Msg::VacanciesFailed { generation }
                    }
                },
                EngineEvent::OptionsLoaded { language, options } => Msg::OptionsLoaded {
                    language,
                    directions: options.directions,
                    branches: options.branches,
                },
            };
            self.dispatch(msg);
        }
        applied
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn view(&self) -> ListingViewModel {
        self.state.view()
    }

    /// See [`ListingState::consume_dirty`].
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }
}
