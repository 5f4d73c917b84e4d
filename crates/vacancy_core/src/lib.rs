//! Vacancy listing core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use query::QueryDescriptor;
pub use state::{
    CategoryOption, FetchPhase, FilterOptions, FilterSelection, Generation, JobTypeTag,
    ListingState, PageState, ResultPage, SearchTerm, Vacancy, VacancyTag, DEFAULT_LANGUAGE,
};
pub use update::update;
pub use view_model::ListingViewModel;
