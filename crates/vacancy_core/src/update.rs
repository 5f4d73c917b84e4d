use crate::{Effect, JobTypeTag, ListingState, Msg, QueryDescriptor};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every fetch-triggering transition claims a fresh generation and builds the
/// descriptor in the same step, so a page reset and its fetch are one atomic
/// transition. Responses are applied only when their generation is still the
/// latest; superseded successes and failures are discarded alike.
pub fn update(mut state: ListingState, msg: Msg) -> (ListingState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            vec![load_options(&state), issue_fetch(&mut state)]
        }
        Msg::DirectionSelected(option) => {
            if option.id == state.filter().direction.id {
                // Same constraint re-picked; adopt the label, skip the fetch.
                state.set_direction(option);
                Vec::new()
            } else {
                state.set_direction(option);
                state.reset_search();
                state.reset_page();
                vec![issue_fetch(&mut state)]
            }
        }
        Msg::BranchSelected(option) => {
            if option.id == state.filter().branch.id {
                state.set_branch(option);
                Vec::new()
            } else {
                state.set_branch(option);
                state.reset_search();
                state.reset_page();
                vec![issue_fetch(&mut state)]
            }
        }
        Msg::JobTypeSelected(label) => {
            // The label set is closed; anything unrecognized means no
            // job-type constraint rather than an error.
            let tag = JobTypeTag::from_label(&label).unwrap_or(JobTypeTag::All);
            if tag == state.filter().job_type {
                Vec::new()
            } else {
                state.set_job_type(tag);
                state.reset_search();
                state.reset_page();
                vec![issue_fetch(&mut state)]
            }
        }
        Msg::FiltersCleared => {
            state.clear_filters();
            state.reset_search();
            state.reset_page();
            vec![issue_fetch(&mut state)]
        }
        Msg::SearchDraftChanged(text) => {
            state.set_draft(text);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            // Always fetches: re-submitting is the retry path after failure.
            state.submit_draft();
            state.reset_page();
            vec![issue_fetch(&mut state)]
        }
        Msg::PageSelected(requested) => {
            let page = state.page().clamp(requested);
            if page == state.page().current {
                Vec::new()
            } else {
                state.set_page_current(page);
                vec![issue_fetch(&mut state)]
            }
        }
        Msg::LanguageChanged(language) => {
            if language == state.language() {
                Vec::new()
            } else {
                state.set_language(language);
                state.clear_options();
                state.reset_page();
                vec![load_options(&state), issue_fetch(&mut state)]
            }
        }
        Msg::VacanciesLoaded { generation, result } => {
            state.apply_results(generation, result);
            Vec::new()
        }
        Msg::VacanciesFailed { generation } => {
            state.apply_failure(generation);
            Vec::new()
        }
        Msg::OptionsLoaded {
            language,
            directions,
            branches,
        } => {
            // Option lists for a language that is no longer active are stale.
            if language == state.language() {
                state.set_options(directions, branches);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn issue_fetch(state: &mut ListingState) -> Effect {
    let generation = state.begin_fetch();
    Effect::FetchVacancies {
        generation,
        language: state.language().to_owned(),
        query: QueryDescriptor::build(state),
    }
}

fn load_options(state: &ListingState) -> Effect {
    Effect::LoadOptions {
        language: state.language().to_owned(),
    }
}
