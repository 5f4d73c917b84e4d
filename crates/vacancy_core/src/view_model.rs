use crate::{CategoryOption, FetchPhase, JobTypeTag, Vacancy};

/// Renderer-facing snapshot of the listing state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingViewModel {
    pub language: String,
    pub direction: CategoryOption,
    pub branch: CategoryOption,
    pub job_type: JobTypeTag,
    pub search_draft: String,
    pub direction_options: Vec<CategoryOption>,
    pub branch_options: Vec<CategoryOption>,
    pub phase: FetchPhase,
    pub vacancies: Vec<Vacancy>,
    pub page: u32,
    pub total_pages: u32,
    pub dirty: bool,
}

impl ListingViewModel {
    /// Fixed job-type labels in selector order, all-sentinel first.
    pub fn job_type_labels() -> Vec<&'static str> {
        JobTypeTag::ALL_TAGS.iter().map(|tag| tag.label()).collect()
    }

    pub fn loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn failed(&self) -> bool {
        self.phase == FetchPhase::Failed
    }
}
