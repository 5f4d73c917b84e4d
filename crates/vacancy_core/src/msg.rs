#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Listing view mounted; load options and the first page.
    Started,
    /// User picked a direction/category from the filter panel.
    DirectionSelected(crate::CategoryOption),
    /// User picked a branch from the filter panel.
    BranchSelected(crate::CategoryOption),
    /// User picked a job type by its UI label.
    JobTypeSelected(String),
    /// User clicked "clear filters".
    FiltersCleared,
    /// User edited the search box (every keystroke).
    SearchDraftChanged(String),
    /// User committed the search box (button or Enter).
    SearchSubmitted,
    /// User picked a page in the pagination control.
    PageSelected(u32),
    /// The process-wide display language changed.
    LanguageChanged(String),
    /// Engine response for a vacancy fetch.
    VacanciesLoaded {
        generation: crate::Generation,
        result: crate::ResultPage,
    },
    /// Engine failure for a vacancy fetch; cause already logged downstream.
    VacanciesFailed { generation: crate::Generation },
    /// Engine delivered category/branch option lists for a language.
    OptionsLoaded {
        language: String,
        directions: Vec<crate::CategoryOption>,
        branches: Vec<crate::CategoryOption>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
