use crate::view_model::ListingViewModel;

/// Language used when the shell has not selected one yet.
pub const DEFAULT_LANGUAGE: &str = "uz";

/// Monotonically increasing identifier for issued vacancy fetches.
pub type Generation = u64;

/// A selectable category or branch entry. The empty id is the reserved
/// "match all" option and must stay first in any list shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The "match all" option with the given display label.
    pub fn all(label: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            label: label.into(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id.is_empty()
    }
}

/// Employment type selection. UI labels and server codes are two columns of
/// one fixed table; neither is ever derived from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobTypeTag {
    #[default]
    All,
    FullTime,
    PartTime,
    Contract,
    Temporary,
    Internship,
}

const JOB_TYPE_TABLE: [(JobTypeTag, &str, &str); 5] = [
    (JobTypeTag::FullTime, "Toliq stavka", "full_time"),
    (JobTypeTag::PartTime, "Yarim stavka", "part_time"),
    (JobTypeTag::Contract, "Shartnoma asosida", "contract"),
    (JobTypeTag::Temporary, "Vaqtinchalik", "temporary"),
    (JobTypeTag::Internship, "Stajirovka", "internship"),
];

impl JobTypeTag {
    /// Every tag, all-sentinel first, in the order the selector shows them.
    pub const ALL_TAGS: [JobTypeTag; 6] = [
        JobTypeTag::All,
        JobTypeTag::FullTime,
        JobTypeTag::PartTime,
        JobTypeTag::Contract,
        JobTypeTag::Temporary,
        JobTypeTag::Internship,
    ];

    /// Looks up a UI label; `None` for anything outside the fixed set.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == "Barchasi" {
            return Some(JobTypeTag::All);
        }
        JOB_TYPE_TABLE
            .iter()
            .find(|(_, ui, _)| *ui == label)
            .map(|(tag, _, _)| *tag)
    }

    /// UI-facing label for this tag.
    pub fn label(self) -> &'static str {
        match JOB_TYPE_TABLE.iter().find(|(tag, _, _)| *tag == self) {
            Some((_, ui, _)) => ui,
            None => "Barchasi",
        }
    }

    /// Server-facing code; `None` for the all-sentinel (omitted on the wire).
    pub fn code(self) -> Option<&'static str> {
        JOB_TYPE_TABLE
            .iter()
            .find(|(tag, _, _)| *tag == self)
            .map(|(_, _, code)| *code)
    }
}

/// The three categorical filter selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub direction: CategoryOption,
    pub branch: CategoryOption,
    pub job_type: JobTypeTag,
}

/// Free-text search. `draft` follows the input box; only `submitted`
/// participates in query derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm {
    pub draft: String,
    pub submitted: String,
}

/// Current page and last-known page count, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: u32,
    pub total: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl PageState {
    /// Clamps a requested page into `[1, total]`.
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.max(1).min(self.total)
    }
}

/// Category and branch option lists for the active language, sentinel first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub directions: Vec<CategoryOption>,
    pub branches: Vec<CategoryOption>,
}

/// Lifecycle of the vacancy list with respect to the latest issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// A displayed tag chip on a vacancy card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyTag {
    pub id: u64,
    pub name: String,
}

/// One vacancy as the listing displays it. Opaque beyond display need;
/// detail navigation is keyed by `slug` outside this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub job_type_label: String,
    pub branch_city: String,
    pub created_date: String,
    pub description: String,
    pub tags: Vec<VacancyTag>,
}

/// One page of search results as returned by the vacancy endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub items: Vec<Vacancy>,
    pub total_pages: u32,
}

/// Owned state of the listing view. All mutation goes through
/// [`crate::update`]; the fetch path only ever writes results, the page
/// total, and the fetch phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    language: String,
    filter: FilterSelection,
    search: SearchTerm,
    page: PageState,
    options: FilterOptions,
    phase: FetchPhase,
    vacancies: Vec<Vacancy>,
    latest_generation: Generation,
    dirty: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl ListingState {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            filter: FilterSelection::default(),
            search: SearchTerm::default(),
            page: PageState::default(),
            options: FilterOptions::default(),
            phase: FetchPhase::Idle,
            vacancies: Vec::new(),
            latest_generation: 0,
            dirty: false,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn filter(&self) -> &FilterSelection {
        &self.filter
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest_generation
    }

    /// Returns the dirty flag and clears it. Shells use this to coalesce
    /// re-renders across bursts of messages.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> ListingViewModel {
        ListingViewModel {
            language: self.language.clone(),
            direction: self.filter.direction.clone(),
            branch: self.filter.branch.clone(),
            job_type: self.filter.job_type,
            search_draft: self.search.draft.clone(),
            direction_options: self.options.directions.clone(),
            branch_options: self.options.branches.clone(),
            phase: self.phase,
            vacancies: self.vacancies.clone(),
            page: self.page.current,
            total_pages: self.page.total,
            dirty: self.dirty,
        }
    }

    pub(crate) fn set_direction(&mut self, option: CategoryOption) {
        self.filter.direction = option;
        self.dirty = true;
    }

    pub(crate) fn set_branch(&mut self, option: CategoryOption) {
        self.filter.branch = option;
        self.dirty = true;
    }

    pub(crate) fn set_job_type(&mut self, tag: JobTypeTag) {
        self.filter.job_type = tag;
        self.dirty = true;
    }

    pub(crate) fn clear_filters(&mut self) {
        self.filter = FilterSelection::default();
        self.dirty = true;
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        self.search.draft = text;
        self.dirty = true;
    }

    pub(crate) fn submit_draft(&mut self) {
        self.search.submitted = self.search.draft.clone();
        self.dirty = true;
    }

    pub(crate) fn reset_search(&mut self) {
        self.search = SearchTerm::default();
        self.dirty = true;
    }

    /// Forgets the previous query's pagination. The authoritative total
    /// arrives with the next response; until then only page 1 is valid.
    pub(crate) fn reset_page(&mut self) {
        self.page = PageState::default();
        self.dirty = true;
    }

    pub(crate) fn set_page_current(&mut self, page: u32) {
        self.page.current = page;
        self.dirty = true;
    }

    pub(crate) fn set_language(&mut self, language: String) {
        self.language = language;
        self.dirty = true;
    }

    pub(crate) fn set_options(&mut self, directions: Vec<CategoryOption>, branches: Vec<CategoryOption>) {
        self.options = FilterOptions {
            directions,
            branches,
        };
        self.dirty = true;
    }

    pub(crate) fn clear_options(&mut self) {
        self.options = FilterOptions::default();
        self.dirty = true;
    }

    /// Claims the next generation number and marks the list as loading.
    pub(crate) fn begin_fetch(&mut self) -> Generation {
        self.latest_generation += 1;
        self.phase = FetchPhase::Loading;
        self.dirty = true;
        self.latest_generation
    }

    /// Applies a successful response. Returns `false` (untouched state) when
    /// the generation has been superseded.
    pub(crate) fn apply_results(&mut self, generation: Generation, result: ResultPage) -> bool {
        if generation != self.latest_generation {
            return false;
        }
        self.vacancies = result.items;
        self.page.total = result.total_pages.max(1);
        // A shrunken total can leave the current page past the end.
        self.page.current = self.page.current.min(self.page.total);
        self.phase = FetchPhase::Loaded;
        self.dirty = true;
        true
    }

    /// Applies a failed response. Superseded failures are discarded exactly
    /// like superseded successes.
    pub(crate) fn apply_failure(&mut self, generation: Generation) -> bool {
        if generation != self.latest_generation {
            return false;
        }
        self.vacancies.clear();
        self.phase = FetchPhase::Failed;
        self.dirty = true;
        true
    }
}
