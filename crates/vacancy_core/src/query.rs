use crate::ListingState;

/// Canonical, serializable request shape for the vacancy search endpoint.
/// `None` fields are absent from the wire request, never sent empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub category: Option<String>,
    pub branch: Option<String>,
    pub job_type: Option<String>,
    pub search: Option<String>,
    pub page: u32,
}

impl QueryDescriptor {
    /// Derives the descriptor for the current state. Pure and deterministic:
    /// equal states produce byte-for-byte equal query strings.
    pub fn build(state: &ListingState) -> Self {
        let filter = state.filter();
        let submitted = &state.search().submitted;
        Self {
            category: non_sentinel(&filter.direction.id),
            branch: non_sentinel(&filter.branch.id),
            job_type: filter.job_type.code().map(str::to_owned),
            search: if submitted.is_empty() {
                None
            } else {
                Some(submitted.clone())
            },
            page: state.page().current,
        }
    }

    /// Query parameters in fixed order. `page` is always present.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(branch) = &self.branch {
            pairs.push(("branch", branch.clone()));
        }
        if let Some(job_type) = &self.job_type {
            pairs.push(("job_type", job_type.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs
    }

    /// Percent-encoded query string for the descriptor.
    pub fn query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

fn non_sentinel(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id.to_owned())
    }
}
