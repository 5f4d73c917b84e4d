use std::collections::HashMap;

use listing_logging::listing_warn;
use vacancy_core::{CategoryOption, FilterOptions};

use crate::client::VacancyApi;

/// Localized labels for the "match all" option that leads every list.
#[derive(Debug, Clone)]
pub struct SentinelLabels {
    labels: HashMap<String, String>,
    fallback: String,
}

impl Default for SentinelLabels {
    fn default() -> Self {
        let mut labels = HashMap::new();
        labels.insert("uz".to_string(), "Barchasi".to_string());
        labels.insert("ru".to_string(), "Все".to_string());
        labels.insert("en".to_string(), "All".to_string());
        Self {
            labels,
            fallback: "Barchasi".to_string(),
        }
    }
}

impl SentinelLabels {
    /// Adds or replaces the label for one language.
    pub fn with_label(mut self, language: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(language.into(), label.into());
        self
    }

    pub fn for_language(&self, language: &str) -> &str {
        self.labels
            .get(language)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

/// Per-language cache of the category and branch option lists. A language's
/// lists are fetched once and reused; only asking for a different language
/// causes another load.
pub struct CategoryCache {
    labels: SentinelLabels,
    loaded: HashMap<String, FilterOptions>,
}

impl CategoryCache {
    pub fn new(labels: SentinelLabels) -> Self {
        Self {
            labels,
            loaded: HashMap::new(),
        }
    }

    /// Returns the option lists for `language`, fetching them on first
    /// request. Both lists lead with the localized "match all" option. A
    /// failed load degrades to the sentinel alone and caches nothing, so the
    /// next request for that language retries.
    pub async fn load(&mut self, api: &dyn VacancyApi, language: &str) -> FilterOptions {
        if let Some(options) = self.loaded.get(language) {
            return options.clone();
        }

        let sentinel = CategoryOption::all(self.labels.for_language(language));
        let (directions, branches) =
            tokio::join!(api.fetch_categories(language), api.fetch_branches(language));
        match (directions, branches) {
            (Ok(directions), Ok(branches)) => {
                let options = FilterOptions {
                    directions: with_sentinel(sentinel.clone(), directions),
                    branches: with_sentinel(sentinel, branches),
                };
                self.loaded.insert(language.to_string(), options.clone());
                options
            }
            (directions, branches) => {
                for err in [directions.err(), branches.err()].into_iter().flatten() {
                    listing_warn!("option load for '{language}' failed: {err}");
                }
                FilterOptions {
                    directions: vec![sentinel.clone()],
                    branches: vec![sentinel],
                }
            }
        }
    }
}

fn with_sentinel(sentinel: CategoryOption, rest: Vec<CategoryOption>) -> Vec<CategoryOption> {
    let mut list = Vec::with_capacity(rest.len() + 1);
    list.push(sentinel);
    list.extend(rest);
    list
}
