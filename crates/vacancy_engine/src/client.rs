use std::time::Duration;

use serde::Deserialize;

use vacancy_core::{CategoryOption, QueryDescriptor, ResultPage, Vacancy, VacancyTag};

use crate::types::{FailureKind, FetchError};

/// Production vacancy API root.
pub const DEFAULT_BASE_URL: &str = "https://career-api.asakabank.uz";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The remote vacancy API as this workspace consumes it.
#[async_trait::async_trait]
pub trait VacancyApi: Send + Sync {
    async fn fetch_vacancies(
        &self,
        language: &str,
        query: &QueryDescriptor,
    ) -> Result<ResultPage, FetchError>;

    async fn fetch_categories(&self, language: &str) -> Result<Vec<CategoryOption>, FetchError>;

    async fn fetch_branches(&self, language: &str) -> Result<Vec<CategoryOption>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    settings: ClientSettings,
}

impl ReqwestApi {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, language: &str, path: &str) -> Result<reqwest::Url, FetchError> {
        let raw = format!(
            "{}/{language}/{path}",
            self.settings.base_url.trim_end_matches('/')
        );
        reqwest::Url::parse(&raw)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T>(&self, url: reqwest::Url) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl VacancyApi for ReqwestApi {
    async fn fetch_vacancies(
        &self,
        language: &str,
        query: &QueryDescriptor,
    ) -> Result<ResultPage, FetchError> {
        let mut url = self.endpoint(language, "vacancies")?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());
        let payload: VacancyPagePayload = self.get_json(url).await?;
        Ok(payload.into_result_page())
    }

    async fn fetch_categories(&self, language: &str) -> Result<Vec<CategoryOption>, FetchError> {
        let url = self.endpoint(language, "categories/")?;
        let payload: OptionListPayload = self.get_json(url).await?;
        Ok(payload.into_options())
    }

    async fn fetch_branches(&self, language: &str) -> Result<Vec<CategoryOption>, FetchError> {
        let url = self.endpoint(language, "branches/")?;
        let payload: OptionListPayload = self.get_json(url).await?;
        Ok(payload.into_options())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

/// Entity ids arrive as numbers from some endpoints and strings from others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(id) => id.to_string(),
            RawId::Text(id) => id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VacancyPagePayload {
    #[serde(default)]
    results: Vec<VacancyPayload>,
    #[serde(default = "first_page")]
    total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl VacancyPagePayload {
    fn into_result_page(self) -> ResultPage {
        ResultPage {
            items: self
                .results
                .into_iter()
                .map(VacancyPayload::into_vacancy)
                .collect(),
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Deserialize)]
struct VacancyPayload {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    job_type: String,
    #[serde(default)]
    branch: BranchPayload,
    #[serde(default)]
    created_date: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<TagPayload>,
}

impl VacancyPayload {
    fn into_vacancy(self) -> Vacancy {
        // Cards show the branch city when the API has one, else the address.
        let branch_city = self
            .branch
            .city_name
            .filter(|city| !city.is_empty())
            .or(self.branch.address)
            .unwrap_or_default();
        Vacancy {
            id: self.id,
            slug: self.slug,
            title: self.title,
            job_type_label: self.job_type,
            branch_city,
            created_date: self.created_date,
            description: self.description,
            tags: self
                .tags
                .into_iter()
                .map(|tag| VacancyTag {
                    id: tag.id,
                    name: tag.name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct BranchPayload {
    city_name: Option<String>,
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TagPayload {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OptionListPayload {
    #[serde(default)]
    results: Vec<OptionPayload>,
}

impl OptionListPayload {
    fn into_options(self) -> Vec<CategoryOption> {
        self.results
            .into_iter()
            .map(OptionPayload::into_option)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct OptionPayload {
    id: RawId,
    #[serde(default)]
    name: String,
    city_name: Option<String>,
    address: Option<String>,
}

impl OptionPayload {
    fn into_option(self) -> CategoryOption {
        // Branch entries label by city with a street-address fallback;
        // category entries only carry `name`.
        let label = self
            .city_name
            .filter(|city| !city.is_empty())
            .or(self.address)
            .unwrap_or(self.name);
        CategoryOption::new(self.id.into_string(), label)
    }
}
