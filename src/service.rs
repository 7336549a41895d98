//! Search service boundary
//!
//! Defines the query-submission and metadata contracts the analytics core
//! consumes. Implementations decide how a result is obtained (a backend
//! proxy, a file on disk, a fixed value); failures are classified as either
//! connectivity (the service could not be reached) or provider (it answered
//! with something unusable).

use crate::schema::AiSearchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the result document inside a `FileSearchService` root
pub const RESULT_FILE: &str = "result.json";

/// File name of the optional metadata document
pub const METADATA_FILE: &str = "metadata.json";

/// Query sent when replaying a stored result rather than asking a question
pub const STORED_RESULT_QUERY: &str = "stored result";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Query is required")]
    EmptyQuery,

    #[error("Network Error: could not connect to the search service ({0})")]
    Connectivity(String),

    #[error("The search provider returned an unusable response: {0}")]
    Provider(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Optional narrowing of a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedFilters {
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub organisms: Vec<String>,
    pub missions: Vec<String>,
    pub research_areas: Vec<String>,
    pub publication_types: Vec<String>,
}

impl AdvancedFilters {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub filters: AdvancedFilters,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: AdvancedFilters::default(),
        }
    }

    /// Request for a result already on disk; always passes `validate`
    pub fn stored() -> Self {
        Self::new(STORED_RESULT_QUERY)
    }

    pub fn with_filters(mut self, filters: AdvancedFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn validate(&self) -> ServiceResult<()> {
        if self.query.trim().is_empty() {
            return Err(ServiceError::EmptyQuery);
        }
        Ok(())
    }
}

/// Static taxonomy offered as search suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMetadata {
    pub organism_types: Vec<String>,
    pub mission_platforms: Vec<String>,
    pub research_areas: Vec<String>,
    pub publication_types: Vec<String>,
}

const ORGANISM_TYPES: &[&str] = &[
    "Human", "Mice", "Rats", "Zebrafish", "Fruit flies", "Plants", "Microbes", "Fungi",
    "C. elegans", "Yeast", "Algae", "Other",
];

const MISSION_PLATFORMS: &[&str] = &[
    "ISS", "Shuttle", "GeneLab", "VEGGIE", "Rodent Research", "Artemis", "Twins Study", "Other",
    "N/A",
];

const PUBLICATION_TYPES: &[&str] = &[
    "Dataset", "Publication/Paper", "Experiment", "Article", "Report", "Other",
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for SearchMetadata {
    fn default() -> Self {
        Self {
            organism_types: owned(ORGANISM_TYPES),
            mission_platforms: owned(MISSION_PLATFORMS),
            research_areas: Vec::new(),
            publication_types: owned(PUBLICATION_TYPES),
        }
    }
}

/// Source of search results and taxonomy
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> ServiceResult<AiSearchResult>;

    async fn metadata(&self) -> ServiceResult<SearchMetadata>;
}

/// Serves a result document stored on disk
///
/// Reads `<root>/result.json` for every query and `<root>/metadata.json`
/// (falling back to the default taxonomy) for metadata.
pub struct FileSearchService {
    root: PathBuf,
}

impl FileSearchService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl SearchService for FileSearchService {
    async fn search(&self, request: &SearchRequest) -> ServiceResult<AiSearchResult> {
        request.validate()?;
        let path = self.root.join(RESULT_FILE);
        tracing::info!(query = %request.query, path = %path.display(), "loading search result");

        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ServiceError::Connectivity(format!("{}: {}", path.display(), e)))?;
        AiSearchResult::from_json(&body).map_err(|e| ServiceError::Provider(e.to_string()))
    }

    async fn metadata(&self) -> ServiceResult<SearchMetadata> {
        let path = self.root.join(METADATA_FILE);
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => serde_json::from_str(&body).map_err(|e| ServiceError::Provider(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SearchMetadata::default()),
            Err(e) => Err(ServiceError::Connectivity(format!("{}: {}", path.display(), e))),
        }
    }
}

/// Answers every query with the same in-memory result
pub struct StaticSearchService {
    result: AiSearchResult,
    metadata: SearchMetadata,
}

impl StaticSearchService {
    pub fn new(result: AiSearchResult) -> Self {
        Self {
            result,
            metadata: SearchMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: SearchMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

#[async_trait]
impl SearchService for StaticSearchService {
    async fn search(&self, request: &SearchRequest) -> ServiceResult<AiSearchResult> {
        request.validate()?;
        Ok(self.result.clone())
    }

    async fn metadata(&self) -> ServiceResult<SearchMetadata> {
        Ok(self.metadata.clone())
    }
}
