//! Report items and the top-level search result

use super::graph::KnowledgeGraph;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shown in place of a link when an item carries no source URL
pub const NO_REFERENCE_TEXT: &str = "(no NASA reference found)";

/// Plain-language overview of a result set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    /// Short summary of the findings
    pub overview: String,
    /// Year span as reported by the provider (e.g. "2010–2023")
    pub years_range: String,
    /// Notable trends
    pub highlight_points: Vec<String>,
}

/// One research record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportItem {
    /// Paper or dataset title
    pub title: String,
    /// Publication year
    pub year: i32,
    /// Organism label, free text (e.g. "Human", "Mouse", "Plant")
    pub organism: String,
    /// Mission or experiment label, free text (e.g. "ISS", "RR-1", "GLDS-242")
    pub mission_or_experiment: String,
    /// One or two sentences describing the findings
    pub main_findings: String,
    /// Reference link; `None` when no reference was found. The provider
    /// must send the key, as `null` when it has no link.
    #[schemars(required)]
    pub source_url: Option<String>,
}

impl ReportItem {
    /// Create an item with empty findings and no source link
    pub fn new(
        title: impl Into<String>,
        year: i32,
        organism: impl Into<String>,
        mission_or_experiment: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            organism: organism.into(),
            mission_or_experiment: mission_or_experiment.into(),
            main_findings: String::new(),
            source_url: None,
        }
    }

    /// Set the findings text
    pub fn with_findings(mut self, findings: impl Into<String>) -> Self {
        self.main_findings = findings.into();
        self
    }

    /// Set the source link
    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn has_source(&self) -> bool {
        self.source_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// The source link, or the "no reference" placeholder
    pub fn source_label(&self) -> &str {
        match self.source_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => NO_REFERENCE_TEXT,
        }
    }
}

/// Full payload returned by the search provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AiSearchResult {
    pub summary: Summary,
    pub detailed_report: Vec<ReportItem>,
    pub graph: KnowledgeGraph,
}

impl AiSearchResult {
    /// Parse a provider response body
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// JSON schema the provider's response must conform to
    pub fn json_schema() -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(schemars::schema_for!(AiSearchResult))
    }
}
