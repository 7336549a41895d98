//! Bionova: derived analytics for space-biology research search results
//!
//! Turns a provider's search result (summary, report items, knowledge graph)
//! into the data structures a dashboard renders.
//!
//! # Core Concepts
//!
//! - **Mission normalization**: free-text mission labels bucketed into fixed categories
//! - **Analytics**: headline stats, mission distribution, organism trend, organism×mission matrix
//! - **Themes**: frequency-ranked keywords from titles and findings
//! - **Adjacency**: constant-time "are these two nodes linked?" lookups
//!
//! Each is an independent pure transformation over the same result.
//!
//! # Example
//!
//! ```
//! use bionova::{aggregate, normalize, MissionCategory, ReportItem};
//!
//! assert_eq!(normalize("RR-5"), MissionCategory::RodentResearch);
//!
//! let items = vec![ReportItem::new("Bone loss in mice", 2016, "Mouse", "RR-3")];
//! let analytics = aggregate(&items);
//! assert_eq!(analytics.stats.top_mission, "Rodent Research");
//! ```

pub mod adjacency;
pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod mission;
pub mod schema;
pub mod service;
pub mod themes;

pub use adjacency::{AdjacencyIndex, DroppedLink, GraphError, GraphResult, LinkPolicy};
pub use analytics::{
    aggregate, AggregateStats, Analytics, MissionDistribution, MissionShare, OrganismMissionMatrix,
    OrganismTrend, TrendRow,
};
pub use config::{AnalyticsConfig, ConfigError, ConfigResult, GraphConfig, ThemeConfig};
pub use dashboard::{Dashboard, GraphOverview};
pub use mission::{normalize, MissionCategory};
pub use schema::{
    AiSearchResult, GraphLink, GraphNode, KnowledgeGraph, LinkEndpoint, NodeKind, ReportItem, Summary,
};
pub use service::{
    AdvancedFilters, FileSearchService, SearchMetadata, SearchRequest, SearchService,
    ServiceError, ServiceResult, StaticSearchService, STORED_RESULT_QUERY,
};
pub use themes::{extract_themes, ThemeExtractor, ThemeTerm};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
