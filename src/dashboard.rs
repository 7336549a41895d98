//! One-shot composition of every derived view over a search result

use crate::adjacency::{AdjacencyIndex, DroppedLink, GraphResult};
use crate::analytics::{aggregate, Analytics};
use crate::config::AnalyticsConfig;
use crate::schema::{AiSearchResult, NodeKind, Summary};
use crate::themes::{ThemeExtractor, ThemeTerm};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Graph facts a renderer needs before it starts a layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphOverview {
    pub nodes: usize,
    pub links: usize,
    pub kinds: Vec<(NodeKind, usize)>,
    /// Links skipped for referencing unknown nodes
    pub dropped_links: Vec<DroppedLink>,
}

/// Snapshot of all derived data for one result
///
/// Rebuilt from scratch for every result; nothing carries over between
/// snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    #[serde(flatten)]
    pub analytics: Analytics,
    pub themes: Vec<ThemeTerm>,
    pub graph: GraphOverview,
}

impl Dashboard {
    /// Fails only when the graph violates the configured link policy
    pub fn build(result: &AiSearchResult, config: &AnalyticsConfig) -> GraphResult<Self> {
        let index = AdjacencyIndex::build(&result.graph, config.graph.link_policy)?;
        Ok(Self::from_index(result, &index, config))
    }

    // `index` must have been built from `result.graph`
    fn from_index(result: &AiSearchResult, index: &AdjacencyIndex, config: &AnalyticsConfig) -> Self {
        let items = &result.detailed_report;
        Self {
            generated_at: Utc::now(),
            summary: result.summary.clone(),
            analytics: aggregate(items),
            themes: ThemeExtractor::from_config(&config.themes).extract(items),
            graph: GraphOverview {
                nodes: index.node_count(),
                links: index.link_count(),
                kinds: result.graph.kind_counts(),
                dropped_links: index.dropped().to_vec(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::{GraphError, LinkPolicy};
    use crate::schema::{GraphLink, GraphNode, KnowledgeGraph, ReportItem};

    fn result_with_dangling_link() -> AiSearchResult {
        AiSearchResult {
            summary: Summary::default(),
            detailed_report: vec![
                ReportItem::new("Bone density in orbit", 2012, "Mouse", "RR-1").with_findings("Bone loss observed"),
            ],
            graph: KnowledgeGraph::new(
                vec![GraphNode::new("Mouse", "organism"), GraphNode::new("RR-1", "experiment")],
                vec![
                    GraphLink::new("Mouse", "RR-1", "flown on"),
                    GraphLink::new("Mouse", "Bone", "shows"),
                ],
            ),
        }
    }

    #[test]
    fn graph_counts_agree_with_node_kinds() {
        let config = AnalyticsConfig::from_yaml("graph:\n  link_policy: drop\n").unwrap();
        let result = result_with_dangling_link();
        let dashboard = Dashboard::build(&result, &config).unwrap();

        let kinds_total: usize = dashboard.graph.kinds.iter().map(|(_, n)| n).sum();
        assert_eq!(dashboard.graph.nodes, result.graph.nodes.len());
        assert_eq!(kinds_total, dashboard.graph.nodes);
        assert_eq!(
            dashboard.graph.links + dashboard.graph.dropped_links.len(),
            result.graph.links.len()
        );
    }

    #[test]
    fn default_policy_rejects_dangling_links() {
        let err = Dashboard::build(&result_with_dangling_link(), &AnalyticsConfig::default()).unwrap_err();
        assert!(matches!(err, GraphError::UnknownEndpoint { index: 1, .. }));
    }

    #[test]
    fn drop_policy_reports_dropped_links() {
        let mut config = AnalyticsConfig::default();
        config.graph.link_policy = LinkPolicy::Drop;
        let dashboard = Dashboard::build(&result_with_dangling_link(), &config).unwrap();

        assert_eq!(dashboard.graph.nodes, 2);
        assert_eq!(dashboard.graph.links, 1);
        assert_eq!(dashboard.graph.dropped_links.len(), 1);
        assert_eq!(dashboard.graph.dropped_links[0].target, "Bone");
        assert_eq!(dashboard.analytics.stats.total_reports, 1);
        assert_eq!(dashboard.themes[0].text, "bone");
    }

    #[test]
    fn serialized_snapshot_flattens_analytics() {
        let mut config = AnalyticsConfig::default();
        config.graph.link_policy = LinkPolicy::Drop;
        let dashboard = Dashboard::build(&result_with_dangling_link(), &config).unwrap();
        let value = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(value["stats"]["top_mission"], "Rodent Research");
        assert!(value["mission_distribution"].is_array());
        assert!(value["matrix"]["cells"].is_array());
        assert_eq!(value["graph"]["kinds"][0], serde_json::json!(["experiment", 1]));
    }
}
