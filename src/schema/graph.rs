//! Knowledge graph nodes and links as delivered by the provider

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Experiment,
    Organism,
    Result,
    Condition,
    Other,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::Experiment,
        NodeKind::Organism,
        NodeKind::Result,
        NodeKind::Condition,
        NodeKind::Other,
    ];

    /// Classify a provider type label; unrecognized labels are `Other`
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "experiment" => NodeKind::Experiment,
            "organism" => NodeKind::Organism,
            "result" => NodeKind::Result,
            "condition" => NodeKind::Condition,
            _ => NodeKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Experiment => "experiment",
            NodeKind::Organism => "organism",
            NodeKind::Result => "result",
            NodeKind::Condition => "condition",
            NodeKind::Other => "other",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the knowledge graph
///
/// Layout engines attach position and velocity fields (`x`, `y`, `vx`, ...)
/// to nodes they simulate. Those are not part of the node and are ignored
/// when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphNode {
    /// Unique key, also used as the display label
    pub id: String,
    /// Free-text type label as sent by the provider
    #[serde(rename = "type")]
    pub node_type: String,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::from_label(&self.node_type)
    }
}

/// One end of a link: a node id, or a node object once a layout engine
/// has resolved the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkEndpoint {
    Id(String),
    Node(GraphNode),
}

impl LinkEndpoint {
    pub fn id(&self) -> &str {
        match self {
            LinkEndpoint::Id(id) => id,
            LinkEndpoint::Node(node) => &node.id,
        }
    }
}

impl From<&str> for LinkEndpoint {
    fn from(id: &str) -> Self {
        LinkEndpoint::Id(id.to_string())
    }
}

impl From<String> for LinkEndpoint {
    fn from(id: String) -> Self {
        LinkEndpoint::Id(id)
    }
}

/// A labelled relationship between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GraphLink {
    #[schemars(with = "String")]
    pub source: LinkEndpoint,
    #[schemars(with = "String")]
    pub target: LinkEndpoint,
    /// Relationship label (e.g. "studied in")
    pub label: String,
}

impl GraphLink {
    pub fn new(
        source: impl Into<LinkEndpoint>,
        target: impl Into<LinkEndpoint>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    pub fn source_id(&self) -> &str {
        self.source.id()
    }

    pub fn target_id(&self) -> &str {
        self.target.id()
    }
}

/// Entities and relationships among the report items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KnowledgeGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl KnowledgeGraph {
    pub fn new(nodes: Vec<GraphNode>, links: Vec<GraphLink>) -> Self {
        Self { nodes, links }
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Number of nodes of each kind, in `NodeKind::ALL` order, omitting kinds
    /// with no nodes
    pub fn kind_counts(&self) -> Vec<(NodeKind, usize)> {
        NodeKind::ALL
            .iter()
            .map(|kind| (*kind, self.nodes.iter().filter(|n| n.kind() == *kind).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
