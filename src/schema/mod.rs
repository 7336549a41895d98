//! Canonical result shapes exchanged between the query layer and consumers

mod graph;
mod report;

#[cfg(test)]
mod tests;

pub use graph::{GraphLink, GraphNode, KnowledgeGraph, LinkEndpoint, NodeKind};
pub use report::{AiSearchResult, ReportItem, Summary, NO_REFERENCE_TEXT};
