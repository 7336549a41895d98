//! Connectivity lookup over knowledge-graph nodes and links
//!
//! Built once per graph and read-only afterwards. Links are recorded as
//! unordered pairs, so `connected(a, b) == connected(b, a)` regardless of
//! link direction, and every node is connected to itself. Node positions
//! owned by a layout engine never enter the index.

use crate::schema::{GraphLink, KnowledgeGraph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("link {index} ({from} -> {to}) references unknown node '{missing}'")]
    UnknownEndpoint {
        index: usize,
        from: String,
        to: String,
        missing: String,
    },

    #[error("Node not found: {0}")]
    UnknownNode(String),

    #[error("duplicate node id: {0}")]
    DuplicateNode(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Handling of links whose endpoints are not in the node set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Fail index construction
    #[default]
    Reject,
    /// Skip the link and record it as dropped
    Drop,
}

/// A link skipped under `LinkPolicy::Drop`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedLink {
    /// Position in the original link list
    pub index: usize,
    pub source: String,
    pub target: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    ids: Vec<String>,
    positions: HashMap<String, usize>,
    /// Both orientations of every linked pair
    pairs: HashSet<(usize, usize)>,
    neighbors: Vec<BTreeSet<usize>>,
    incident: Vec<Vec<usize>>,
    link_count: usize,
    dropped: Vec<DroppedLink>,
}

impl AdjacencyIndex {
    pub fn build(graph: &KnowledgeGraph, policy: LinkPolicy) -> GraphResult<Self> {
        let mut index = Self::default();
        for node in &graph.nodes {
            if index.positions.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
            index.positions.insert(node.id.clone(), index.ids.len());
            index.ids.push(node.id.clone());
        }
        index.neighbors = vec![BTreeSet::new(); index.ids.len()];
        index.incident = vec![Vec::new(); index.ids.len()];

        for (i, link) in graph.links.iter().enumerate() {
            match index.resolve(i, link) {
                Ok((a, b)) => index.record(i, a, b),
                Err(err) => match policy {
                    LinkPolicy::Reject => return Err(err),
                    LinkPolicy::Drop => {
                        tracing::warn!(link = i, error = %err, "dropping link");
                        index.dropped.push(DroppedLink {
                            index: i,
                            source: link.source_id().to_string(),
                            target: link.target_id().to_string(),
                            label: link.label.clone(),
                        });
                    }
                },
            }
        }

        tracing::debug!(
            nodes = index.ids.len(),
            links = index.link_count,
            dropped = index.dropped.len(),
            "built adjacency index"
        );
        Ok(index)
    }

    fn resolve(&self, i: usize, link: &GraphLink) -> GraphResult<(usize, usize)> {
        let lookup = |id: &str| {
            self.positions
                .get(id)
                .copied()
                .ok_or_else(|| GraphError::UnknownEndpoint {
                    index: i,
                    from: link.source_id().to_string(),
                    to: link.target_id().to_string(),
                    missing: id.to_string(),
                })
        };
        Ok((lookup(link.source_id())?, lookup(link.target_id())?))
    }

    fn record(&mut self, link: usize, a: usize, b: usize) {
        self.pairs.insert((a, b));
        self.pairs.insert((b, a));
        if a != b {
            self.neighbors[a].insert(b);
            self.neighbors[b].insert(a);
        }
        self.incident[a].push(link);
        if a != b {
            self.incident[b].push(link);
        }
        self.link_count += 1;
    }

    fn position(&self, id: &str) -> GraphResult<usize> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Whether `a` and `b` are the same node or directly linked
    pub fn connected(&self, a: &str, b: &str) -> GraphResult<bool> {
        let a = self.position(a)?;
        let b = self.position(b)?;
        Ok(a == b || self.pairs.contains(&(a, b)))
    }

    /// Nodes directly linked to `id`, excluding itself, in node order
    pub fn neighbors(&self, id: &str) -> GraphResult<Vec<&str>> {
        let pos = self.position(id)?;
        Ok(self.neighbors[pos]
            .iter()
            .map(|&n| self.ids[n].as_str())
            .collect())
    }

    /// Indices into the original link list of links touching `id`
    pub fn incident_links(&self, id: &str) -> GraphResult<&[usize]> {
        let pos = self.position(id)?;
        Ok(&self.incident[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Links accepted into the index
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    pub fn dropped(&self) -> &[DroppedLink] {
        &self.dropped
    }
}
