//! Dashboard statistics derived from report items
//!
//! Every aggregate here is a pure function of the item list and is rebuilt
//! from scratch for each result. Empty input yields explicit empty values,
//! never an error.
//!
//! Where a count has to be broken by a tie, keys are ordered by first
//! appearance in the input sequence.

mod distribution;
mod matrix;
mod stats;
mod trend;

pub use distribution::{MissionDistribution, MissionShare};
pub use matrix::OrganismMissionMatrix;
pub use stats::{AggregateStats, NOT_AVAILABLE};
pub use trend::{OrganismTrend, TrendRow};

use crate::schema::ReportItem;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// All aggregates for one result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub stats: AggregateStats,
    pub mission_distribution: MissionDistribution,
    pub organism_trend: OrganismTrend,
    pub matrix: OrganismMissionMatrix,
}

/// Compute every aggregate over `items`
pub fn aggregate(items: &[ReportItem]) -> Analytics {
    tracing::debug!(items = items.len(), "aggregating report items");
    Analytics {
        stats: AggregateStats::from_items(items),
        mission_distribution: MissionDistribution::from_items(items),
        organism_trend: OrganismTrend::from_items(items),
        matrix: OrganismMissionMatrix::from_items(items),
    }
}

/// Count occurrences of each key, in order of first appearance.
pub(crate) fn count_first_seen<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut position: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match position.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// Most frequent key. Ties go to the key seen first.
pub(crate) fn modal<K, I>(keys: I) -> Option<K>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut best: Option<(K, usize)> = None;
    for (key, count) in count_first_seen(keys) {
        match best {
            Some((_, top)) if top >= count => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, _)| key)
}
