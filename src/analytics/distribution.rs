//! Item counts per mission category

use super::count_first_seen;
use crate::mission::{normalize, MissionCategory};
use crate::schema::ReportItem;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissionShare {
    pub mission: MissionCategory,
    pub count: usize,
}

/// Categories sorted by descending count. Equal counts keep the order in
/// which their categories first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MissionDistribution {
    pub shares: Vec<MissionShare>,
}

impl MissionDistribution {
    pub fn from_items(items: &[ReportItem]) -> Self {
        let mut shares: Vec<MissionShare> =
            count_first_seen(items.iter().map(|item| normalize(&item.mission_or_experiment)))
                .into_iter()
                .map(|(mission, count)| MissionShare { mission, count })
                .collect();
        // stable: ties stay in first-seen order
        shares.sort_by(|a, b| b.count.cmp(&a.count));
        Self { shares }
    }

    pub fn count(&self, mission: MissionCategory) -> usize {
        self.shares
            .iter()
            .find(|share| share.mission == mission)
            .map_or(0, |share| share.count)
    }

    /// Sum of all counts; equals the number of items aggregated
    pub fn total(&self) -> usize {
        self.shares.iter().map(|share| share.count).sum()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
