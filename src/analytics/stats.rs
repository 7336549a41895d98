//! Headline statistics

use super::modal;
use crate::mission::normalize;
use crate::schema::ReportItem;
use serde::Serialize;

/// Placeholder for statistics that have no value
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub total_reports: usize,
    /// "2014 – 2021", a single year for one item, or "N/A"
    pub year_range: String,
    pub top_organism: String,
    /// Display label of the most common mission category
    pub top_mission: String,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            total_reports: 0,
            year_range: NOT_AVAILABLE.to_string(),
            top_organism: NOT_AVAILABLE.to_string(),
            top_mission: NOT_AVAILABLE.to_string(),
        }
    }
}

impl AggregateStats {
    pub fn from_items(items: &[ReportItem]) -> Self {
        if items.is_empty() {
            return Self::default();
        }

        let top_organism = modal(items.iter().map(|item| item.organism.as_str()))
            .map(str::to_string)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let top_mission = modal(items.iter().map(|item| normalize(&item.mission_or_experiment)))
            .map(|category| category.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            total_reports: items.len(),
            year_range: year_range(items),
            top_organism,
            top_mission,
        }
    }
}

fn year_range(items: &[ReportItem]) -> String {
    match items {
        [] => NOT_AVAILABLE.to_string(),
        [only] => only.year.to_string(),
        _ => {
            let (min, max) = items
                .iter()
                .fold((i32::MAX, i32::MIN), |(lo, hi), item| (lo.min(item.year), hi.max(item.year)));
            format!("{} – {}", min, max)
        }
    }
}
