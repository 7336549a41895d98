//! Per-organism item counts by year

use super::count_first_seen;
use crate::schema::ReportItem;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendRow {
    pub year: i32,
    /// One count per series, aligned with `OrganismTrend::organisms`
    pub counts: Vec<usize>,
}

/// Organism series over the years present in the data
///
/// Series are the distinct organisms in first-seen order. Rows cover only
/// years that occur in the input, ascending; gaps between years are not
/// filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganismTrend {
    pub organisms: Vec<String>,
    pub rows: Vec<TrendRow>,
}

impl OrganismTrend {
    pub fn from_items(items: &[ReportItem]) -> Self {
        let organisms: Vec<&str> = count_first_seen(items.iter().map(|item| item.organism.as_str()))
            .into_iter()
            .map(|(organism, _)| organism)
            .collect();
        let column: HashMap<&str, usize> = organisms
            .iter()
            .enumerate()
            .map(|(i, organism)| (*organism, i))
            .collect();

        let mut by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for item in items {
            let row = by_year
                .entry(item.year)
                .or_insert_with(|| vec![0; organisms.len()]);
            if let Some(&col) = column.get(item.organism.as_str()) {
                row[col] += 1;
            }
        }

        Self {
            organisms: organisms.into_iter().map(str::to_string).collect(),
            rows: by_year
                .into_iter()
                .map(|(year, counts)| TrendRow { year, counts })
                .collect(),
        }
    }

    /// Items for `organism` in `year`; 0 when either is absent
    pub fn count(&self, year: i32, organism: &str) -> usize {
        let Some(col) = self.organisms.iter().position(|o| o == organism) else {
            return 0;
        };
        self.rows
            .iter()
            .find(|row| row.year == year)
            .and_then(|row| row.counts.get(col).copied())
            .unwrap_or(0)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|row| row.year)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
