//! Organism by mission-category count table

use crate::mission::{normalize, MissionCategory};
use crate::schema::ReportItem;
use serde::Serialize;

/// Count table indexed by (organism, mission category)
///
/// Rows are the distinct organisms sorted lexically, columns the distinct
/// categories sorted by display label. Every cell exists, starting at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganismMissionMatrix {
    pub organisms: Vec<String>,
    pub missions: Vec<MissionCategory>,
    /// `cells[row][col]`, rows aligned with `organisms`, columns with `missions`
    pub cells: Vec<Vec<usize>>,
    /// Largest cell value, used to normalize color scales
    pub max_count: usize,
}

impl OrganismMissionMatrix {
    pub fn from_items(items: &[ReportItem]) -> Self {
        let mut organisms: Vec<String> = items.iter().map(|item| item.organism.clone()).collect();
        organisms.sort();
        organisms.dedup();

        let mut missions: Vec<MissionCategory> = Vec::new();
        for item in items {
            let category = normalize(&item.mission_or_experiment);
            if !missions.contains(&category) {
                missions.push(category);
            }
        }
        missions.sort_by_key(|category| category.as_str());

        let mut cells = vec![vec![0; missions.len()]; organisms.len()];
        let mut max_count = 0;
        for item in items {
            let category = normalize(&item.mission_or_experiment);
            let (Ok(row), Some(col)) = (
                organisms.binary_search(&item.organism),
                missions.iter().position(|m| *m == category),
            ) else {
                continue;
            };
            cells[row][col] += 1;
            max_count = max_count.max(cells[row][col]);
        }

        Self {
            organisms,
            missions,
            cells,
            max_count,
        }
    }

    /// Count for one cell; 0 when the organism or mission is absent
    pub fn get(&self, organism: &str, mission: MissionCategory) -> usize {
        let row = self.organisms.iter().position(|o| o == organism);
        let col = self.missions.iter().position(|m| *m == mission);
        match (row, col) {
            (Some(row), Some(col)) => self.cells[row][col],
            _ => 0,
        }
    }

    /// Cell count relative to `max_count`, in `[0, 1]`
    pub fn intensity(&self, organism: &str, mission: MissionCategory) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        self.get(organism, mission) as f64 / self.max_count as f64
    }

    /// Sum over all cells; equals the number of items aggregated
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }
}
