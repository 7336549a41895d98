//! Shared fixtures for integration tests

#![allow(dead_code)]

use bionova::{AiSearchResult, ReportItem};
use std::path::PathBuf;

/// Root of `tests/fixtures`
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Directory holding the sample `result.json`
pub fn search_dir() -> PathBuf {
    fixtures_root().join("search")
}

pub fn load_fixture(name: &str) -> AiSearchResult {
    let path = fixtures_root().join(name);
    let body = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e));
    AiSearchResult::from_json(&body).unwrap_or_else(|e| panic!("parsing {}: {}", path.display(), e))
}

pub fn sample_result() -> AiSearchResult {
    load_fixture("search/result.json")
}

pub fn item(year: i32, organism: &str, mission: &str) -> ReportItem {
    ReportItem::new(format!("{} study {}", organism, year), year, organism, mission)
}
