//! Mission label normalization
//!
//! Free-text mission and platform labels ("ISS Expedition 60", "RR-10",
//! "GLDS-242") are bucketed into a closed set of categories by an ordered
//! rule list. Rules are evaluated top to bottom against the lowercased label
//! and the first rule with a matching keyword wins, so
//! "ISS Expedition 42 GLDS-242" is ISS, not GeneLab.
//!
//! Matching is plain substring containment: any label containing `iss`
//! (including words like "tissue") lands in ISS.

use serde::{Deserialize, Serialize};

/// Canonical mission bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionCategory {
    #[serde(rename = "ISS")]
    Iss,
    #[serde(rename = "Shuttle")]
    Shuttle,
    #[serde(rename = "GeneLab")]
    GeneLab,
    #[serde(rename = "VEGGIE")]
    Veggie,
    #[serde(rename = "APH")]
    Aph,
    #[serde(rename = "Rodent Research")]
    RodentResearch,
    #[serde(rename = "Artemis")]
    Artemis,
    #[serde(rename = "Twins Study")]
    TwinsStudy,
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "Other")]
    Other,
}

impl MissionCategory {
    pub const ALL: [MissionCategory; 10] = [
        MissionCategory::Iss,
        MissionCategory::Shuttle,
        MissionCategory::GeneLab,
        MissionCategory::Veggie,
        MissionCategory::Aph,
        MissionCategory::RodentResearch,
        MissionCategory::Artemis,
        MissionCategory::TwinsStudy,
        MissionCategory::NotApplicable,
        MissionCategory::Other,
    ];

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionCategory::Iss => "ISS",
            MissionCategory::Shuttle => "Shuttle",
            MissionCategory::GeneLab => "GeneLab",
            MissionCategory::Veggie => "VEGGIE",
            MissionCategory::Aph => "APH",
            MissionCategory::RodentResearch => "Rodent Research",
            MissionCategory::Artemis => "Artemis",
            MissionCategory::TwinsStudy => "Twins Study",
            MissionCategory::NotApplicable => "N/A",
            MissionCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for MissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords that map a label to a category
struct Rule {
    keywords: &'static [&'static str],
    category: MissionCategory,
}

impl Rule {
    fn matches(&self, label: &str) -> bool {
        self.keywords.iter().any(|k| label.contains(k))
    }
}

/// Evaluated in order; first match wins
const RULES: &[Rule] = &[
    Rule { keywords: &["iss", "expedition"], category: MissionCategory::Iss },
    Rule { keywords: &["shuttle", "sts"], category: MissionCategory::Shuttle },
    Rule { keywords: &["glds"], category: MissionCategory::GeneLab },
    Rule { keywords: &["veggie"], category: MissionCategory::Veggie },
    Rule { keywords: &["aph"], category: MissionCategory::Aph },
    Rule { keywords: &["rr-", "rodent research"], category: MissionCategory::RodentResearch },
    Rule { keywords: &["artemis"], category: MissionCategory::Artemis },
    Rule { keywords: &["twins study"], category: MissionCategory::TwinsStudy },
];

/// Map a free-text mission label to its category. Total over all input.
pub fn normalize(raw: &str) -> MissionCategory {
    let label = raw.to_lowercase();
    if let Some(rule) = RULES.iter().find(|rule| rule.matches(&label)) {
        return rule.category;
    }
    if label == "n/a" {
        MissionCategory::NotApplicable
    } else {
        MissionCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_label_is_other() {
        assert_eq!(normalize(""), MissionCategory::Other);
    }

    #[test]
    fn not_applicable_is_exact_match() {
        assert_eq!(normalize("N/A"), MissionCategory::NotApplicable);
        assert_eq!(normalize("n/a"), MissionCategory::NotApplicable);
        assert_eq!(normalize(" N/A "), MissionCategory::Other);
        assert_eq!(normalize("N/A (ground control)"), MissionCategory::Other);
    }

    #[test]
    fn each_rule_keyword_maps_to_its_category() {
        let cases = [
            ("ISS", MissionCategory::Iss),
            ("Expedition 60", MissionCategory::Iss),
            ("Space Shuttle Columbia", MissionCategory::Shuttle),
            ("STS-95", MissionCategory::Shuttle),
            ("GLDS-242", MissionCategory::GeneLab),
            ("VEGGIE-03", MissionCategory::Veggie),
            ("APH-04", MissionCategory::Aph),
            ("RR-5", MissionCategory::RodentResearch),
            ("Rodent Research 9", MissionCategory::RodentResearch),
            ("Artemis I", MissionCategory::Artemis),
            ("NASA Twins Study", MissionCategory::TwinsStudy),
            ("Bion-M1", MissionCategory::Other),
        ];
        for (label, expected) in cases {
            assert_eq!(normalize(label), expected, "label {:?}", label);
        }
    }

    #[test]
    fn first_rule_in_order_wins() {
        assert_eq!(normalize("ISS Expedition 42 GLDS-242"), MissionCategory::Iss);
        // "sts" precedes "glds"
        assert_eq!(normalize("GLDS-100 from STS-131"), MissionCategory::Shuttle);
        // "rr-" would match too, but ISS comes first
        assert_eq!(normalize("RR-3 on ISS"), MissionCategory::Iss);
    }

    #[test]
    fn substring_matching_is_literal() {
        assert_eq!(normalize("Tissue chips"), MissionCategory::Iss);
        assert_eq!(normalize("Graphene"), MissionCategory::Aph);
    }

    #[test]
    fn categories_serialize_as_display_labels() {
        for category in MissionCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
            let back: MissionCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }
}
