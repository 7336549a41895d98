//! Serialization tests with provider-contract fixtures

use serde_json::{json, Value};

/// Provider fixture: a complete response body
fn contract_result_fixture() -> Value {
    json!({
        "summary": {
            "overview": "Plants grown in orbit show altered root growth.",
            "years_range": "2014–2019",
            "highlight_points": ["Root skewing", "Cell wall remodeling"]
        },
        "detailed_report": [
            {
                "title": "Spaceflight root skewing in Arabidopsis",
                "year": 2014,
                "organism": "Plant",
                "mission_or_experiment": "VEGGIE-01",
                "main_findings": "Roots skewed without gravity cues.",
                "source_url": "https://genelab-data.ndc.nasa.gov/genelab/accession/GLDS-7"
            },
            {
                "title": "Lettuce nutrition on the ISS",
                "year": 2019,
                "organism": "Plant",
                "mission_or_experiment": "N/A",
                "main_findings": "Comparable nutrient content to ground controls.",
                "source_url": null
            }
        ],
        "graph": {
            "nodes": [
                {"id": "Arabidopsis", "type": "organism"},
                {"id": "VEGGIE-01", "type": "Experiment"}
            ],
            "links": [
                {"source": "Arabidopsis", "target": "VEGGIE-01", "label": "grown in"}
            ]
        }
    })
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::schema::{
        AiSearchResult, GraphLink, GraphNode, LinkEndpoint, NodeKind, ReportItem,
        NO_REFERENCE_TEXT,
    };

    #[test]
    fn result_deserializes_from_contract_fixture() {
        let result: AiSearchResult = serde_json::from_value(contract_result_fixture()).unwrap();

        assert_eq!(result.summary.highlight_points.len(), 2);
        assert_eq!(result.detailed_report.len(), 2);
        assert_eq!(result.detailed_report[0].year, 2014);
        assert_eq!(result.graph.nodes.len(), 2);
        assert_eq!(result.graph.links[0].source_id(), "Arabidopsis");
    }

    #[test]
    fn null_source_url_is_absent() {
        let result: AiSearchResult = serde_json::from_value(contract_result_fixture()).unwrap();
        let item = &result.detailed_report[1];

        assert_eq!(item.source_url, None);
        assert!(!item.has_source());
        assert_eq!(item.source_label(), NO_REFERENCE_TEXT);
    }

    #[test]
    fn missing_source_url_is_absent() {
        let item: ReportItem = serde_json::from_value(json!({
            "title": "t",
            "year": 2001,
            "organism": "Human",
            "mission_or_experiment": "STS-95",
            "main_findings": "f"
        }))
        .unwrap();
        assert_eq!(item.source_url, None);
    }

    #[test]
    fn empty_source_url_counts_as_missing() {
        let item = ReportItem::new("t", 2001, "Human", "ISS").with_source("");
        assert!(!item.has_source());
        assert_eq!(item.source_label(), NO_REFERENCE_TEXT);
    }

    #[test]
    fn link_endpoint_accepts_resolved_node_objects() {
        let link: GraphLink = serde_json::from_value(json!({
            "source": {"id": "A", "type": "organism", "x": 12.5, "y": -3.0, "vx": 0.1, "vy": 0.0},
            "target": "B",
            "label": "studied in"
        }))
        .unwrap();

        assert_eq!(link.source_id(), "A");
        assert_eq!(link.target_id(), "B");
        assert!(matches!(link.source, LinkEndpoint::Node(_)));
    }

    #[test]
    fn link_endpoint_id_serializes_as_plain_string() {
        let link = GraphLink::new("A", "B", "studied in");
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["source"], json!("A"));
        assert_eq!(value["target"], json!("B"));
    }

    #[test]
    fn node_layout_fields_are_ignored() {
        let node: GraphNode = serde_json::from_value(json!({
            "id": "Mouse",
            "type": "organism",
            "x": 100.0,
            "y": 40.0,
            "fx": null
        }))
        .unwrap();
        assert_eq!(node, GraphNode::new("Mouse", "organism"));
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({"id": "Mouse", "type": "organism"}));
    }

    #[test]
    fn node_kind_is_case_insensitive() {
        assert_eq!(GraphNode::new("x", "Experiment").kind(), NodeKind::Experiment);
        assert_eq!(GraphNode::new("x", "CONDITION").kind(), NodeKind::Condition);
        assert_eq!(GraphNode::new("x", "dataset").kind(), NodeKind::Other);
        assert_eq!(GraphNode::new("x", "").kind(), NodeKind::Other);
    }

    #[test]
    fn kind_counts_skip_absent_kinds() {
        let result: AiSearchResult = serde_json::from_value(contract_result_fixture()).unwrap();
        assert_eq!(
            result.graph.kind_counts(),
            vec![(NodeKind::Experiment, 1), (NodeKind::Organism, 1)]
        );
    }

    #[test]
    fn missing_top_level_section_is_rejected() {
        let mut body = contract_result_fixture();
        body.as_object_mut().unwrap().remove("graph");
        assert!(serde_json::from_value::<AiSearchResult>(body).is_err());
    }

    #[test]
    fn json_schema_describes_provider_contract() {
        let schema = AiSearchResult::json_schema().unwrap();
        let properties = &schema["properties"];

        assert!(properties.get("summary").is_some());
        assert!(properties.get("detailed_report").is_some());
        assert!(properties.get("graph").is_some());
        assert_required(&schema, &["summary", "detailed_report", "graph"]);

        let defs = &schema["$defs"];
        assert_required(&defs["Summary"], &["overview", "years_range", "highlight_points"]);
        assert_required(
            &defs["ReportItem"],
            &["title", "year", "organism", "mission_or_experiment", "main_findings", "source_url"],
        );
        assert_required(&defs["KnowledgeGraph"], &["nodes", "links"]);
        assert_required(&defs["GraphLink"], &["source", "target", "label"]);
    }

    #[test]
    fn json_schema_source_url_is_required_but_nullable() {
        let schema = AiSearchResult::json_schema().unwrap();
        let source_url = &schema["$defs"]["ReportItem"]["properties"]["source_url"];

        let types: Vec<&str> = source_url["type"]
            .as_array()
            .expect("source_url type should list string and null")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(types.contains(&"string"));
        assert!(types.contains(&"null"));
    }

    fn assert_required(schema: &Value, fields: &[&str]) {
        let mut required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap_or_else(|| panic!("no required list in {}", schema))
            .iter()
            .filter_map(Value::as_str)
            .collect();
        let mut expected = fields.to_vec();
        required.sort_unstable();
        expected.sort_unstable();
        assert_eq!(required, expected, "required fields of {}", schema);
    }

    #[test]
    fn result_roundtrips_through_json_text() {
        let original: AiSearchResult = serde_json::from_value(contract_result_fixture()).unwrap();
        let text = serde_json::to_string(&original).unwrap();
        let parsed = AiSearchResult::from_json(&text).unwrap();
        assert_eq!(parsed, original);
    }
}
