// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The serde model of the wire format.

use canopy_hierarchy::Node;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// One node of the fetched document.
///
/// Mirrors the wire shape one-to-one. `value` tolerates the production
/// document's habit of encoding numbers as JSON strings; the coercion is
/// explicit and anything non-numeric is a decode error rather than a
/// silent zero.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Document {
    /// Display name.
    pub name: String,
    /// Category tag, present on leaves.
    #[serde(default)]
    pub category: Option<String>,
    /// Weight: a JSON number or a numeric string.
    #[serde(default, deserialize_with = "number_or_string")]
    pub value: Option<f64>,
    /// Child nodes, absent on leaves.
    #[serde(default)]
    pub children: Vec<Document>,
}

impl From<Document> for Node {
    fn from(doc: Document) -> Self {
        Self {
            name: doc.name,
            category: doc.category,
            value: doc.value,
            children: doc.children.into_iter().map(Self::from).collect(),
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("value is not numeric: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_structure() {
        let doc = Document {
            name: "root".into(),
            category: None,
            value: None,
            children: vec![Document {
                name: "leaf".into(),
                category: Some("X".into()),
                value: Some(4.0),
                children: vec![],
            }],
        };
        let node = Node::from(doc);
        assert_eq!(node.name, "root");
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].is_leaf());
        assert_eq!(node.children[0].value, Some(4.0));
    }

    #[test]
    fn value_accepts_number_and_string() {
        let a: Document = serde_json::from_str(r#"{"name": "n", "value": 12.5}"#).unwrap();
        let b: Document = serde_json::from_str(r#"{"name": "n", "value": "12.5"}"#).unwrap();
        assert_eq!(a.value, Some(12.5));
        assert_eq!(b.value, Some(12.5));
    }

    #[test]
    fn whitespace_around_string_values_is_tolerated() {
        let doc: Document = serde_json::from_str(r#"{"name": "n", "value": " 42 "}"#).unwrap();
        assert_eq!(doc.value, Some(42.0));
    }
}
