//! Tutorial manifest (`story.json`) parsing.

use std::collections::HashSet;

use crate::errors::Result;
use crate::model::StoryStep;

/// Parses a manifest into step skeletons.
///
/// Unknown fields are ignored. Any `fullContent` in the manifest is dropped,
/// since rendered prose is only ever produced by assembly.
pub fn parse_manifest(json: &str) -> Result<Vec<StoryStep>> {
    let mut steps: Vec<StoryStep> = serde_json::from_str(json)?;

    for step in &mut steps {
        step.full_content = None;
        for sub in &mut step.subsections {
            sub.full_content = None;
        }
    }

    Ok(steps)
}

/// Keys that appear more than once across steps and subsections.
pub fn duplicate_keys(steps: &[StoryStep]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    let keys = steps
        .iter()
        .flat_map(|s| std::iter::once(&s.key).chain(s.subsections.iter().map(|sub| &sub.key)));

    for key in keys {
        if !seen.insert(key.as_str()) && !duplicates.contains(key) {
            duplicates.push(key.clone());
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoryError;
    use crate::model::Highlight;

    const MANIFEST: &str = r#"[
  {
    "key": "connect_wallet",
    "title": "Connect Wallet",
    "copy": "Connect to the network."
  },
  {
    "key": "encrypt_input",
    "title": "Encrypt Input",
    "copy": "Encrypt the rating.",
    "highlight": [3, 5],
    "fullContent": "<p>stale</p>",
    "subsections": [
      {
        "key": "encrypt_instance",
        "title": "Create Instance",
        "copy": "Create the instance.",
        "scrollAnchor": "step-1-create-instance",
        "subsections": [{ "key": "too_deep", "title": "x", "copy": "y" }]
      },
      {
        "key": "encrypt_contract",
        "title": "Contract Side",
        "copy": "The receiving contract.",
        "codeKey": "contract"
      }
    ]
  }
]"#;

    #[test]
    fn test_parse_manifest() {
        let steps = parse_manifest(MANIFEST).unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].key, "connect_wallet");
        assert!(steps[0].subsections.is_empty());
        assert_eq!(steps[1].highlight, Some(Highlight::new(3, 5)));
        assert_eq!(steps[1].full_content, None);
        assert_eq!(steps[1].subsections.len(), 2);
        assert_eq!(
            steps[1].subsections[0].scroll_anchor.as_deref(),
            Some("step-1-create-instance")
        );
        assert_eq!(steps[1].subsections[1].code_key.as_deref(), Some("contract"));
    }

    #[test]
    fn test_parse_manifest_rejects_non_array() {
        let err = parse_manifest(r#"{"key": "a"}"#).unwrap_err();
        assert!(matches!(err, StoryError::JsonParse(_)));
    }

    #[test]
    fn test_parse_manifest_requires_title() {
        assert!(parse_manifest(r#"[{"key": "a", "copy": "c"}]"#).is_err());
    }

    #[test]
    fn test_empty_manifest() {
        assert!(parse_manifest("[]").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_keys() {
        let steps = parse_manifest(
            r#"[
            {"key": "a", "title": "A", "copy": "", "subsections": [
                {"key": "b", "title": "B", "copy": ""},
                {"key": "a", "title": "A again", "copy": ""}
            ]},
            {"key": "b", "title": "B", "copy": ""}
        ]"#,
        )
        .unwrap();

        assert_eq!(duplicate_keys(&steps), vec!["a".to_string(), "b".to_string()]);
        assert!(duplicate_keys(&parse_manifest(MANIFEST).unwrap()).is_empty());
    }
}
