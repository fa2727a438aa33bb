//! Story steps and subsections as declared by a tutorial manifest.

use serde::{Deserialize, Serialize};

use super::snippet::Highlight;

/// Prose shown for a step whose content file could not be read.
pub const PLACEHOLDER_CONTENT: &str = "<p>Content loading...</p>";

/// A top-level unit of the tutorial narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryStep {
    /// Unique key; also the name of the step's content file.
    pub key: String,
    pub title: String,
    /// Plain-text summary.
    pub copy: String,
    /// Snippet to display instead of the step's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_key: Option<String>,
    /// Overrides the snippet's own highlight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
    /// Rendered HTML, filled in during assembly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_anchor: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Subsection>,
}

/// A navigational entry under a step.
///
/// Subsections share their parent's prose and cannot nest further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsection {
    pub key: String,
    pub title: String,
    pub copy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_anchor: Option<String>,
}

impl StoryStep {
    /// Creates a step skeleton with no content.
    pub fn new(key: impl Into<String>, title: impl Into<String>, copy: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            copy: copy.into(),
            code_key: None,
            highlight: None,
            full_content: None,
            scroll_anchor: None,
            subsections: Vec::new(),
        }
    }

    /// Sets the code key.
    pub fn with_code_key(mut self, code_key: impl Into<String>) -> Self {
        self.code_key = Some(code_key.into());
        self
    }

    /// Appends a subsection.
    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsections.push(subsection);
        self
    }

    /// The key of the snippet this step displays.
    pub fn effective_code_key(&self) -> &str {
        self.code_key.as_deref().unwrap_or(&self.key)
    }

    /// Looks up a subsection by key.
    pub fn subsection(&self, key: &str) -> Option<&Subsection> {
        self.subsections.iter().find(|s| s.key == key)
    }
}

impl Subsection {
    /// Creates a subsection skeleton with no content.
    pub fn new(key: impl Into<String>, title: impl Into<String>, copy: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            copy: copy.into(),
            code_key: None,
            highlight: None,
            full_content: None,
            scroll_anchor: None,
        }
    }

    /// Sets the code key.
    pub fn with_code_key(mut self, code_key: impl Into<String>) -> Self {
        self.code_key = Some(code_key.into());
        self
    }

    /// The key of the snippet this subsection displays under `parent`.
    ///
    /// Resolves `subsection.codeKey`, then `parent.codeKey`, then `parent.key`.
    pub fn effective_code_key<'a>(&'a self, parent: &'a StoryStep) -> &'a str {
        self.code_key
            .as_deref()
            .unwrap_or_else(|| parent.effective_code_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_code_key_defaults_to_step_key() {
        let step = StoryStep::new("encrypt_input", "Encrypt", "Encrypt the rating");
        let sub = Subsection::new("encrypt_setup", "Setup", "Create the instance");

        assert_eq!(step.effective_code_key(), "encrypt_input");
        assert_eq!(sub.effective_code_key(&step), "encrypt_input");
    }

    #[test]
    fn test_effective_code_key_prefers_step_code_key() {
        let step = StoryStep::new("compute", "Compute", "Aggregate").with_code_key("contract");
        let sub = Subsection::new("compute_sum", "Sum", "Add ciphertexts");

        assert_eq!(sub.effective_code_key(&step), "contract");
    }

    #[test]
    fn test_effective_code_key_prefers_own_code_key() {
        let step = StoryStep::new("compute", "Compute", "Aggregate").with_code_key("contract");
        let sub = Subsection::new("compute_sum", "Sum", "Add").with_code_key("sum_helper");

        assert_eq!(sub.effective_code_key(&step), "sum_helper");
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "key": "decrypt_output",
            "title": "Decrypt",
            "copy": "Reveal the average",
            "codeKey": "decrypt",
            "highlight": [4, 9],
            "scrollAnchor": "step-3-decrypt",
            "extra": "ignored"
        }"#;
        let step: StoryStep = serde_json::from_str(json).unwrap();

        assert_eq!(step.code_key.as_deref(), Some("decrypt"));
        assert_eq!(step.highlight, Some(Highlight::new(4, 9)));
        assert_eq!(step.scroll_anchor.as_deref(), Some("step-3-decrypt"));
        assert!(step.subsections.is_empty());
        assert!(step.full_content.is_none());
    }
}
