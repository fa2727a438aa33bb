//! Discovery of tutorials under a content directory.

use std::path::Path;

use crate::errors::Result;

/// Lists tutorial names: sub-directories of `content_dir` holding a manifest.
///
/// Names are sorted.
pub fn list_tutorials(content_dir: &Path, manifest_name: &str) -> Result<Vec<String>> {
    let pattern = content_dir.join("*").join(manifest_name);
    let pattern = pattern.to_string_lossy();

    let mut names: Vec<String> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter_map(|manifest| {
            manifest
                .parent()
                .and_then(|dir| dir.file_name())
                .map(|name| name.to_string_lossy().into_owned())
        })
        .collect();

    names.sort();
    names.dedup();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_tutorials() {
        let dir = tempdir().unwrap();
        for name in ["survey-tutorial", "voting", "drafts"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("survey-tutorial/story.json"), "[]").unwrap();
        fs::write(dir.path().join("voting/story.json"), "[]").unwrap();
        fs::write(dir.path().join("drafts/notes.md"), "# Notes").unwrap();

        let names = list_tutorials(dir.path(), "story.json").unwrap();
        assert_eq!(names, vec!["survey-tutorial", "voting"]);
    }

    #[test]
    fn test_list_tutorials_empty() {
        let dir = tempdir().unwrap();
        assert!(list_tutorials(dir.path(), "story.json").unwrap().is_empty());
    }
}
