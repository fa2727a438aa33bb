//! Configuration loading and management.

mod config_data;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::{Config, RenderConfig, SnippetConfig, WatchConfig};

use crate::errors::Result;

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["storyline.toml", ".storyline.toml"];

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}

/// Reads configuration from a specific file, or returns default if file doesn't exist.
pub fn read_config_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        read_config_file(path)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoryError;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("storyline.toml");
        fs::write(&config_path, "tutorial = \"voting\"").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_file_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".storyline.toml");
        fs::write(&config_path, "tutorial = \"voting\"").unwrap();

        let subdir = dir.path().join("content");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_file_not_found() {
        let dir = tempdir().unwrap();
        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("storyline.toml");
        fs::write(
            &config_path,
            r#"
content_dir = "public/content"
additional_snippets = ["contract", "deploy"]

[render]
footnotes = true
"#,
        )
        .unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("public/content"));
        assert_eq!(config.additional_snippets, vec!["contract", "deploy"]);
        assert!(config.render.footnotes);
        assert!(config.render.tables);
    }

    #[test]
    fn test_read_config_default() {
        let dir = tempdir().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_config_or_default_missing() {
        let dir = tempdir().unwrap();
        let config = read_config_or_default(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.tutorial, "survey-tutorial");
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("storyline.toml");
        fs::write(&config_path, "tutorial = [").unwrap();

        let err = read_config_file(&config_path).unwrap_err();
        assert!(matches!(err, StoryError::TomlParse(_)));
    }
}
