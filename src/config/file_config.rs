use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub snapshot_path: Option<String>,
    /// Whitespace separated articles, e.g. "The El La"
    pub ignored_articles: Option<String>,
    pub initial_user: Option<String>,
    /// An `EnvFilter` directive such as "info" or "sonic_library=debug"
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            ignored_articles = "The Die Der"
            initial_user = "root"
            "#,
        )
        .unwrap();
        assert_eq!(config.ignored_articles.as_deref(), Some("The Die Der"));
        assert_eq!(config.initial_user.as_deref(), Some("root"));
        assert!(config.snapshot_path.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn load_reports_parse_errors() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "initial_user = [").unwrap();
        let err = FileConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
