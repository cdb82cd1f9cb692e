//! TOML run configuration file.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Run configuration as read from a TOML file. All keys are optional.
///
/// ```toml
/// stream_name = "telemax-network-data-stream"
/// record_count = 10
/// delay = "1s"
/// region_tag = "eu-west-2"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub stream_name: Option<String>,
    pub record_count: Option<u64>,
    pub delay: Option<String>,
    pub region_tag: Option<String>,
    pub seed: Option<u64>,
    pub endpoint_url: Option<String>,
    pub dry_run: Option<bool>,
}

impl ConfigFile {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse run configuration")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let file = ConfigFile::from_toml_str(
            r#"
stream_name = "links"
record_count = 25
delay = "250ms"
region_tag = "us-east-1"
seed = 7
endpoint_url = "http://localhost:4566"
dry_run = true
"#,
        )
        .unwrap();

        assert_eq!(file.stream_name.as_deref(), Some("links"));
        assert_eq!(file.record_count, Some(25));
        assert_eq!(file.delay.as_deref(), Some("250ms"));
        assert_eq!(file.region_tag.as_deref(), Some("us-east-1"));
        assert_eq!(file.seed, Some(7));
        assert_eq!(file.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(file.dry_run, Some(true));
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        assert_eq!(ConfigFile::from_toml_str("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ConfigFile::from_toml_str("batch_size = 10").is_err());
    }
}
