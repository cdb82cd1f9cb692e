//! Run configuration.
//!
//! Values are resolved with the following precedence, highest first:
//! CLI flags, environment variables, the TOML config file, defaults.

pub mod args;
pub mod duration;
pub mod file;

pub use args::RunArgs;
pub use duration::parse_duration;
pub use file::ConfigFile;

use std::time::Duration;

pub const DEFAULT_STREAM_NAME: &str = "telemax-network-data-stream";
pub const DEFAULT_RECORD_COUNT: u64 = 10;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_REGION_TAG: &str = "eu-west-2";

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub stream_name: String,
    pub record_count: u64,
    /// Pause after each submission
    pub delay: Duration,
    pub region_tag: String,
    pub seed: Option<u64>,
    pub endpoint_url: Option<String>,
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            stream_name: DEFAULT_STREAM_NAME.to_string(),
            record_count: DEFAULT_RECORD_COUNT,
            delay: DEFAULT_DELAY,
            region_tag: DEFAULT_REGION_TAG.to_string(),
            seed: None,
            endpoint_url: None,
            dry_run: false,
        }
    }
}

impl RunConfig {
    /// Resolve the run configuration from CLI/env arguments and, when
    /// `--config` is given, the TOML file it points to.
    pub fn resolve(args: &RunArgs) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => ConfigFile::from_path(path)?,
            None => ConfigFile::default(),
        };
        Self::merge(args, file)
    }

    /// Merge arguments over a config file over defaults, then validate.
    pub fn merge(args: &RunArgs, file: ConfigFile) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let delay = match args.delay.as_deref().or(file.delay.as_deref()) {
            Some(s) => parse_duration(s)?,
            None => defaults.delay,
        };

        let config = Self {
            stream_name: args
                .stream_name
                .clone()
                .or(file.stream_name)
                .unwrap_or(defaults.stream_name),
            record_count: args
                .record_count
                .or(file.record_count)
                .unwrap_or(defaults.record_count),
            delay,
            region_tag: args
                .region_tag
                .clone()
                .or(file.region_tag)
                .unwrap_or(defaults.region_tag),
            seed: args.seed.or(file.seed),
            endpoint_url: args.endpoint_url.clone().or(file.endpoint_url),
            dry_run: args
                .dry_run_flag()
                .or(file.dry_run)
                .unwrap_or(defaults.dry_run),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.stream_name.trim().is_empty() {
            anyhow::bail!("Stream name must not be empty");
        }
        if self.region_tag.trim().is_empty() {
            anyhow::bail!("Region tag must not be empty");
        }
        Ok(())
    }
}
