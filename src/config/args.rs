//! CLI argument definitions for a generation run.

use clap::Args;
use std::path::PathBuf;

/// Run arguments. Every value can also come from the environment or a
/// TOML config file; unset values fall back to defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// Path to a TOML run configuration file
    #[arg(long, env = "TELEMAX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Name of the destination Kinesis stream
    #[arg(long, env = "KINESIS_STREAM_NAME")]
    pub stream_name: Option<String>,

    /// Number of records to generate
    #[arg(long, env = "RECORD_COUNT")]
    pub record_count: Option<u64>,

    /// Pause after each record (e.g. "1", "500ms", "2s")
    #[arg(long, env = "DELAY_SECONDS")]
    pub delay: Option<String>,

    /// Region tag stamped on every record
    #[arg(long, env = "TELEMAX_REGION_TAG")]
    pub region_tag: Option<String>,

    /// Random seed for reproducible metric values and link ids
    #[arg(long, env = "TELEMAX_SEED")]
    pub seed: Option<u64>,

    /// Override the Kinesis endpoint (e.g. "http://localhost:4566")
    #[arg(long, env = "TELEMAX_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Log payloads instead of sending them
    #[arg(long, overrides_with = "no_dry_run")]
    pub dry_run: bool,

    /// Send payloads even if the config file enables dry run
    #[arg(long, overrides_with = "dry_run")]
    pub no_dry_run: bool,
}

impl RunArgs {
    /// Dry-run choice made on the command line, if any.
    pub fn dry_run_flag(&self) -> Option<bool> {
        if self.dry_run {
            Some(true)
        } else if self.no_dry_run {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: RunArgs,
    }

    fn parse(argv: &[&str]) -> RunArgs {
        TestCli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_dry_run_flag_unset() {
        assert_eq!(parse(&["telemax-datagen"]).dry_run_flag(), None);
    }

    #[test]
    fn test_last_dry_run_flag_wins() {
        let args = parse(&["telemax-datagen", "--dry-run", "--no-dry-run"]);
        assert_eq!(args.dry_run_flag(), Some(false));

        let args = parse(&["telemax-datagen", "--no-dry-run", "--dry-run"]);
        assert_eq!(args.dry_run_flag(), Some(true));
    }
}
