use std::path::PathBuf;

use clap::{Args, Parser, builder::BoolishValueParser};

/// Command-line arguments for the postboard binary.
#[derive(Debug, Parser)]
#[command(
    name = "postboard",
    version,
    about = "Browse, write, and comment on posts from a JSON REST API"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "POSTBOARD_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: BoardOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct BoardOverrides {
    /// Override the API base URL; the `posts` collection is resolved beneath it.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}
