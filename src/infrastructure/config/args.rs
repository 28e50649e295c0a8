use super::app_config::LogLevel;
use crate::domain::entities::EndOfListPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments; each one overrides the config file.
#[derive(Debug, Parser)]
#[command(
    name = "studyline",
    version,
    about = "A terminal study client for lessons, quizzes and learner profiles",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the learning backend.
    #[arg(long, env = "STUDYLINE_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Session token to use when none is stored.
    #[arg(long, env = "STUDYLINE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Catalog file (TOML) with lessons and quizzes.
    #[arg(long, value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Experience points granted when a lesson is completed.
    #[arg(long)]
    pub reward_points: Option<u32>,

    /// What "next" does on the last lesson part.
    #[arg(long, value_enum)]
    pub end_of_list: Option<EndOfListPolicy>,

    /// Quiz answer feedback duration in milliseconds.
    #[arg(long)]
    pub feedback_delay_ms: Option<u64>,
}
