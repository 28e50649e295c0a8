//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;
use crate::domain::entities::{EndOfListPolicy, Lesson};
use crate::domain::services::{DEFAULT_REWARD_POINTS, LessonConfig};

const APP_NAME: &str = "studyline";
const APP_QUALIFIER: &str = "org";
const APP_ORGANIZATION: &str = "studyline";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Session token passed on the command line; never written to disk.
    #[serde(skip)]
    pub token: Option<String>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Catalog file replacing the built-in lessons.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Lesson player defaults.
    #[serde(default)]
    pub lesson: LessonSettings,

    /// Quiz behaviour.
    #[serde(default)]
    pub quiz: QuizSettings,
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the learning backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Defaults applied to lessons that do not override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSettings {
    /// Experience points granted on completion.
    #[serde(default = "default_reward_points")]
    pub reward_points: u32,

    /// Behaviour of "next" on the last part.
    #[serde(default)]
    pub end_of_list: EndOfListPolicy,
}

impl LessonSettings {
    /// Player configuration for a catalog lesson.
    #[must_use]
    pub fn config_for(&self, lesson: &Lesson) -> LessonConfig {
        LessonConfig::for_lesson(lesson, self.reward_points, self.end_of_list)
    }
}

impl Default for LessonSettings {
    fn default() -> Self {
        Self {
            reward_points: DEFAULT_REWARD_POINTS,
            end_of_list: EndOfListPolicy::default(),
        }
    }
}

/// Quiz settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    /// How long answer feedback stays visible before the next question.
    #[serde(default = "default_feedback_delay_ms")]
    pub feedback_delay_ms: u64,
}

impl QuizSettings {
    /// Feedback delay as a [`Duration`].
    #[must_use]
    pub const fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            feedback_delay_ms: default_feedback_delay_ms(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_reward_points() -> u32 {
    DEFAULT_REWARD_POINTS
}

const fn default_feedback_delay_ms() -> u64 {
    1000
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = args.api_url {
            self.api.base_url = api_url;
        }
        if let Some(token) = args.token {
            self.token = Some(token);
        }
        if let Some(content) = args.content {
            self.content_path = Some(content);
        }
        if let Some(reward_points) = args.reward_points {
            self.lesson.reward_points = reward_points;
        }
        if let Some(end_of_list) = args.end_of_list {
            self.lesson.end_of_list = end_of_list;
        }
        if let Some(delay) = args.feedback_delay_ms {
            self.quiz.feedback_delay_ms = delay;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("studyline.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            token: None,
            log_path: None,
            log_level: LogLevel::Info,
            content_path: None,
            api: ApiConfig::default(),
            lesson: LessonSettings::default(),
            quiz: QuizSettings::default(),
        }
    }
}
