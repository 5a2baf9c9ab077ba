//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::domain::resource::Shape;


const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "vitrine";
const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Command-line arguments for the vitrine binary.
#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about = "Vitrine content client")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "VITRINE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args, Default, Clone)]
pub struct Overrides {
    /// Override the API base origin.
    #[arg(long = "api-url", env = "VITRINE_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

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

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Manage blog posts.
    Blogs(BlogsCmd),
    /// Manage portfolio projects.
    Projects(ProjectsCmd),
}

#[derive(Debug, Args, Clone)]
pub struct BlogsCmd {
    #[command(subcommand)]
    pub action: BlogsAction,
}

#[derive(Debug, Subcommand, Clone)]
pub enum BlogsAction {
    /// List posts with pagination, search, and tag filtering.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Show the distinct tag facet.
    Tags,
    /// Fetch a single post by identifier.
    Get { id: String },
    /// Create a new post.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        excerpt: String,
        #[arg(long)]
        content: Option<String>,
        /// Read the content from a file instead of the flag.
        #[arg(long, value_name = "PATH")]
        content_file: Option<PathBuf>,
        /// Comma-separated tags.
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Update an existing post; unspecified fields keep their fetched values.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, value_name = "PATH")]
        content_file: Option<PathBuf>,
        /// Comma-separated tags.
        #[arg(long)]
        tags: Option<String>,
    },
    /// Delete a post after confirmation.
    Delete {
        id: String,
        /// Answer the confirmation prompt affirmatively.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Debug, Args, Clone)]
pub struct ProjectsCmd {
    #[command(subcommand)]
    pub action: ProjectsAction,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ProjectsAction {
    /// List projects with pagination, search, and tag filtering.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        tag: String,
    },
    /// Show the distinct tag facet.
    Tags,
    /// Fetch a single project by identifier.
    Get { id: String },
    /// Create a new project.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Read the description from a file instead of the flag.
        #[arg(long, value_name = "PATH")]
        description_file: Option<PathBuf>,
        #[arg(long, default_value = "")]
        github_link: String,
        #[arg(long, default_value = "")]
        live_url: String,
        #[arg(long, value_enum, default_value_t = Shape::Box)]
        shape: Shape,
        #[arg(long, default_value = "")]
        image: String,
    },
    /// Update an existing project; unspecified fields keep their fetched values.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_name = "PATH")]
        description_file: Option<PathBuf>,
        #[arg(long)]
        github_link: Option<String>,
        #[arg(long)]
        live_url: Option<String>,
        #[arg(long, value_enum)]
        shape: Option<Shape>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a project after confirmation.
    Delete {
        id: String,
        /// Answer the confirmation prompt affirmatively.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        yes: bool,
    },
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("VITRINE").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    api: RawApiSettings,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawApiSettings {
    base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(url) = overrides.api_url.as_ref() {
            self.api.base_url = Some(url.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings { api, logging } = raw;
        Ok(Self {
            api: build_api_settings(api)?,
            logging: build_logging_settings(logging)?,
        })
    }
}

fn build_api_settings(raw: RawApiSettings) -> Result<ApiSettings, LoadError> {
    let raw_url = raw.base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let base_url = Url::parse(&raw_url)
        .map_err(|err| LoadError::invalid("api.base_url", err.to_string()))?;
    if base_url.cannot_be_a_base() {
        return Err(LoadError::invalid(
            "api.base_url",
            "URL cannot serve as a base origin",
        ));
    }
    Ok(ApiSettings { base_url })
}

fn build_logging_settings(raw: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match raw.level {
        Some(value) => LevelFilter::from_str(&value)
            .map_err(|err| LoadError::invalid("logging.level", err.to_string()))?,
        None => LevelFilter::INFO,
    };
    let format = match raw.json {
        Some(true) => LogFormat::Json,
        _ => LogFormat::Compact,
    };
    Ok(LoggingSettings { level, format })
}
