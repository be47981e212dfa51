//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;

use std::str::FromStr;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

pub use cli::{CliArgs, Command, FieldArgs, PageArgs, SiteOverrides, SubmitArgs};

use crate::domain::DEFAULT_API_PATH;

const LOCAL_CONFIG_BASENAME: &str = "blog-editor";
const ENV_PREFIX: &str = "BLOG_EDITOR";

#[derive(Debug, Clone)]
pub struct Settings {
    pub site: SiteSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub url: Url,
    pub api_path: String,
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
    #[error("missing configuration for `{key}`: {hint}")]
    Missing {
        key: &'static str,
        hint: &'static str,
    },
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
    let mut builder =
        Config::builder().add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(&cli.overrides);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    site: RawSiteSettings,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    url: Option<String>,
    api_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &SiteOverrides) {
        if let Some(url) = overrides.site_url.as_ref() {
            self.site.url = Some(url.clone());
        }
        if let Some(api_path) = overrides.api_path.as_ref() {
            self.site.api_path = Some(api_path.clone());
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
        let RawSettings { site, logging } = raw;

        Ok(Self {
            site: build_site_settings(site)?,
            logging: build_logging_settings(logging)?,
        })
    }
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let url = site
        .url
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(LoadError::Missing {
            key: "site.url",
            hint: "use --site or BLOG_EDITOR_SITE_URL",
        })?;
    let url = Url::parse(url)
        .map_err(|err| LoadError::invalid("site.url", format!("failed to parse: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            "site.url",
            format!("unsupported scheme `{}`", url.scheme()),
        ));
    }

    let api_path = normalize_api_path(site.api_path.as_deref())?;

    Ok(SiteSettings { url, api_path })
}

/// Ids are appended directly to the collection path, so it always ends in `/`.
fn normalize_api_path(value: Option<&str>) -> Result<String, LoadError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Ok(DEFAULT_API_PATH.to_string());
    }
    if !trimmed.starts_with('/') {
        return Err(LoadError::invalid(
            "site.api_path",
            "must be an absolute path starting with `/`",
        ));
    }

    let mut path = trimmed.to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    Ok(path)
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

#[cfg(test)]
mod tests;
