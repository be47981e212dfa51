use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};

use crate::domain::DraftField;

/// Command-line arguments for the blog-editor binary.
#[derive(Debug, Parser)]
#[command(
    name = "blog-editor",
    version,
    about = "Create or edit a blog post through the blog API"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "BLOG_EDITOR_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: SiteOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Open the form for a page and print it as JSON.
    Show(PageArgs),
    /// Open the form for a page, apply field edits and submit it.
    Submit(SubmitArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct SiteOverrides {
    /// Site base URL, e.g. <https://example.com>
    #[arg(long = "site", env = "BLOG_EDITOR_SITE_URL", value_name = "URL")]
    pub site_url: Option<String>,

    /// Override the blog API collection path.
    #[arg(long = "api-path", value_name = "PATH")]
    pub api_path: Option<String>,

    /// Override the log level filter (e.g. info, debug).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long = "log-json", value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Clone)]
pub struct PageArgs {
    /// Page the form is mounted on, e.g. `/manage/blog/edit?id=42`.
    #[arg(long, value_name = "PATH")]
    pub page: String,
}

#[derive(Debug, Args, Clone)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Field edits; a file takes precedence over the inline value.
#[derive(Debug, Args, Default, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, value_name = "PATH")]
    pub title_file: Option<PathBuf>,
    #[arg(long)]
    pub summary: Option<String>,
    #[arg(long, value_name = "PATH")]
    pub summary_file: Option<PathBuf>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long, value_name = "PATH")]
    pub content_file: Option<PathBuf>,
    /// Set a field by wire name, e.g. `--field message=Hello`. Repeatable.
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field_edit)]
    pub field: Vec<(DraftField, String)>,
}

fn parse_field_edit(input: &str) -> Result<(DraftField, String), String> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{input}`"))?;
    let field = name.parse::<DraftField>().map_err(|err| err.to_string())?;
    Ok((field, value.to_string()))
}
