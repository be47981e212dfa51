#![deny(clippy::all, clippy::pedantic)]

use blog_editor::application::{BlogEditor, EditorOptions, FormView, RecordedPage, SubmitOutcome};
use blog_editor::config::{PageArgs, Settings, SubmitArgs};
use blog_editor::domain::PageLocation;
use blog_editor::infra::HttpBlogApi;
use tracing::info;
use url::Url;

use crate::error::CliError;
use crate::io::field_edits;

pub type Editor = BlogEditor<HttpBlogApi, RecordedPage>;

/// Build the form for `page` and run its initial load.
pub async fn open(settings: &Settings, page: &str) -> Result<Editor, CliError> {
    let api = HttpBlogApi::new(&settings.site.url)?;
    let location = PageLocation::parse(page)?;
    let options = EditorOptions {
        api_path: settings.site.api_path.clone(),
    };

    let mut editor = BlogEditor::new(api, RecordedPage::default(), location, options);
    info!(page = %editor.location(), mode = %editor.mode(), "opening editor");
    editor.init().await?;
    Ok(editor)
}

pub async fn show(settings: &Settings, args: &PageArgs) -> Result<FormView, CliError> {
    let editor = open(settings, &args.page).await?;
    Ok(editor.render())
}

/// Returns the absolute URL of the saved post.
pub async fn submit(settings: &Settings, args: SubmitArgs) -> Result<Url, CliError> {
    let mut editor = open(settings, &args.page.page).await?;
    for (field, value) in field_edits(args.fields)? {
        editor.input(field, value);
    }

    match editor.submit().await? {
        SubmitOutcome::Redirected(path) => Ok(settings.site.url.join(&path)?),
        SubmitOutcome::Rejected(text) => Err(CliError::Rejected(text)),
    }
}
