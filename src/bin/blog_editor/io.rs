#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::PathBuf;

use blog_editor::config::FieldArgs;
use blog_editor::domain::DraftField;

use crate::error::CliError;

pub fn read_opt_value(
    val: Option<String>,
    file: Option<PathBuf>,
) -> Result<Option<String>, CliError> {
    if let Some(path) = file {
        let data = fs::read_to_string(&path).map_err(|source| CliError::InputFile {
            path: path.display().to_string(),
            source,
        })?;
        return Ok(Some(data));
    }
    Ok(val)
}

/// Field edits in form order, then `--field` edits in the order given;
/// untouched fields keep their loaded value.
pub fn field_edits(fields: FieldArgs) -> Result<Vec<(DraftField, String)>, CliError> {
    let FieldArgs {
        title,
        title_file,
        summary,
        summary_file,
        content,
        content_file,
        field,
    } = fields;

    let edits = [
        (DraftField::Heading, read_opt_value(title, title_file)?),
        (DraftField::Summary, read_opt_value(summary, summary_file)?),
        (DraftField::Content, read_opt_value(content, content_file)?),
    ];

    Ok(edits
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .chain(field)
        .collect())
}
