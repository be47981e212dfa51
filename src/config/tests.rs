use clap::Parser;

use super::*;
use crate::domain::DraftField;

fn raw_with_site(url: &str) -> RawSettings {
    let mut raw = RawSettings::default();
    raw.site.url = Some(url.to_string());
    raw
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = raw_with_site("https://file.example");
    raw.logging.level = Some("info".to_string());

    let overrides = SiteOverrides {
        site_url: Some("https://cli.example".to_string()),
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.site.url.as_str(), "https://cli.example/");
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn api_path_defaults_to_blog_collection() {
    let settings = Settings::from_raw(raw_with_site("https://example.com")).expect("valid");
    assert_eq!(settings.site.api_path, "/api/blog/");
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn api_path_gains_trailing_slash() {
    let mut raw = raw_with_site("https://example.com");
    raw.site.api_path = Some("/api/blogs".to_string());
    let settings = Settings::from_raw(raw).expect("valid");
    assert_eq!(settings.site.api_path, "/api/blogs/");
}

#[test]
fn relative_api_path_is_rejected() {
    let mut raw = raw_with_site("https://example.com");
    raw.site.api_path = Some("api/blog/".to_string());
    let err = Settings::from_raw(raw).expect_err("relative path");
    assert!(matches!(err, LoadError::Invalid { key: "site.api_path", .. }));
}

#[test]
fn missing_site_is_reported() {
    let err = Settings::from_raw(RawSettings::default()).expect_err("no site");
    assert!(matches!(err, LoadError::Missing { key: "site.url", .. }));
}

#[test]
fn non_http_site_is_rejected() {
    let err = Settings::from_raw(raw_with_site("ftp://example.com")).expect_err("bad scheme");
    assert!(matches!(err, LoadError::Invalid { key: "site.url", .. }));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = raw_with_site("https://example.com");
    raw.logging.level = Some("loud".to_string());
    let err = Settings::from_raw(raw).expect_err("bad level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = raw_with_site("https://example.com");
    let overrides = SiteOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn parse_submit_arguments() {
    let args = CliArgs::try_parse_from([
        "blog-editor",
        "--site",
        "https://example.com",
        "submit",
        "--page",
        "/manage/blog/edit?id=42",
        "--title",
        "Hello",
        "--content-file",
        "post.md",
    ])
    .expect("valid arguments");

    assert_eq!(args.overrides.site_url.as_deref(), Some("https://example.com"));
    match args.command {
        Command::Submit(submit) => {
            assert_eq!(submit.page.page, "/manage/blog/edit?id=42");
            assert_eq!(submit.fields.title.as_deref(), Some("Hello"));
            assert_eq!(
                submit.fields.content_file.as_deref(),
                Some(std::path::Path::new("post.md"))
            );
            assert!(submit.fields.summary.is_none());
        }
        Command::Show(_) => panic!("expected submit command"),
    }
}

#[test]
fn generic_field_edits_parse_by_wire_name() {
    let args = CliArgs::try_parse_from([
        "blog-editor",
        "submit",
        "--page",
        "/manage/blog/create",
        "--field",
        "message=Hi",
        "--field",
        "summary=a=b",
    ])
    .expect("valid arguments");

    match args.command {
        Command::Submit(submit) => assert_eq!(
            submit.fields.field,
            vec![
                (DraftField::Heading, "Hi".to_string()),
                (DraftField::Summary, "a=b".to_string()),
            ]
        ),
        Command::Show(_) => panic!("expected submit command"),
    }
}

#[test]
fn unknown_field_name_is_rejected() {
    for bad in ["tags=rust", "summary"] {
        let err = CliArgs::try_parse_from([
            "blog-editor",
            "submit",
            "--page",
            "/manage/blog/create",
            "--field",
            bad,
        ])
        .expect_err("invalid field");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{bad}");
    }
}

#[test]
fn show_requires_page() {
    let err = CliArgs::try_parse_from(["blog-editor", "show"]).expect_err("missing page");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}
