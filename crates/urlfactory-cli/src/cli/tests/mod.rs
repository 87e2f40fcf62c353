use super::*;


fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_builder() {
    let cli = parse(&["urlfactory", "builder"]);
    assert_eq!(cli.command, CliCommand::Builder);
    assert_eq!(cli.context, ContextArgs::default());
}

#[test]
fn cli_parse_build_published() {
    match parse(&["urlfactory", "build", "--published"]).command {
        CliCommand::Build { published } => assert!(published),
        _ => panic!("expected Build"),
    }
    match parse(&["urlfactory", "build"]).command {
        CliCommand::Build { published } => assert!(!published),
        _ => panic!("expected Build"),
    }
}

#[test]
fn cli_parse_query_with_context() {
    let cli = parse(&[
        "urlfactory",
        "--app-slug",
        "s",
        "query",
        "q1",
        "--page-id",
        "9",
        "--app-version",
        "2",
        "--hash",
        "section1",
    ]);
    assert_eq!(cli.command, CliCommand::Query { id: "q1".into() });
    assert_eq!(cli.context.application_slug.as_deref(), Some("s"));
    assert_eq!(cli.context.page_id.as_deref(), Some("9"));
    assert_eq!(cli.context.application_version, Some(2));
    assert_eq!(cli.context.hash.as_deref(), Some("section1"));
}

#[test]
fn cli_parse_saas_datasource() {
    match parse(&["urlfactory", "saas-datasource", "google-sheets", "ds1"]).command {
        CliCommand::SaasDatasource {
            plugin_package_name,
            datasource_id,
        } => {
            assert_eq!(plugin_package_name, "google-sheets");
            assert_eq!(datasource_id, "ds1");
        }
        _ => panic!("expected SaasDatasource"),
    }
}

#[test]
fn cli_parse_repeated_params() {
    let cli = parse(&[
        "urlfactory",
        "viewer",
        "--param",
        "embed=true",
        "--param",
        "x=a=b",
    ]);
    assert_eq!(
        cli.context.params,
        vec![
            ("embed".to_string(), "true".to_string()),
            ("x".to_string(), "a=b".to_string())
        ]
    );
}

#[test]
fn cli_parse_rejects_bad_param() {
    assert!(Cli::try_parse_from(["urlfactory", "viewer", "--param", "novalue"]).is_err());
    assert!(Cli::try_parse_from(["urlfactory", "viewer", "--param", "=x"]).is_err());
}

#[test]
fn cli_parse_requires_ids() {
    assert!(Cli::try_parse_from(["urlfactory", "datasource"]).is_err());
    assert!(Cli::try_parse_from(["urlfactory", "saas-api", "pkg"]).is_err());
}

#[test]
fn cli_parse_config_and_current_url() {
    let cli = parse(&[
        "urlfactory",
        "defaults",
        "--config",
        "/tmp/urlfactory.toml",
        "--current-url",
        "/app/page-1?branch=dev",
        "--test-env",
    ]);
    assert_eq!(cli.command, CliCommand::Defaults);
    assert_eq!(
        cli.context.config.as_deref(),
        Some(std::path::Path::new("/tmp/urlfactory.toml"))
    );
    assert_eq!(cli.context.current_url.as_deref(), Some("/app/page-1?branch=dev"));
    assert!(cli.context.test_env);
}
