use super::*;

fn config_with_data(data: Option<&str>) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        data_path: data.map(PathBuf::from),
        narratives_path: PathBuf::from("./config/narratives.yaml"),
        narratives_path_explicit: false,
        log_level: "info".to_string(),
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["pulse"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_report_defaults() {
    let cli = Cli::try_parse_from(["pulse", "report"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Report {
            data: None,
            competitor: None,
            format: OutputFormat::Text,
            details: false,
        })
    ));
}

#[test]
fn parses_report_with_all_flags() {
    let cli = Cli::try_parse_from([
        "pulse",
        "report",
        "--data",
        "mentions.csv",
        "--competitor",
        "cursor_ai",
        "--format",
        "markdown",
        "--details",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Report {
            data: Some(ref d),
            competitor: Some(ref c),
            format: OutputFormat::Markdown,
            details: true,
        }) if d == Path::new("mentions.csv") && c == "cursor_ai"
    ));
}

#[test]
fn parses_report_json_format() {
    let cli = Cli::try_parse_from(["pulse", "report", "--format", "json"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Report {
            format: OutputFormat::Json,
            ..
        })
    ));
}

#[test]
fn rejects_unknown_format() {
    assert!(Cli::try_parse_from(["pulse", "report", "--format", "html"]).is_err());
}

#[test]
fn parses_competitors_command() {
    let cli = Cli::try_parse_from(["pulse", "competitors"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Competitors { data: None })
    ));
}

#[test]
fn resolve_data_path_prefers_flag_then_config() {
    let config = config_with_data(Some("/env/mentions.csv"));
    let from_flag = resolve_data_path(Some(PathBuf::from("/flag.csv")), &config).unwrap();
    assert_eq!(from_flag, Path::new("/flag.csv"));

    let from_env = resolve_data_path(None, &config).unwrap();
    assert_eq!(from_env, Path::new("/env/mentions.csv"));
}

#[test]
fn resolve_data_path_fails_without_any_source() {
    let config = config_with_data(None);
    let err = resolve_data_path(None, &config).unwrap_err();
    assert!(err.to_string().contains("PULSE_DATA_PATH"));
}

fn config_with_narratives(path: PathBuf, explicit: bool) -> AppConfig {
    AppConfig {
        narratives_path: path,
        narratives_path_explicit: explicit,
        ..config_with_data(None)
    }
}

fn missing_narratives_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("no-such-dir")
        .join("narratives.yaml")
}

#[test]
fn missing_default_narratives_falls_back_to_empty_table() {
    let config = config_with_narratives(missing_narratives_path(), false);
    let table = load_narrative_table(&config).expect("default path may be absent");
    assert!(table.is_empty());
}

#[test]
fn missing_explicit_narratives_is_an_error() {
    let config = config_with_narratives(missing_narratives_path(), true);
    let err = load_narrative_table(&config).unwrap_err();
    assert!(
        format!("{err:#}").contains("loading narratives from"),
        "got: {err:#}"
    );
}

#[test]
fn shipped_narratives_load_from_default_location() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("narratives.yaml");
    let table = load_narrative_table(&config_with_narratives(path, false)).unwrap();
    assert!(table.get("cursor_ai").is_some());
}
