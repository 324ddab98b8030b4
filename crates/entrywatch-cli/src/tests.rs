use clap::Parser;

use super::*;

#[test]
fn parses_bare_invocation() {
    let cli = Cli::try_parse_from(["entrywatch"]).expect("expected valid cli args");
    assert!(cli.watch_file.is_none());
    assert!(cli.location.is_none());
    assert!(!cli.dry_run);
}

#[test]
fn parses_watch_file_override() {
    let cli = Cli::try_parse_from(["entrywatch", "--watch-file", "/tmp/watch.yaml"])
        .expect("expected valid cli args");
    assert_eq!(
        cli.watch_file.as_deref().map(|p| p.to_string_lossy().into_owned()),
        Some("/tmp/watch.yaml".to_string())
    );
}

#[test]
fn parses_location_override() {
    let cli =
        Cli::try_parse_from(["entrywatch", "--location", "5140"]).expect("expected valid cli args");
    assert_eq!(cli.location, Some(5140));
}

#[test]
fn rejects_non_numeric_location() {
    let result = Cli::try_parse_from(["entrywatch", "--location", "chicago"]);
    assert!(result.is_err());
}

#[test]
fn parses_dry_run_flag() {
    let cli = Cli::try_parse_from(["entrywatch", "--dry-run"]).expect("expected valid cli args");
    assert!(cli.dry_run);
}
