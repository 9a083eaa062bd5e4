use std::path::PathBuf;

use clap::Parser;

use super::Cli;

#[test]
fn parses_search_term_and_count() {
    let cli =
        Cli::try_parse_from(["stacksent", "recursion", "5"]).expect("expected valid cli args");

    assert_eq!(cli.search_term, "recursion");
    assert_eq!(cli.target_count, 5);
    assert_eq!(cli.output, PathBuf::from("stackoverflow.json"));
}

#[test]
fn parses_output_override() {
    let cli = Cli::try_parse_from(["stacksent", "recursion", "5", "--output", "out.json"])
        .expect("expected valid cli args");

    assert_eq!(cli.output, PathBuf::from("out.json"));
}

#[test]
fn rejects_missing_count() {
    assert!(Cli::try_parse_from(["stacksent", "recursion"]).is_err());
}

#[test]
fn rejects_missing_arguments() {
    assert!(Cli::try_parse_from(["stacksent"]).is_err());
}

#[test]
fn rejects_non_numeric_count() {
    assert!(Cli::try_parse_from(["stacksent", "recursion", "many"]).is_err());
}

#[test]
fn rejects_negative_count() {
    assert!(Cli::try_parse_from(["stacksent", "recursion", "-3"]).is_err());
}
