#![allow(non_snake_case)]

use super::*;
use clap::CommandFactory;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("json2cpp").chain(args.iter().copied())).unwrap()
}

#[test]
fn Cli___command___is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
fn Cli___no_arguments___shows_help_as_error() {
    let err = Cli::try_parse_from(["json2cpp"]).unwrap_err();

    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}

#[test]
fn Cli___missing_schema___is_rejected() {
    let result = Cli::try_parse_from(["json2cpp", "--ofile", "person"]);

    assert!(result.is_err());
}

#[test]
fn Cli___schema_only___leaves_everything_to_config() {
    let cli = parse(&["--schema", "person.json"]);

    assert_eq!(cli.schema, Path::new("person.json"));
    assert_eq!(cli.overrides(), CliOverrides::default());
}

#[test]
fn Cli___output_flags___become_overrides() {
    let cli = parse(&[
        "--schema", "s.json", "--oheader", "include", "--ocpp", "src", "--ofile", "person",
    ]);

    let overrides = cli.overrides();

    assert_eq!(overrides.header_dir.as_deref(), Some(Path::new("include")));
    assert_eq!(overrides.source_dir.as_deref(), Some(Path::new("src")));
    assert_eq!(overrides.file_name.as_deref(), Some("person"));
}

#[test]
fn Cli___create_dir_without_value___means_true() {
    let cli = parse(&["--schema", "s.json", "--create-dir"]);

    assert_eq!(cli.overrides().create_dirs, Some(true));
}

#[test]
fn Cli___create_dir_false___disables_creation() {
    let cli = parse(&["--schema", "s.json", "--create-dir", "false"]);

    assert_eq!(cli.overrides().create_dirs, Some(false));
}

#[test]
fn Cli___no_create_dir___disables_creation() {
    let cli = parse(&["--schema", "s.json", "--no-create-dir"]);

    assert_eq!(cli.overrides().create_dirs, Some(false));
}

#[test]
fn Cli___both_create_dir_forms___conflict() {
    let result = Cli::try_parse_from([
        "json2cpp", "--schema", "s.json", "--create-dir", "--no-create-dir",
    ]);

    assert!(result.is_err());
}

#[test]
fn Cli___include_is_repeatable() {
    let cli = parse(&["--schema", "s.json", "-I", "a", "--include", "b", "--verify"]);

    let overrides = cli.overrides();

    assert!(overrides.verify);
    assert_eq!(overrides.include_dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
}

#[test]
fn warning_summary___clean_run___prints_nothing() {
    assert_eq!(warning_summary(&[]), None);
}

#[test]
fn warning_summary___lists_each_message_in_order() {
    let messages = vec![
        "Person::friends has unresolved type `std::vector<Person>`".to_string(),
        "Person::name of type `std::string` has a numeric constraint that was not emitted".to_string(),
    ];

    let summary = warning_summary(&messages).unwrap();

    assert_eq!(
        summary,
        "Finished with 2 warning(s):\n\
         \x20 - Person::friends has unresolved type `std::vector<Person>`\n\
         \x20 - Person::name of type `std::string` has a numeric constraint that was not emitted\n"
    );
}
