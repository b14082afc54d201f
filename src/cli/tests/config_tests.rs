use super::args::CliArgs;
use super::config::{find_config, parse_config, resolve_options};
use clap::Parser;
use std::path::Path;

use gramc_common::TargetLanguage;
use gramc_emitter::UnsupportedInputPolicy;

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["gramc", "tokens.json", "Parser.java"];
    argv.extend_from_slice(extra);
    CliArgs::parse_from(argv)
}

#[test]
fn parses_jsonc_with_comments_and_trailing_commas() {
    let input = r#"
    {
      // generate C++
      "outputLanguage": "c++", /* inline */
      "warnUnsupported": true,
      "outDir": "gen/src",
    }
    "#;

    let config = parse_config(input).expect("should parse JSONC");
    assert_eq!(config.output_language.as_deref(), Some("c++"));
    assert_eq!(config.warn_unsupported, Some(true));
    assert_eq!(config.out_dir.as_deref(), Some("gen/src"));
}

#[test]
fn comment_markers_inside_strings_are_kept() {
    let config = parse_config(r#"{"outDir": "a//b/*c*/"}"#).unwrap();
    assert_eq!(config.out_dir.as_deref(), Some("a//b/*c*/"));
}

#[test]
fn trailing_comma_before_comment_and_brace_is_dropped() {
    let input = "{\"outDir\": \",}\", \"warnUnsupported\": false, /* last */\n// done\n}";
    let config = parse_config(input).unwrap();
    assert_eq!(config.out_dir.as_deref(), Some(",}"));
    assert_eq!(config.warn_unsupported, Some(false));
}

#[test]
fn escaped_quote_does_not_end_string() {
    let config = parse_config(r#"{"outDir": "a\"//b", }"#).unwrap();
    assert_eq!(config.out_dir.as_deref(), Some("a\"//b"));
}

#[test]
fn defaults_to_java_and_ignore_policy() {
    let config = parse_config("{}").unwrap();
    let resolved = resolve_options(&config, &args(&[])).unwrap();
    assert_eq!(resolved.generation.output_language, TargetLanguage::Java);
    assert_eq!(
        resolved.generation.unsupported_input,
        UnsupportedInputPolicy::Ignore
    );
    assert!(resolved.out_dir.is_none());
}

#[test]
fn command_line_overrides_file() {
    let config = parse_config(r#"{"outputLanguage": "java", "outDir": "from-file"}"#).unwrap();
    let resolved =
        resolve_options(&config, &args(&["--language", "cpp", "--out-dir", "from-cli"])).unwrap();
    assert_eq!(resolved.generation.output_language, TargetLanguage::Cpp);
    assert_eq!(resolved.out_dir.as_deref(), Some(Path::new("from-cli")));
}

#[test]
fn warn_flag_enables_warn_policy() {
    let config = parse_config("{}").unwrap();
    let resolved = resolve_options(&config, &args(&["--warn-unsupported"])).unwrap();
    assert_eq!(
        resolved.generation.unsupported_input,
        UnsupportedInputPolicy::Warn
    );
}

#[test]
fn unknown_language_in_file_is_an_error() {
    let config = parse_config(r#"{"outputLanguage": "fortran"}"#).unwrap();
    let err = resolve_options(&config, &args(&[])).unwrap_err();
    assert!(err.to_string().contains("fortran"), "{err}");
}

#[test]
fn finds_default_config_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gramc.json"), r#"{"outputLanguage": "cpp"}"#).unwrap();

    let config = find_config(None, dir.path()).unwrap();
    assert_eq!(config.output_language.as_deref(), Some("cpp"));
}

#[test]
fn missing_default_config_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = find_config(None, dir.path()).unwrap();
    assert!(config.output_language.is_none());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_config(Some(&dir.path().join("nope.json")), dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read options file"));
}
