use super::args::CliArgs;
use super::config::ResolvedOptions;
use super::driver::{TokenDump, generate, output_path, run};
use clap::Parser;
use std::path::Path;

use gramc_common::{TargetLanguage, TokenId};
use gramc_emitter::GenerationOptions;

const DUMP: &str = r#"{
  "tokens": [
    {"kind": "singleLineComment", "image": "// greet\n", "beginLine": 3, "beginColumn": 5, "endLine": 3, "endColumn": 13},
    {"image": "print", "beginLine": 4, "beginColumn": 5, "endLine": 4, "endColumn": 9, "specialToken": 0, "next": 2},
    {"image": "(", "beginLine": 4, "beginColumn": 10, "endLine": 4, "endColumn": 10, "next": 3},
    {"kind": "stringLiteral", "image": "\"hi\"", "beginLine": 4, "beginColumn": 11, "endLine": 4, "endColumn": 14, "next": 4},
    {"image": ");", "beginLine": 4, "beginColumn": 15, "endLine": 4, "endColumn": 16}
  ]
}"#;

#[test]
fn effective_sequence_skips_special_tokens() {
    let dump = TokenDump::parse(DUMP).unwrap();
    assert_eq!(
        dump.effective_sequence(),
        vec![TokenId(1), TokenId(2), TokenId(3), TokenId(4)]
    );
}

#[test]
fn explicit_sequence_is_used_as_given() {
    let dump = TokenDump::parse(r#"{"tokens": [], "sequence": [2, 0]}"#).unwrap();
    assert_eq!(dump.effective_sequence(), vec![TokenId(2), TokenId(0)]);
}

#[test]
fn generates_java_file_with_reprinted_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Hello.java");
    let dump = TokenDump::parse(DUMP).unwrap();

    let result = generate(
        &dump,
        GenerationOptions::new(TargetLanguage::Java),
        &output,
        None,
    );

    assert!(!result.has_errors());
    assert_eq!(result.emitted_files, vec![output.clone()]);
    let contents = std::fs::read_to_string(&output).unwrap();
    assert_eq!(contents, "/* Hello.java */\n// greet\n    print(\"hi\");");
}

#[test]
fn generates_cpp_class_in_header() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("hello.cc");
    let dump = TokenDump::parse(DUMP).unwrap();

    let result = generate(
        &dump,
        GenerationOptions::new(TargetLanguage::Cpp),
        &output,
        Some("Hello"),
    );

    assert!(!result.has_errors());
    assert_eq!(result.emitted_files.len(), 2);
    let header = std::fs::read_to_string(dir.path().join("hello.h")).unwrap();
    assert!(header.starts_with("#ifndef HELLO_H\n#define HELLO_H\nclass Hello {\n   public:\n"));
    assert!(header.contains("    print(\"hi\");\n};\n"));
    assert!(header.ends_with("#endif\n"));
    let body = std::fs::read_to_string(&output).unwrap();
    assert_eq!(body, "/* hello.cc */\n#include \"hello.h\"\n");
}

#[test]
fn failed_write_surfaces_as_error_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no-such-dir").join("Hello.java");
    let dump = TokenDump::parse(DUMP).unwrap();

    let result = generate(
        &dump,
        GenerationOptions::new(TargetLanguage::Java),
        &output,
        None,
    );

    assert!(result.has_errors());
    assert!(result.emitted_files.is_empty());
}

#[test]
fn output_path_resolution() {
    let cwd = Path::new("/work");
    let mut options = ResolvedOptions::default();
    assert_eq!(
        output_path(&options, Path::new("P.java"), cwd),
        Path::new("/work/P.java")
    );
    options.out_dir = Some("gen".into());
    assert_eq!(
        output_path(&options, Path::new("P.java"), cwd),
        Path::new("/work/gen/P.java")
    );
    assert_eq!(
        output_path(&options, Path::new("/abs/P.java"), cwd),
        Path::new("/abs/P.java")
    );
}

#[test]
fn run_uses_config_file_and_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("gen")).unwrap();
    std::fs::write(dir.path().join("tokens.json"), DUMP).unwrap();
    std::fs::write(
        dir.path().join("gramc.json"),
        r#"{ "outputLanguage": "c++", "outDir": "gen", }"#,
    )
    .unwrap();

    let args = CliArgs::parse_from(["gramc", "tokens.json", "hello.cc"]);
    let result = run(&args, dir.path()).unwrap();

    assert!(!result.has_errors());
    assert!(dir.path().join("gen/hello.cc").is_file());
    assert!(dir.path().join("gen/hello.h").is_file());
}

#[test]
fn run_reports_missing_token_dump() {
    let dir = tempfile::tempdir().unwrap();
    let args = CliArgs::parse_from(["gramc", "absent.json", "X.java"]);
    let err = run(&args, dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read token dump"));
}
