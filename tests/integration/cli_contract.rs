use std::fs;

use clap::Parser;
use dirsweep::tooling::cli::{Cli, CliContext};
use dirsweep::SweepError;
use tempfile::TempDir;

use crate::CANONICAL_TRANSCRIPT;

fn workspace_with_input() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("input.txt"), CANONICAL_TRANSCRIPT).unwrap();
    temp_dir
}

#[test]
fn default_invocation_prints_single_number() {
    let temp_dir = workspace_with_input();
    let context = CliContext::new(None, temp_dir.path().to_path_buf()).unwrap();

    let output = context.execute(&Cli::parse_from(["dirsweep"])).unwrap();
    assert_eq!(output, "24933642");
}

#[test]
fn json_report_contract_has_required_fields() {
    let temp_dir = workspace_with_input();
    let context = CliContext::new(None, temp_dir.path().to_path_buf()).unwrap();

    let output = context
        .execute(&Cli::parse_from(["dirsweep", "--format", "json"]))
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["directory_count"].as_u64(), Some(4));
    assert_eq!(parsed["file_count"].as_u64(), Some(10));
    assert_eq!(parsed["budget"]["total_disk_space"].as_u64(), Some(70_000_000));
    assert_eq!(parsed["budget"]["required_free_space"].as_u64(), Some(30_000_000));

    let plan = parsed.get("plan").expect("plan object should exist");
    assert_eq!(plan["used"].as_u64(), Some(48_381_165));
    assert_eq!(plan["need_to_free"].as_u64(), Some(8_381_165));
    assert_eq!(plan["selected_size"].as_u64(), Some(24_933_642));
    assert_eq!(plan["selected_path"].as_str(), Some("/d"));
}

#[test]
fn tree_flag_prepends_rendered_hierarchy() {
    let temp_dir = workspace_with_input();
    let context = CliContext::new(None, temp_dir.path().to_path_buf()).unwrap();

    let output = context
        .execute(&Cli::parse_from(["dirsweep", "--tree"]))
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.first(), Some(&"dir /"));
    assert_eq!(lines.get(1), Some(&"  dir a"));
    assert_eq!(lines.get(2), Some(&"    dir e"));
    assert_eq!(lines.get(3), Some(&"      584 i"));
    assert!(lines.contains(&"    7214296 k"));
    assert_eq!(lines.last(), Some(&"24933642"));
}

#[test]
fn workspace_config_file_overrides_capacities() {
    let temp_dir = workspace_with_input();
    fs::write(
        temp_dir.path().join("dirsweep.toml"),
        "[disk]\ntotal_disk_space = 100000000\nrequired_free_space = 60000000\n",
    )
    .unwrap();
    let context = CliContext::new(None, temp_dir.path().to_path_buf()).unwrap();
    assert_eq!(context.config().disk.total_disk_space, 100_000_000);

    // need_to_free = 60_000_000 - (100_000_000 - 48_381_165) = 8_381_165
    let output = context.execute(&Cli::parse_from(["dirsweep"])).unwrap();
    assert_eq!(output, "24933642");
}

#[test]
fn explicit_config_file_is_used() {
    let temp_dir = workspace_with_input();
    let config_path = temp_dir.path().join("loose.toml");
    fs::write(
        &config_path,
        "[disk]\ntotal_disk_space = 70000000\nrequired_free_space = 21618835\n",
    )
    .unwrap();

    let context = CliContext::new(Some(config_path), temp_dir.path().to_path_buf()).unwrap();
    let output = context.execute(&Cli::parse_from(["dirsweep"])).unwrap();
    assert_eq!(output, "584");
}

#[test]
fn malformed_transcript_reports_line() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.txt"), "$ cd /\n$ ls\nnot a listing\n").unwrap();
    let context = CliContext::new(None, temp_dir.path().to_path_buf()).unwrap();

    let err = context
        .execute(&Cli::parse_from(["dirsweep", "bad.txt"]))
        .unwrap_err();
    assert!(matches!(err, SweepError::Parse { line: 3, .. }));
    assert!(err.to_string().contains("not a listing"));
}
