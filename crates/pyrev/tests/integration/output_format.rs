use std::process::Command;

use tempfile::TempDir;

use crate::helpers::binary_path;

#[test]
fn test_json_output_is_parseable() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.py"), "import math\nprint(1)\n")?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .env("NO_COLOR", "1")
        .args(["check", "test.py", "--output-format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let files = value.as_array().expect("top level must be an array");
    assert_eq!(files.len(), 1);

    let record = &files[0];
    assert_eq!(record["file"], "test.py");
    assert!(record["elapsed_ms"].is_u64());

    let findings = record["findings"].as_array().expect("findings array");
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["rule_id"], "unused_import");
    assert_eq!(findings[0]["severity"], "warning");
    assert_eq!(findings[0]["line"], 1);
    assert_eq!(findings[0]["metadata"]["symbol"], "math");
    assert_eq!(findings[1]["rule_id"], "print_statement");
    assert_eq!(findings[1]["column"], 1);

    Ok(())
}

#[test]
fn test_json_output_for_clean_file_is_empty_list_of_findings() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("clean.py"),
        "def foo():\n    \"\"\"Return one.\"\"\"\n    return 1\n",
    )?;

    let output = Command::new(binary_path())
        .current_dir(directory)
        .env("NO_COLOR", "1")
        .args(["check", "clean.py", "--output-format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value[0]["findings"].as_array().map(Vec::len), Some(0));

    Ok(())
}
