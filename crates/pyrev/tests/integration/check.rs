use std::process::Command;

use tempfile::TempDir;

use crate::helpers::{binary_path, run};

fn pyrev(directory: &std::path::Path) -> Command {
    let mut cmd = Command::new(binary_path());
    cmd.current_dir(directory).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_check_reports_findings() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("test.py"),
        "import math\n\ndef CamelCaseFunction():\n    unused_var = 10\n    print(\"hello\")\n    return 42\n",
    )?;

    insta::assert_snapshot!(
        run(pyrev(directory).arg("check").arg("test.py")),
        @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    test.py:1:1: warning unused_import Import 'math' is unused.
    test.py:4:1: info unused_variable Variable 'unused_var' is assigned but never used.
    test.py:3:1: info function_naming Function 'CamelCaseFunction' should follow snake_case convention.
    test.py:3:1: info missing_docstring Function 'CamelCaseFunction' should have a docstring.
    test.py:5:5: info print_statement Consider using logging instead of print for production output.
    Found 5 findings.
    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_clean_file_passes() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("clean.py"),
        "def foo():\n    \"\"\"Return one.\"\"\"\n    return 1\n",
    )?;

    insta::assert_snapshot!(
        run(pyrev(directory).arg("check").arg("clean.py")),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    All checks passed!
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_syntax_error_is_a_finding_not_a_crash() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("broken.py"), "def broken(:\n    pass\n")?;

    let output = run(pyrev(directory).arg("check").arg("broken.py"));
    assert!(output.contains("exit_code: 1"), "{output}");
    assert!(output.contains("syntax_error"), "{output}");
    assert!(output.contains("broken.py:1:"), "{output}");

    Ok(())
}

#[test]
fn test_select_runs_only_the_named_rules() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.py"), "print(\"hello\")\n")?;

    insta::assert_snapshot!(
        run(pyrev(directory)
            .arg("check")
            .arg("test.py")
            .args(["--select", "unused_import,unused_variable"])),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    All checks passed!
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_unknown_rule_fails() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.py"), "x = 1\n")?;

    let output = run(pyrev(directory)
        .arg("check")
        .arg("test.py")
        .args(["--select", "bogus_rule"]));
    assert!(output.contains("exit_code: 2"), "{output}");
    assert!(output.contains("unknown rule"), "{output}");

    Ok(())
}

#[test]
fn test_select_ignores_stray_commas() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.py"), "import math\n")?;

    // A trailing comma must not resolve to an empty rule id.
    insta::assert_snapshot!(
        run(pyrev(directory)
            .arg("check")
            .arg("test.py")
            .args(["--select", "unused_import,"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.py:1:1: warning unused_import Import 'math' is unused.
    Found 1 finding.
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_nonexistent_path_is_an_error() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let output = run(pyrev(directory).arg("check").arg("missing.py"));
    assert!(output.contains("exit_code: 2"), "{output}");
    assert!(output.contains("no such file or directory: missing.py"), "{output}");

    Ok(())
}

#[test]
fn test_no_python_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    insta::assert_snapshot!(
        run(pyrev(directory).arg("check").arg(".")),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Warning: No Python files found under the given path(s).
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_directory_walk_finds_nested_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::create_dir(directory.join("pkg"))?;
    std::fs::write(directory.join("pkg").join("mod.py"), "import json\n")?;
    std::fs::write(directory.join("notes.txt"), "import not_python\n")?;

    let output = run(pyrev(directory).arg("check").arg("."));
    assert!(output.contains("unused_import"), "{output}");
    assert!(output.contains("mod.py"), "{output}");
    assert!(!output.contains("notes.txt"), "{output}");

    Ok(())
}
