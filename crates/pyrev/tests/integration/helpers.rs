use std::process::Command;

pub fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_pyrev")
}

/// Runs the command and renders status, stdout and stderr into one stable
/// block for snapshotting.
pub fn run(cmd: &mut Command) -> String {
    let output = cmd.output().expect("failed to run pyrev binary");
    format!(
        "success: {}\nexit_code: {}\n----- stdout -----\n{}----- stderr -----\n{}",
        output.status.success(),
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    )
}
