use std::process::ExitCode;

use clap::Parser;
use pyrev::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    match pyrev::run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
