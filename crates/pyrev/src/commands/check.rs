use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use pyrev_core::{AnalysisResult, Analyzer, RuleRegistry};
use rayon::prelude::*;

use crate::args::CheckCommand;
use crate::output_format::{emitter_for, CheckedFile, OutputFormat};
use crate::status::ExitStatus;

pub fn check(args: CheckCommand) -> Result<ExitStatus> {
    let start = args.with_timing.then(Instant::now);

    let registry = if args.select.is_empty() {
        RuleRegistry::default()
    } else {
        // Stray commas produce empty segments; skip them rather than try to
        // resolve an empty rule id.
        let ids: Vec<&str> = args
            .select
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect();
        RuleRegistry::from_ids(&ids)?
    };
    // One analyzer serves all files: rules are stateless, so the registry can
    // be shared across the worker threads without locking.
    let analyzer = Analyzer::with_registry(registry);

    // A named path that does not exist is an error, not an empty result: a
    // typo in CI must not pass as "nothing to check".
    for file in &args.files {
        if !Path::new(file).exists() {
            eprintln!(
                "{}: no such file or directory: {file}",
                "error".red().bold()
            );
            return Ok(ExitStatus::Error);
        }
    }

    let paths = discover_python_files(&args.files);
    if paths.is_empty() {
        println!(
            "{}: {}",
            "Warning".yellow().bold(),
            "No Python files found under the given path(s).".white().bold()
        );
        return Ok(ExitStatus::Success);
    }

    let mut results: Vec<(PathBuf, Result<AnalysisResult>)> = paths
        .par_iter()
        .map(|path| (path.clone(), check_path(path, &analyzer)))
        .collect();
    // Deterministic emission order whatever the worker threads did.
    results.sort_by(|a, b| a.0.cmp(&b.0));

    let mut checked = Vec::new();
    let mut errors = Vec::new();
    for (path, result) in results {
        match result {
            Ok(result) => checked.push(CheckedFile {
                file: path.display().to_string(),
                result,
            }),
            Err(err) => errors.push((path, err)),
        }
    }

    for (path, err) in &errors {
        eprintln!(
            "{}: failed to check {}: {err:#}",
            "error".red().bold(),
            path.display()
        );
    }

    let total_findings: usize = checked.iter().map(|file| file.result.findings.len()).sum();

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    emitter_for(args.output_format).emit(&mut writer, &checked)?;

    if args.output_format == OutputFormat::Concise {
        if total_findings == 0 && errors.is_empty() {
            println!("All checks passed!");
        } else if total_findings == 1 {
            println!("Found 1 finding.");
        } else if total_findings > 1 {
            println!("Found {total_findings} findings.");
        }
        if let Some(start) = start {
            println!(
                "Checked {} file(s) in {} ms.",
                checked.len(),
                start.elapsed().as_millis()
            );
        }
    }

    if !errors.is_empty() {
        Ok(ExitStatus::Error)
    } else if total_findings > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn check_path(path: &PathBuf, analyzer: &Analyzer) -> Result<AnalysisResult> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    // The engine treats an empty source as a caller error; an empty file on
    // disk is simply a file with nothing to report.
    if contents.is_empty() {
        return Ok(AnalysisResult {
            findings: Vec::new(),
            elapsed_ms: 0,
        });
    }

    analyzer
        .analyze(&contents)
        .with_context(|| format!("Failed to analyze file: {}", path.display()))
}

// Walks the given paths with gitignore-aware traversal and keeps `.py` files.
fn discover_python_files(files: &[String]) -> Vec<PathBuf> {
    let Some((first, rest)) = files.split_first() else {
        return Vec::new();
    };

    let mut builder = ignore::WalkBuilder::new(first);
    for path in rest {
        builder.add(path);
    }

    let mut paths = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|t| t.is_file());
                if is_file && entry.path().extension().is_some_and(|ext| ext == "py") {
                    paths.push(entry.into_path());
                }
            }
            Err(err) => tracing::warn!(%err, "skipping unreadable path"),
        }
    }

    paths.sort();
    paths.dedup();
    paths
}
