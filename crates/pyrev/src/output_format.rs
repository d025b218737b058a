use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;
use pyrev_core::{AnalysisResult, Severity};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Concise,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Concise => write!(f, "concise"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One analyzed file, ready for emission.
#[derive(Debug, Serialize)]
pub struct CheckedFile {
    pub file: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Writes analysis results in one output format.
pub trait Emitter {
    fn emit(&self, writer: &mut dyn Write, checked: &[CheckedFile]) -> anyhow::Result<()>;
}

/// `file:line:column: severity rule_id message`, one finding per line.
pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit(&self, writer: &mut dyn Write, checked: &[CheckedFile]) -> anyhow::Result<()> {
        for file in checked {
            for finding in &file.result.findings {
                let severity = match finding.severity {
                    Severity::Info => "info".cyan(),
                    Severity::Warning => "warning".yellow(),
                    Severity::Error => "error".red().bold(),
                };
                writeln!(
                    writer,
                    "{}:{}:{}: {} {} {}",
                    file.file,
                    finding.line.unwrap_or(1),
                    finding.column.unwrap_or(1),
                    severity,
                    finding.rule_id.bold(),
                    finding.message
                )?;
            }
        }
        Ok(())
    }
}

/// One JSON array with a record per file: findings plus the analysis time.
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit(&self, writer: &mut dyn Write, checked: &[CheckedFile]) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, checked)?;
        writeln!(writer)?;
        Ok(())
    }
}

pub fn emitter_for(format: OutputFormat) -> Box<dyn Emitter> {
    match format {
        OutputFormat::Concise => Box::new(ConciseEmitter),
        OutputFormat::Json => Box::new(JsonEmitter),
    }
}
