use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How important a finding is.
///
/// `Error` is reserved for findings that mean the analysis could not proceed
/// normally (a syntax error). Rules themselves only emit `Info` and `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A rule-specific metadata value.
///
/// Kept as a small tagged type instead of a fully dynamic one so findings
/// stay serializable and comparable in tests, while each rule can still
/// attach its own extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Int(i64),
    Str(String),
    Map(BTreeMap<String, MetaValue>),
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Int(value)
    }
}

impl From<usize> for MetaValue {
    fn from(value: usize) -> Self {
        MetaValue::Int(value as i64)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Str(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Str(value)
    }
}

/// One reported issue.
///
/// Findings are fully detached snapshots: they borrow nothing from the syntax
/// tree and map cleanly to a flat record for callers that serialize them.
/// `line` and `column` are 1-based and absent when not applicable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub message: String,
    pub severity: Severity,
    pub line: Option<u32>,
    pub column: Option<u32>,
    #[serde(default)]
    pub metadata: BTreeMap<String, MetaValue>,
}

impl Finding {
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            severity,
            line: None,
            column: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Attaches a 1-based source position.
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Attaches a 1-based line with no column, for findings that point at a
    /// whole statement rather than a spot inside it.
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Output of one analysis run.
///
/// `findings` preserves insertion order: rule execution order first, then
/// emission order within a rule. `elapsed_ms` covers tree-build plus rule
/// execution, measured by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub findings: Vec<Finding>,
    pub elapsed_ms: u64,
}
