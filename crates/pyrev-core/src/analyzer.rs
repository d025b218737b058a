use std::time::Instant;

use crate::diagnostic::{AnalysisResult, Finding, Severity};
use crate::error::AnalyzeError;
use crate::parse::parse_module;
use crate::registry::RuleRegistry;
use crate::sink::Sink;

/// The analysis engine: parses a source snippet and runs the registry's
/// rules over it in order.
///
/// One `analyze` call is synchronous and single-threaded, owns its tree and
/// its sink, and performs no I/O. The engine itself is immutable, so a
/// single `Analyzer` can serve concurrent callers.
pub struct Analyzer {
    registry: RuleRegistry,
}

impl Analyzer {
    /// An analyzer running the default rule set.
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::default(),
        }
    }

    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Analyzes one source snippet.
    ///
    /// A source that does not parse is a normal input: it yields a result
    /// holding exactly one `syntax_error` finding and no rule runs. An `Err`
    /// is returned only for caller mistakes (empty source) or a defect in a
    /// rule, which is never converted into an empty success.
    pub fn analyze(&self, source: &str) -> Result<AnalysisResult, AnalyzeError> {
        if source.is_empty() {
            return Err(AnalyzeError::EmptySource);
        }

        let start = Instant::now();

        let module = match parse_module(source) {
            Ok(module) => module,
            Err(err) => {
                tracing::debug!(%err, "source failed to parse");
                let mut finding = Finding::new(
                    "syntax_error",
                    format!("Syntax error: {}", err.message),
                    Severity::Error,
                );
                finding.line = err.line;
                finding.column = err.column;
                return Ok(AnalysisResult {
                    findings: vec![finding],
                    elapsed_ms: start.elapsed().as_millis() as u64,
                });
            }
        };

        let mut sink = Sink::new();
        for rule in self.registry.iter() {
            tracing::trace!(rule = rule.rule_id(), "running rule");
            rule.analyze(&module, &mut sink)
                .map_err(|source| AnalyzeError::RuleDefect {
                    rule: rule.rule_id(),
                    source,
                })?;
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(findings = sink.len(), elapsed_ms, "analysis finished");

        Ok(AnalysisResult {
            findings: sink.into_findings(),
            elapsed_ms,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
