use crate::parse::ParsedModule;
use crate::sink::Sink;

pub(crate) mod function_metrics;
pub(crate) mod missing_docstring;
pub(crate) mod naming_conventions;
pub(crate) mod print_statement;
pub(crate) mod unused_import;
pub(crate) mod unused_variable;

pub use function_metrics::FunctionMetrics;
pub use missing_docstring::MissingDocstring;
pub use naming_conventions::NamingConventions;
pub use print_statement::PrintStatement;
pub use unused_import::UnusedImport;
pub use unused_variable::UnusedVariable;

/// A stateless unit of analysis.
///
/// Each `analyze` call is independent and side-effect-free beyond appending
/// to the sink, so a rule instance can be shared across threads and invoked
/// in any order. A rule must not fail for a well-formed tree; returning an
/// error marks a defect in the rule itself and aborts the whole run.
pub trait Rule: Send + Sync {
    /// Stable identifier used to select the rule. Some rules emit findings
    /// under more specific ids (e.g. `function_metrics` emits
    /// `long_function` and `high_cyclomatic_complexity`).
    fn rule_id(&self) -> &'static str;

    fn analyze(&self, module: &ParsedModule, sink: &mut Sink) -> anyhow::Result<()>;
}

/// The built-in rules, in the canonical order used for default runs.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(UnusedImport),
        Box::new(UnusedVariable),
        Box::new(FunctionMetrics),
        Box::new(NamingConventions),
        Box::new(MissingDocstring),
        Box::new(PrintStatement),
    ]
}

/// Looks up a single built-in rule by its registry id.
pub fn rule_by_id(id: &str) -> Option<Box<dyn Rule>> {
    match id {
        "unused_import" => Some(Box::new(UnusedImport)),
        "unused_variable" => Some(Box::new(UnusedVariable)),
        "function_metrics" => Some(Box::new(FunctionMetrics)),
        "naming_conventions" => Some(Box::new(NamingConventions)),
        "missing_docstring" => Some(Box::new(MissingDocstring)),
        "print_statement" => Some(Box::new(PrintStatement)),
        _ => None,
    }
}
