use rustpython_parser::ast::{Expr, ExprContext};

use crate::diagnostic::{Finding, Severity};
use crate::lints::Rule;
use crate::parse::ParsedModule;
use crate::sink::Sink;
use crate::utils::{collect_load_names, BindingLines};
use crate::walk::{walk_suite, AnyNode};

/// ## What it does
///
/// Checks for names that are assigned but never read.
///
/// ## Why is this bad?
///
/// A value that is computed and then never used is either dead code or a
/// typo in a later reference.
///
/// Names starting with `_` are exempt by convention: they mark values that
/// are intentionally discarded.
///
/// ## Example
///
/// ```python
/// def total(items):
///     count = len(items)  # never read
///     return sum(items)
/// ```
pub struct UnusedVariable;

impl Rule for UnusedVariable {
    fn rule_id(&self) -> &'static str {
        "unused_variable"
    }

    fn analyze(&self, module: &ParsedModule, sink: &mut Sink) -> anyhow::Result<()> {
        // Bare name -> line of its last assignment, in first-assignment order.
        let mut assigned = BindingLines::default();

        walk_suite(module.body(), &mut |node| {
            if let AnyNode::Expr(Expr::Name(name)) = node
                && matches!(name.ctx, ExprContext::Store)
                && !name.id.starts_with('_')
            {
                assigned.insert(name.id.as_str(), module.start_line(name));
            }
        });

        let used_names = collect_load_names(module.body());

        for (name, line) in assigned.iter() {
            if !used_names.contains(name) {
                sink.report(
                    Finding::new(
                        self.rule_id(),
                        format!("Variable '{name}' is assigned but never used."),
                        Severity::Info,
                    )
                    .at_line(line)
                    .with_meta("symbol", name),
                );
            }
        }

        Ok(())
    }
}
