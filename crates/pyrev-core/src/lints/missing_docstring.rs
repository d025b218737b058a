use rustpython_parser::ast::{Constant, Expr, Stmt};

use crate::diagnostic::{Finding, Severity};
use crate::lints::Rule;
use crate::parse::ParsedModule;
use crate::sink::Sink;
use crate::walk::{walk_suite, AnyNode};

/// ## What it does
///
/// Checks that every public function or coroutine function starts with a
/// docstring. Functions whose name starts with `_` are treated as internal
/// and skipped.
///
/// ## Example
///
/// ```python
/// def fetch(url):
///     """Download `url` and return its body."""
///     ...
/// ```
pub struct MissingDocstring;

impl Rule for MissingDocstring {
    fn rule_id(&self) -> &'static str {
        "missing_docstring"
    }

    fn analyze(&self, module: &ParsedModule, sink: &mut Sink) -> anyhow::Result<()> {
        walk_suite(module.body(), &mut |node| {
            let AnyNode::Stmt(stmt) = node else { return };
            let (name, body) = match stmt {
                Stmt::FunctionDef(def) => (&def.name, &def.body),
                Stmt::AsyncFunctionDef(def) => (&def.name, &def.body),
                _ => return,
            };

            if name.starts_with('_') || has_docstring(body) {
                return;
            }

            sink.report(
                Finding::new(
                    self.rule_id(),
                    format!("Function '{}' should have a docstring.", name.as_str()),
                    Severity::Info,
                )
                .at_line(module.start_line(stmt)),
            );
        });

        Ok(())
    }
}

// A docstring is a leading expression statement holding a string literal.
fn has_docstring(body: &[Stmt]) -> bool {
    match body.first() {
        Some(Stmt::Expr(leading)) => matches!(
            leading.value.as_ref(),
            Expr::Constant(constant) if matches!(constant.value, Constant::Str(_))
        ),
        _ => false,
    }
}
