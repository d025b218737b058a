use rustpython_parser::ast::{Expr, Stmt};

use crate::diagnostic::{Finding, Severity};
use crate::lints::Rule;
use crate::parse::ParsedModule;
use crate::sink::Sink;
use crate::walk::{walk_stmt, walk_suite, AnyNode};

const MAX_FUNCTION_LENGTH: u32 = 50;
const MAX_CYCLOMATIC_COMPLEXITY: usize = 10;

/// ## What it does
///
/// Measures every function definition and reports the ones that are too long
/// (`long_function`) or too branchy (`high_cyclomatic_complexity`).
///
/// ## Why is this bad?
///
/// Long or heavily branching functions are hard to read, test, and change.
/// Complexity starts at 1 and adds 1 for every conditional, loop, `with`,
/// `try`, boolean operator, comprehension clause, and exception handler
/// anywhere inside the function, nested functions included.
///
/// Both thresholds are exclusive: a 50-line function and a complexity of 10
/// are both still fine.
pub struct FunctionMetrics;

impl Rule for FunctionMetrics {
    fn rule_id(&self) -> &'static str {
        "function_metrics"
    }

    fn analyze(&self, module: &ParsedModule, sink: &mut Sink) -> anyhow::Result<()> {
        walk_suite(module.body(), &mut |node| {
            let AnyNode::Stmt(stmt) = node else { return };
            let Stmt::FunctionDef(def) = stmt else { return };

            let line = module.start_line(def);
            let length = module.end_line(def) - line + 1;
            if length > MAX_FUNCTION_LENGTH {
                sink.report(
                    Finding::new(
                        "long_function",
                        format!(
                            "Function '{}' has {length} lines (recommended maximum: {MAX_FUNCTION_LENGTH}).",
                            def.name.as_str()
                        ),
                        Severity::Warning,
                    )
                    .at_line(line)
                    .with_meta("length", length as usize),
                );
            }

            let complexity = cyclomatic_complexity(stmt);
            if complexity > MAX_CYCLOMATIC_COMPLEXITY {
                sink.report(
                    Finding::new(
                        "high_cyclomatic_complexity",
                        format!(
                            "Function '{}' has cyclomatic complexity {complexity} (recommended maximum: {MAX_CYCLOMATIC_COMPLEXITY}).",
                            def.name.as_str()
                        ),
                        Severity::Warning,
                    )
                    .at_line(line)
                    .with_meta("complexity", complexity),
                );
            }
        });

        Ok(())
    }
}

// 1 + one per branching construct in the full subtree of the function.
fn cyclomatic_complexity(stmt: &Stmt) -> usize {
    let mut complexity = 1;
    walk_stmt(stmt, &mut |node| {
        let counted = match node {
            AnyNode::Stmt(stmt) => matches!(
                stmt,
                Stmt::If(_)
                    | Stmt::For(_)
                    | Stmt::AsyncFor(_)
                    | Stmt::While(_)
                    | Stmt::With(_)
                    | Stmt::AsyncWith(_)
                    | Stmt::Try(_)
                    | Stmt::TryStar(_)
            ),
            AnyNode::Expr(expr) => matches!(expr, Expr::BoolOp(_)),
            AnyNode::Comprehension(_) | AnyNode::ExceptHandler(_) => true,
        };
        if counted {
            complexity += 1;
        }
    });
    complexity
}
