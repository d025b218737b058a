use rustpython_parser::ast::Expr;

use crate::diagnostic::{Finding, Severity};
use crate::lints::Rule;
use crate::parse::ParsedModule;
use crate::sink::Sink;
use crate::walk::{walk_suite, AnyNode};

/// ## What it does
///
/// Checks for direct calls to the bare `print` builtin.
///
/// ## Why is this bad?
///
/// `print` output bypasses log levels, formatting, and redirection. In
/// production code, a logger is almost always what was meant.
pub struct PrintStatement;

impl Rule for PrintStatement {
    fn rule_id(&self) -> &'static str {
        "print_statement"
    }

    fn analyze(&self, module: &ParsedModule, sink: &mut Sink) -> anyhow::Result<()> {
        walk_suite(module.body(), &mut |node| {
            let AnyNode::Expr(Expr::Call(call)) = node else { return };
            let Expr::Name(func) = call.func.as_ref() else { return };
            if func.id.as_str() != "print" {
                return;
            }

            let (line, column) = module.start(call);
            sink.report(
                Finding::new(
                    self.rule_id(),
                    "Consider using logging instead of print for production output.",
                    Severity::Info,
                )
                .at(line, column),
            );
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::utils_test::format_findings;
    use insta::assert_snapshot;

    fn lint(code: &str) -> String {
        format_findings(code, "print_statement")
    }

    #[test]
    fn test_print_call() {
        assert_snapshot!(
            lint("print(\"hello\")\n"),
            @"info: print_statement [1:1] Consider using logging instead of print for production output."
        );
    }

    #[test]
    fn test_column_points_at_the_call() {
        assert_snapshot!(
            lint("def run():\n    print(\"x\")\n"),
            @"info: print_statement [2:5] Consider using logging instead of print for production output."
        );
    }

    #[test]
    fn test_method_named_print_is_not_flagged() {
        assert_snapshot!(lint("logger.print(\"hello\")\n"), @"No findings.");
    }

    #[test]
    fn test_print_reference_without_call_is_not_flagged() {
        assert_snapshot!(lint("writer = print\n"), @"No findings.");
    }

    #[test]
    fn test_each_call_is_reported() {
        assert_snapshot!(
            lint("print(1)\nprint(2)\n"),
            @r"
        info: print_statement [1:1] Consider using logging instead of print for production output.
        info: print_statement [2:1] Consider using logging instead of print for production output.
        "
        );
    }
}
