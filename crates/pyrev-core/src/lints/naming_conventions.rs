use rustpython_parser::ast::{Expr, Stmt};

use crate::diagnostic::{Finding, Severity};
use crate::lints::Rule;
use crate::parse::ParsedModule;
use crate::sink::Sink;
use crate::utils::is_snake_case;
use crate::walk::{walk_suite, AnyNode};

/// ## What it does
///
/// Checks that function names (`function_naming`) and assigned variable
/// names (`variable_naming`) follow the snake_case convention
/// (`^[a-z_][a-z0-9_]*$`).
///
/// Variable targets starting with `_` are left alone; only bare names
/// assigned directly by an assignment statement are considered.
///
/// ## Example
///
/// ```python
/// def CamelCaseFunction():
///     MixedCase = 1
/// ```
pub struct NamingConventions;

impl Rule for NamingConventions {
    fn rule_id(&self) -> &'static str {
        "naming_conventions"
    }

    fn analyze(&self, module: &ParsedModule, sink: &mut Sink) -> anyhow::Result<()> {
        walk_suite(module.body(), &mut |node| {
            let AnyNode::Stmt(stmt) = node else { return };
            match stmt {
                Stmt::FunctionDef(def) => {
                    if !is_snake_case(def.name.as_str()) {
                        sink.report(naming_finding(
                            "function_naming",
                            "Function",
                            def.name.as_str(),
                            module.start_line(def),
                        ));
                    }
                }
                Stmt::Assign(assign) => {
                    for target in &assign.targets {
                        if let Expr::Name(name) = target
                            && !name.id.starts_with('_')
                            && !is_snake_case(name.id.as_str())
                        {
                            sink.report(naming_finding(
                                "variable_naming",
                                "Variable",
                                name.id.as_str(),
                                module.start_line(name),
                            ));
                        }
                    }
                }
                _ => {}
            }
        });

        Ok(())
    }
}

fn naming_finding(rule_id: &str, entity: &str, name: &str, line: u32) -> Finding {
    Finding::new(
        rule_id,
        format!("{entity} '{name}' should follow snake_case convention."),
        Severity::Info,
    )
    .at_line(line)
    .with_meta("name", name)
}
