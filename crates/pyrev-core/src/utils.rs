use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use rustpython_parser::ast::{Expr, ExprContext, Stmt};

use crate::walk::{walk_suite, AnyNode};

static SNAKE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap());

/// Whether a name conforms to the snake_case convention.
pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE.is_match(name)
}

/// First dotted segment of a name: `os.path` -> `os`.
pub fn first_segment(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// All identifier names referenced in a load (read) context anywhere in the
/// tree, including nested scopes.
pub fn collect_load_names(body: &[Stmt]) -> FxHashSet<&str> {
    let mut names = FxHashSet::default();
    walk_suite(body, &mut |node| {
        if let AnyNode::Expr(Expr::Name(name)) = node
            && matches!(name.ctx, ExprContext::Load)
        {
            names.insert(name.id.as_str());
        }
    });
    names
}

/// Records the line where each binding was introduced, preserving first-seen
/// order. Re-inserting a key updates its line but keeps its position, the
/// semantics rules rely on so that re-bound names are reported once, at their
/// last binding site, in first-binding order.
#[derive(Debug, Default)]
pub struct BindingLines {
    entries: Vec<(String, u32)>,
}

impl BindingLines {
    pub fn insert(&mut self, key: &str, line: u32) {
        match self.entries.iter_mut().find(|(name, _)| name == key) {
            Some((_, stored)) => *stored = line,
            None => self.entries.push((key.to_string(), line)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, line)| (name.as_str(), *line))
    }
}
