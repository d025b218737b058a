//! Pre-order traversal over the Python AST.
//!
//! Rules filter on node kind via pattern matching on [`AnyNode`] instead of
//! each reimplementing recursion. A node is always visited before its
//! children, and children are visited in source order, which is what makes
//! the emission order of every rule deterministic.

use rustpython_parser::ast::{self, Expr, Stmt};

/// One node handed to the visitor.
#[derive(Debug, Clone, Copy)]
pub enum AnyNode<'a> {
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Comprehension(&'a ast::Comprehension),
    ExceptHandler(&'a ast::ExceptHandler),
}

/// Walks a whole module body in pre-order.
pub fn walk_suite<'a, F: FnMut(AnyNode<'a>)>(suite: &'a [Stmt], visit: &mut F) {
    for stmt in suite {
        walk_stmt(stmt, visit);
    }
}

fn walk_opt_expr<'a, F: FnMut(AnyNode<'a>)>(expr: &'a Option<Box<Expr>>, visit: &mut F) {
    if let Some(expr) = expr {
        walk_expr(expr, visit);
    }
}

fn walk_arguments<'a, F: FnMut(AnyNode<'a>)>(args: &'a ast::Arguments, visit: &mut F) {
    for arg in args.posonlyargs.iter().chain(&args.args).chain(&args.kwonlyargs) {
        walk_opt_expr(&arg.def.annotation, visit);
        if let Some(default) = &arg.default {
            walk_expr(default, visit);
        }
    }
    if let Some(vararg) = &args.vararg {
        walk_opt_expr(&vararg.annotation, visit);
    }
    if let Some(kwarg) = &args.kwarg {
        walk_opt_expr(&kwarg.annotation, visit);
    }
}

fn walk_pattern<'a, F: FnMut(AnyNode<'a>)>(pattern: &'a ast::Pattern, visit: &mut F) {
    match pattern {
        ast::Pattern::MatchValue(node) => walk_expr(&node.value, visit),
        ast::Pattern::MatchSingleton(_) => {}
        ast::Pattern::MatchSequence(node) => {
            for p in &node.patterns {
                walk_pattern(p, visit);
            }
        }
        ast::Pattern::MatchMapping(node) => {
            for key in &node.keys {
                walk_expr(key, visit);
            }
            for p in &node.patterns {
                walk_pattern(p, visit);
            }
        }
        ast::Pattern::MatchClass(node) => {
            walk_expr(&node.cls, visit);
            for p in node.patterns.iter().chain(&node.kwd_patterns) {
                walk_pattern(p, visit);
            }
        }
        ast::Pattern::MatchStar(_) => {}
        ast::Pattern::MatchAs(node) => {
            if let Some(p) = &node.pattern {
                walk_pattern(p, visit);
            }
        }
        ast::Pattern::MatchOr(node) => {
            for p in &node.patterns {
                walk_pattern(p, visit);
            }
        }
    }
}

/// Visits a statement, then all of its children.
pub fn walk_stmt<'a, F: FnMut(AnyNode<'a>)>(stmt: &'a Stmt, visit: &mut F) {
    visit(AnyNode::Stmt(stmt));

    match stmt {
        Stmt::FunctionDef(node) => {
            for decorator in &node.decorator_list {
                walk_expr(decorator, visit);
            }
            walk_arguments(&node.args, visit);
            walk_opt_expr(&node.returns, visit);
            walk_suite(&node.body, visit);
        }
        Stmt::AsyncFunctionDef(node) => {
            for decorator in &node.decorator_list {
                walk_expr(decorator, visit);
            }
            walk_arguments(&node.args, visit);
            walk_opt_expr(&node.returns, visit);
            walk_suite(&node.body, visit);
        }
        Stmt::ClassDef(node) => {
            for decorator in &node.decorator_list {
                walk_expr(decorator, visit);
            }
            for base in &node.bases {
                walk_expr(base, visit);
            }
            for keyword in &node.keywords {
                walk_expr(&keyword.value, visit);
            }
            walk_suite(&node.body, visit);
        }
        Stmt::Return(node) => walk_opt_expr(&node.value, visit),
        Stmt::Delete(node) => {
            for target in &node.targets {
                walk_expr(target, visit);
            }
        }
        Stmt::Assign(node) => {
            for target in &node.targets {
                walk_expr(target, visit);
            }
            walk_expr(&node.value, visit);
        }
        Stmt::TypeAlias(node) => {
            walk_expr(&node.name, visit);
            walk_expr(&node.value, visit);
        }
        Stmt::AugAssign(node) => {
            walk_expr(&node.target, visit);
            walk_expr(&node.value, visit);
        }
        Stmt::AnnAssign(node) => {
            walk_expr(&node.target, visit);
            walk_expr(&node.annotation, visit);
            walk_opt_expr(&node.value, visit);
        }
        Stmt::For(node) => {
            walk_expr(&node.target, visit);
            walk_expr(&node.iter, visit);
            walk_suite(&node.body, visit);
            walk_suite(&node.orelse, visit);
        }
        Stmt::AsyncFor(node) => {
            walk_expr(&node.target, visit);
            walk_expr(&node.iter, visit);
            walk_suite(&node.body, visit);
            walk_suite(&node.orelse, visit);
        }
        Stmt::While(node) => {
            walk_expr(&node.test, visit);
            walk_suite(&node.body, visit);
            walk_suite(&node.orelse, visit);
        }
        Stmt::If(node) => {
            walk_expr(&node.test, visit);
            walk_suite(&node.body, visit);
            walk_suite(&node.orelse, visit);
        }
        Stmt::With(node) => {
            for item in &node.items {
                walk_expr(&item.context_expr, visit);
                walk_opt_expr(&item.optional_vars, visit);
            }
            walk_suite(&node.body, visit);
        }
        Stmt::AsyncWith(node) => {
            for item in &node.items {
                walk_expr(&item.context_expr, visit);
                walk_opt_expr(&item.optional_vars, visit);
            }
            walk_suite(&node.body, visit);
        }
        Stmt::Match(node) => {
            walk_expr(&node.subject, visit);
            for case in &node.cases {
                walk_pattern(&case.pattern, visit);
                if let Some(guard) = &case.guard {
                    walk_expr(guard, visit);
                }
                walk_suite(&case.body, visit);
            }
        }
        Stmt::Raise(node) => {
            walk_opt_expr(&node.exc, visit);
            walk_opt_expr(&node.cause, visit);
        }
        Stmt::Try(node) => {
            walk_suite(&node.body, visit);
            for handler in &node.handlers {
                walk_except_handler(handler, visit);
            }
            walk_suite(&node.orelse, visit);
            walk_suite(&node.finalbody, visit);
        }
        Stmt::TryStar(node) => {
            walk_suite(&node.body, visit);
            for handler in &node.handlers {
                walk_except_handler(handler, visit);
            }
            walk_suite(&node.orelse, visit);
            walk_suite(&node.finalbody, visit);
        }
        Stmt::Assert(node) => {
            walk_expr(&node.test, visit);
            walk_opt_expr(&node.msg, visit);
        }
        Stmt::Expr(node) => walk_expr(&node.value, visit),
        // Imports carry aliases, not expressions; rules read those directly
        // from the statement.
        Stmt::Import(_)
        | Stmt::ImportFrom(_)
        | Stmt::Global(_)
        | Stmt::Nonlocal(_)
        | Stmt::Pass(_)
        | Stmt::Break(_)
        | Stmt::Continue(_) => {}
    }
}

fn walk_except_handler<'a, F: FnMut(AnyNode<'a>)>(
    handler: &'a ast::ExceptHandler,
    visit: &mut F,
) {
    visit(AnyNode::ExceptHandler(handler));
    let ast::ExceptHandler::ExceptHandler(node) = handler;
    walk_opt_expr(&node.type_, visit);
    walk_suite(&node.body, visit);
}

fn walk_comprehensions<'a, F: FnMut(AnyNode<'a>)>(
    generators: &'a [ast::Comprehension],
    visit: &mut F,
) {
    for comprehension in generators {
        visit(AnyNode::Comprehension(comprehension));
        walk_expr(&comprehension.target, visit);
        walk_expr(&comprehension.iter, visit);
        for cond in &comprehension.ifs {
            walk_expr(cond, visit);
        }
    }
}

/// Visits an expression, then all of its children.
pub fn walk_expr<'a, F: FnMut(AnyNode<'a>)>(expr: &'a Expr, visit: &mut F) {
    visit(AnyNode::Expr(expr));

    match expr {
        Expr::BoolOp(node) => {
            for value in &node.values {
                walk_expr(value, visit);
            }
        }
        Expr::NamedExpr(node) => {
            walk_expr(&node.target, visit);
            walk_expr(&node.value, visit);
        }
        Expr::BinOp(node) => {
            walk_expr(&node.left, visit);
            walk_expr(&node.right, visit);
        }
        Expr::UnaryOp(node) => walk_expr(&node.operand, visit),
        Expr::Lambda(node) => {
            walk_arguments(&node.args, visit);
            walk_expr(&node.body, visit);
        }
        Expr::IfExp(node) => {
            walk_expr(&node.test, visit);
            walk_expr(&node.body, visit);
            walk_expr(&node.orelse, visit);
        }
        Expr::Dict(node) => {
            for key in node.keys.iter().flatten() {
                walk_expr(key, visit);
            }
            for value in &node.values {
                walk_expr(value, visit);
            }
        }
        Expr::Set(node) => {
            for elt in &node.elts {
                walk_expr(elt, visit);
            }
        }
        Expr::ListComp(node) => {
            walk_expr(&node.elt, visit);
            walk_comprehensions(&node.generators, visit);
        }
        Expr::SetComp(node) => {
            walk_expr(&node.elt, visit);
            walk_comprehensions(&node.generators, visit);
        }
        Expr::DictComp(node) => {
            walk_expr(&node.key, visit);
            walk_expr(&node.value, visit);
            walk_comprehensions(&node.generators, visit);
        }
        Expr::GeneratorExp(node) => {
            walk_expr(&node.elt, visit);
            walk_comprehensions(&node.generators, visit);
        }
        Expr::Await(node) => walk_expr(&node.value, visit),
        Expr::Yield(node) => walk_opt_expr(&node.value, visit),
        Expr::YieldFrom(node) => walk_expr(&node.value, visit),
        Expr::Compare(node) => {
            walk_expr(&node.left, visit);
            for comparator in &node.comparators {
                walk_expr(comparator, visit);
            }
        }
        Expr::Call(node) => {
            walk_expr(&node.func, visit);
            for arg in &node.args {
                walk_expr(arg, visit);
            }
            for keyword in &node.keywords {
                walk_expr(&keyword.value, visit);
            }
        }
        Expr::FormattedValue(node) => {
            walk_expr(&node.value, visit);
            walk_opt_expr(&node.format_spec, visit);
        }
        Expr::JoinedStr(node) => {
            for value in &node.values {
                walk_expr(value, visit);
            }
        }
        Expr::Attribute(node) => walk_expr(&node.value, visit),
        Expr::Subscript(node) => {
            walk_expr(&node.value, visit);
            walk_expr(&node.slice, visit);
        }
        Expr::Starred(node) => walk_expr(&node.value, visit),
        Expr::List(node) => {
            for elt in &node.elts {
                walk_expr(elt, visit);
            }
        }
        Expr::Tuple(node) => {
            for elt in &node.elts {
                walk_expr(elt, visit);
            }
        }
        Expr::Slice(node) => {
            walk_opt_expr(&node.lower, visit);
            walk_opt_expr(&node.upper, visit);
            walk_opt_expr(&node.step, visit);
        }
        Expr::Constant(_) | Expr::Name(_) => {}
    }
}
