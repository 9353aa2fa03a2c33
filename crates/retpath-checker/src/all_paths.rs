//! Exhaustiveness traversal: do all completing paths return a value or throw.
//!
//! AND-combines across alternatives where the existence traversal ORs them,
//! with per-kind completion rules that are deliberately heuristic rather than
//! a full reachability analysis:
//! - a block is judged by its last statement only;
//! - `while (true)` / `do ... while (true)` are assumed to exit solely via an
//!   internal return or throw, so they reduce to existence of the body;
//! - a switch is trusted to fall through, so any clause containing a `break`
//!   or a bare `return;` disqualifies it;
//! - an exhaustive finalizer dominates the whole try construct.

use crate::no_value::signature_declares_value;
use crate::promise::{self, PromiseFilter};
use crate::return_scan::{ReturnScan, exists_return_value, scan_return_value};
use retpath_ast::node::{FunctionBody, FunctionData, Node};

/// Check whether every completing path through `node` returns a value or
/// terminates via throw.
pub fn all_paths_return_value(node: Option<&Node>, filter: Option<PromiseFilter>) -> bool {
    let Some(node) = node else {
        return false;
    };

    match node {
        Node::DeclareFunction(sig) | Node::FunctionType(sig) | Node::MethodSignature(sig) => {
            signature_declares_value(sig.return_type.as_ref())
        }

        Node::MethodDefinition(method) => all_paths_return_value(Some(&method.value), filter),

        Node::FunctionDeclaration(func)
        | Node::FunctionExpression(func)
        | Node::ArrowFunction(func) => function_body_exhaustive(func, filter),

        // Code after an exhaustively-returning statement is assumed
        // unreachable; only the last statement is consulted.
        Node::Block(block) => all_paths_return_value(block.statements.last(), filter),

        Node::WhileStatement(loop_data) => {
            if is_true_condition(&loop_data.expression) {
                exists_return_value(Some(&loop_data.statement), filter)
            } else {
                all_paths_return_value(Some(&loop_data.statement), filter)
            }
        }
        Node::DoStatement(loop_data) => {
            if is_true_condition(&loop_data.expression) {
                exists_return_value(Some(&loop_data.statement), filter)
            } else {
                all_paths_return_value(Some(&loop_data.statement), filter)
            }
        }
        Node::ForStatement(loop_data) => {
            all_paths_return_value(Some(&loop_data.statement), filter)
        }
        Node::ForInStatement(loop_data) | Node::ForOfStatement(loop_data) => {
            all_paths_return_value(Some(&loop_data.statement), filter)
        }
        Node::LabeledStatement(labeled) => {
            all_paths_return_value(Some(&labeled.statement), filter)
        }
        Node::WithStatement(with) => all_paths_return_value(Some(&with.statement), filter),

        // A conditional with no alternate is never exhaustive.
        Node::IfStatement(if_stmt) => {
            all_paths_return_value(Some(&if_stmt.then_statement), filter)
                && if_stmt
                    .else_statement
                    .as_deref()
                    .is_some_and(|alternate| all_paths_return_value(Some(alternate), filter))
        }

        Node::TryStatement(try_stmt) => {
            // An exhaustive finalizer dominates whatever the protected block
            // and handler do.
            if try_stmt
                .finally_block
                .as_deref()
                .is_some_and(|finalizer| all_paths_return_value(Some(finalizer), filter))
            {
                return true;
            }
            all_paths_return_value(Some(&try_stmt.try_block), filter)
                && try_stmt
                    .catch_clause
                    .as_ref()
                    .is_none_or(|clause| all_paths_return_value(Some(&clause.block), filter))
                && try_stmt.finally_block.as_deref().is_none_or(|finalizer| {
                    // A reachable bare return inside the finalizer overwrites
                    // the completion value of the whole construct.
                    scan_return_value(Some(finalizer), true, filter) != ReturnScan::BareReturn
                })
        }

        Node::SwitchStatement(switch) => switch.clauses.iter().all(|clause| {
            !clause.statements.iter().any(|statement| match statement {
                Node::BreakStatement(_) => true,
                Node::ReturnStatement(ret) => ret.expression.is_none(),
                _ => false,
            })
        }),

        // Path-terminating; satisfies the contract like a valued return.
        Node::ThrowStatement(_) => true,

        Node::ReturnStatement(ret) => match ret.expression.as_deref() {
            None => false,
            Some(argument) => promise::returned_value_counts(argument, filter),
        },

        _ => false,
    }
}

fn function_body_exhaustive(func: &FunctionData, filter: Option<PromiseFilter>) -> bool {
    match func.body.as_ref() {
        Some(FunctionBody::Expression(expression)) => {
            promise::concise_body_counts(expression)
                || all_paths_return_value(Some(expression), filter)
        }
        Some(FunctionBody::Block(block)) => all_paths_return_value(Some(block), filter),
        None => false,
    }
}

fn is_true_condition(node: &Node) -> bool {
    matches!(node, Node::TrueKeyword)
}
