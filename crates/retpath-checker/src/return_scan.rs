//! Existence traversal: does some reachable path return a value.
//!
//! OR-combines across alternatives: a conditional contributes either branch,
//! an exception construct contributes any of its three blocks, a multi-way
//! branch contributes any clause statement. Kinds with no rule fall open to
//! "no value" without recursing.
//!
//! The scan is three-valued. `BareReturn` is the internal escalation tag for
//! an argument-less `return;`: when escalation is requested, the first bare
//! return reached in traversal order aborts the whole scan with that tag.
//! Only the exhaustiveness finalizer rule and the composite decision consume
//! it; the public wrapper maps the scan down to a bool.

use crate::no_value::signature_declares_value;
use crate::promise::{self, PromiseFilter};
use retpath_ast::node::{FunctionBody, FunctionData, Node};

// =============================================================================
// Scan result
// =============================================================================

/// Outcome of one existence scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReturnScan {
    HasValue,
    NoValue,
    BareReturn,
}

impl ReturnScan {
    pub(crate) fn has_value(self) -> bool {
        matches!(self, ReturnScan::HasValue)
    }

    /// OR-combine two alternatives. `HasValue` and `BareReturn` both
    /// short-circuit; only `NoValue` moves on to the next alternative.
    fn or_else(self, alternative: impl FnOnce() -> ReturnScan) -> ReturnScan {
        match self {
            ReturnScan::NoValue => alternative(),
            decided => decided,
        }
    }

    fn from_bool(found: bool) -> ReturnScan {
        if found {
            ReturnScan::HasValue
        } else {
            ReturnScan::NoValue
        }
    }
}

// =============================================================================
// Existence traversal
// =============================================================================

/// Check whether at least one reachable path through `node` returns a value.
///
/// `filter` is consulted when a return's argument is a Promise construction;
/// absent a filter, any returned expression counts.
pub fn exists_return_value(node: Option<&Node>, filter: Option<PromiseFilter>) -> bool {
    scan_return_value(node, false, filter).has_value()
}

pub(crate) fn scan_return_value(
    node: Option<&Node>,
    escalate_bare_return: bool,
    filter: Option<PromiseFilter>,
) -> ReturnScan {
    let Some(node) = node else {
        return ReturnScan::NoValue;
    };

    match node {
        // Declared-but-not-defined forms carry their answer in the signature.
        Node::DeclareFunction(sig) | Node::FunctionType(sig) | Node::MethodSignature(sig) => {
            ReturnScan::from_bool(signature_declares_value(sig.return_type.as_ref()))
        }

        Node::MethodDefinition(method) => {
            scan_return_value(Some(&method.value), escalate_bare_return, filter)
        }

        Node::FunctionDeclaration(func)
        | Node::FunctionExpression(func)
        | Node::ArrowFunction(func) => scan_function_body(func, escalate_bare_return, filter),

        Node::Block(block) => {
            let mut result = ReturnScan::NoValue;
            for statement in &block.statements {
                // Function declarations do not execute merely by being
                // declared.
                if matches!(statement, Node::FunctionDeclaration(_)) {
                    continue;
                }
                result = result
                    .or_else(|| scan_return_value(Some(statement), escalate_bare_return, filter));
                if result != ReturnScan::NoValue {
                    break;
                }
            }
            result
        }

        Node::LabeledStatement(labeled) => {
            scan_return_value(Some(&labeled.statement), escalate_bare_return, filter)
        }
        Node::WhileStatement(loop_data) => {
            scan_return_value(Some(&loop_data.statement), escalate_bare_return, filter)
        }
        Node::DoStatement(loop_data) => {
            scan_return_value(Some(&loop_data.statement), escalate_bare_return, filter)
        }
        Node::ForStatement(loop_data) => {
            scan_return_value(Some(&loop_data.statement), escalate_bare_return, filter)
        }
        Node::ForInStatement(loop_data) | Node::ForOfStatement(loop_data) => {
            scan_return_value(Some(&loop_data.statement), escalate_bare_return, filter)
        }
        Node::WithStatement(with) => {
            scan_return_value(Some(&with.statement), escalate_bare_return, filter)
        }

        Node::IfStatement(if_stmt) => {
            scan_return_value(Some(&if_stmt.then_statement), escalate_bare_return, filter)
                .or_else(|| {
                    scan_return_value(
                        if_stmt.else_statement.as_deref(),
                        escalate_bare_return,
                        filter,
                    )
                })
        }

        Node::TryStatement(try_stmt) => {
            scan_return_value(Some(&try_stmt.try_block), escalate_bare_return, filter)
                .or_else(|| {
                    scan_return_value(
                        try_stmt.catch_clause.as_ref().map(|clause| clause.block.as_ref()),
                        escalate_bare_return,
                        filter,
                    )
                })
                .or_else(|| {
                    scan_return_value(
                        try_stmt.finally_block.as_deref(),
                        escalate_bare_return,
                        filter,
                    )
                })
        }

        Node::SwitchStatement(switch) => {
            let mut result = ReturnScan::NoValue;
            'clauses: for clause in &switch.clauses {
                for statement in &clause.statements {
                    result = result.or_else(|| {
                        scan_return_value(Some(statement), escalate_bare_return, filter)
                    });
                    if result != ReturnScan::NoValue {
                        break 'clauses;
                    }
                }
            }
            result
        }

        Node::ReturnStatement(ret) => match ret.expression.as_deref() {
            None if escalate_bare_return => ReturnScan::BareReturn,
            None => ReturnScan::NoValue,
            Some(argument) => {
                ReturnScan::from_bool(promise::returned_value_counts(argument, filter))
            }
        },

        _ => ReturnScan::NoValue,
    }
}

fn scan_function_body(
    func: &FunctionData,
    escalate_bare_return: bool,
    filter: Option<PromiseFilter>,
) -> ReturnScan {
    match func.body.as_ref() {
        Some(FunctionBody::Expression(expression)) => {
            if promise::concise_body_counts(expression) {
                ReturnScan::HasValue
            } else {
                scan_return_value(Some(expression), escalate_bare_return, filter)
            }
        }
        Some(FunctionBody::Block(block)) => {
            scan_return_value(Some(block), escalate_bare_return, filter)
        }
        None => ReturnScan::NoValue,
    }
}
