//! Promise construction classification.
//!
//! Two shallow predicates, no traversal: recognize `new Promise(...)` and
//! recognize an explicit no-value type argument on one. The return traversals
//! consult these through the filter leaf rule at return statements.

use crate::no_value::NO_VALUE_TYPE_KINDS;
use retpath_ast::node::{NewExprData, Node};

/// Name of the deferred-value constructor this analysis recognizes.
pub const PROMISE_TYPE_NAME: &str = "Promise";

/// Filter consulted when a return's argument is a Promise construction.
pub type PromiseFilter<'a> = &'a dyn Fn(&NewExprData) -> bool;

/// Classify `node` as a `new Promise(...)` construction.
pub fn as_promise_construction(node: &Node) -> Option<&NewExprData> {
    match node {
        Node::NewExpression(construction)
            if construction.expression.as_identifier_text() == Some(PROMISE_TYPE_NAME) =>
        {
            Some(construction)
        }
        _ => None,
    }
}

pub fn is_promise_construction(node: &Node) -> bool {
    as_promise_construction(node).is_some()
}

/// True when the construction carries an explicit no-value type argument,
/// as in `new Promise<void>(...)`.
pub fn is_void_promise(construction: &NewExprData) -> bool {
    construction
        .type_arguments
        .first()
        .is_some_and(|annotation| NO_VALUE_TYPE_KINDS.contains(&annotation.kind()))
}

/// Leaf rule shared by both return traversals: a returned expression counts
/// as a value unless it is a Promise construction the caller's filter
/// rejects.
pub(crate) fn returned_value_counts(argument: &Node, filter: Option<PromiseFilter>) -> bool {
    match (filter, as_promise_construction(argument)) {
        (Some(filter), Some(construction)) => filter(construction),
        _ => true,
    }
}

/// Concise-body rule shared by both return traversals: an arrow body that is
/// a bare expression counts as a valued return unless the expression is a
/// no-value-typed Promise construction.
pub(crate) fn concise_body_counts(expression: &Node) -> bool {
    !as_promise_construction(expression).is_some_and(is_void_promise)
}
