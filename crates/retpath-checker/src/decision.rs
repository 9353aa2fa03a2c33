//! Composite decision entry point.
//!
//! Wires the traversals together: existence or exhaustiveness per the
//! caller's mode, with a Promise filter that decides whether a returned
//! `new Promise(...)` counts as a valued return by inspecting its executor.

use crate::all_paths::all_paths_return_value;
use crate::promise::{self, PromiseFilter};
use crate::resolver::resolver_invoked_non_empty;
use crate::return_scan::{ReturnScan, exists_return_value, scan_return_value};
use retpath_ast::node::{NewExprData, Node};
use tracing::trace;

/// Decide whether `node` returns a usable value.
///
/// With `all_branches`, every completing path must return a value or throw
/// and no reachable bare `return;` may exist; otherwise one valued path
/// suffices. A returned Promise construction counts when
/// `any_promise_as_return` is set, never when it is no-value-typed, and
/// otherwise only when its executor possibly invokes its resolver with an
/// argument.
pub fn returns_or_resolves_value(
    node: Option<&Node>,
    any_promise_as_return: bool,
    all_branches: bool,
) -> bool {
    trace!(
        kind = node.map_or("<none>", Node::kind_name),
        any_promise_as_return,
        all_branches,
        "return-value decision"
    );

    let promise_counts = move |construction: &NewExprData| -> bool {
        if any_promise_as_return {
            return true;
        }
        if promise::is_void_promise(construction) {
            return false;
        }
        executor_resolves_non_empty(construction)
    };
    let filter: PromiseFilter = &promise_counts;

    if all_branches {
        // The escalating scan rules out bodies with a reachable bare return,
        // and also bodies that only throw, which the exhaustiveness
        // traversal alone would accept.
        match scan_return_value(node, true, Some(filter)) {
            ReturnScan::HasValue => all_paths_return_value(node, Some(filter)),
            ReturnScan::NoValue | ReturnScan::BareReturn => false,
        }
    } else {
        exists_return_value(node, Some(filter))
    }
}

/// Inspect a Promise construction's executor: extract its first parameter as
/// the resolver name and look for a non-empty invocation in the body.
fn executor_resolves_non_empty(construction: &NewExprData) -> bool {
    let Some(executor) = construction.arguments.first() else {
        return false;
    };
    let (parameters, body) = match executor {
        Node::FunctionExpression(func) | Node::ArrowFunction(func) => {
            (&func.parameters, func.body.as_ref())
        }
        _ => return false,
    };
    let Some(resolver_name) = parameters
        .first()
        .and_then(|parameter| parameter.identifier_name())
    else {
        return false;
    };
    resolver_invoked_non_empty(body.map(|body| body.node()), resolver_name)
}
