//! Return-value analysis for a TypeScript-flavored syntax tree.
//!
//! Four operations over [`retpath_ast::Node`] trees, all pure functions of
//! `(node, flags)` and all fail-open (unknown kinds and absent nodes report
//! "no value" rather than erroring):
//!
//! - [`exists_return_value`] - does some reachable path return a value
//! - [`all_paths_return_value`] - does every completing path return a value
//!   or terminate via throw
//! - [`resolver_invoked_non_empty`] - is a named callback possibly invoked
//!   with an argument anywhere in a subtree
//! - [`returns_or_resolves_value`] - the composite: existence or
//!   exhaustiveness per the caller's mode, treating a returned
//!   `new Promise(executor)` as valued only when the executor actually
//!   resolves with a payload (or the caller opts out of the inspection)
//!
//! ```
//! use retpath_ast::factory;
//! use retpath_checker::exists_return_value;
//!
//! // { if (x) { return 1; } }
//! let body = factory::block(vec![factory::if_statement(
//!     factory::identifier("x"),
//!     factory::block(vec![factory::return_statement(Some(
//!         factory::numeric_literal("1"),
//!     ))]),
//!     None,
//! )]);
//! assert!(exists_return_value(Some(&body), None));
//! ```

pub mod all_paths;
pub mod decision;
pub mod no_value;
pub mod promise;
pub mod resolver;
pub mod return_scan;

pub use all_paths::all_paths_return_value;
pub use decision::returns_or_resolves_value;
pub use promise::{
    PROMISE_TYPE_NAME, PromiseFilter, as_promise_construction, is_promise_construction,
    is_void_promise,
};
pub use resolver::resolver_invoked_non_empty;
pub use return_scan::exists_return_value;
