//! Syntax tree node model for the retpath return-value analyzer.
//!
//! This crate owns the read-only tree the analyses in `retpath-checker`
//! traverse:
//! - [`node`] - the `Node` sum type and its payload structs
//! - [`types`] - type annotation nodes and the flat `TypeKind`
//! - [`factory`] - construction helpers standing in for the external parser

pub mod factory;
pub mod node;
pub mod types;

pub use node::{FunctionBody, Node};
pub use types::{TypeAnnotation, TypeKind};
