//! The no-value annotation set.
//!
//! Three annotation kinds mark a deliberate absence of a value: `void`,
//! `undefined`, and `never`. Membership in this set is the only question the
//! analyzer ever asks of a type annotation.

use once_cell::sync::Lazy;
use retpath_ast::types::{TypeAnnotation, TypeKind};
use rustc_hash::FxHashSet;

/// Annotation kinds denoting "this intentionally carries no value".
/// Process-wide and read-only after initialization.
pub static NO_VALUE_TYPE_KINDS: Lazy<FxHashSet<TypeKind>> = Lazy::new(|| {
    [TypeKind::Void, TypeKind::Undefined, TypeKind::Never]
        .into_iter()
        .collect()
});

/// Signature-only function forms declare a value exactly when they carry a
/// return annotation outside the no-value set.
pub(crate) fn signature_declares_value(return_type: Option<&TypeAnnotation>) -> bool {
    return_type.is_some_and(|annotation| !NO_VALUE_TYPE_KINDS.contains(&annotation.kind()))
}
