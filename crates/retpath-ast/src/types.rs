//! Type annotation nodes.
//!
//! Only the shapes the analyzer inspects are modeled: keyword types, and type
//! references with type arguments (enough to represent `Promise<void>` on a
//! construction expression). Everything else a parser may produce can be
//! represented as a [`TypeAnnotation::TypeReference`].

use serde::Serialize;

/// A type annotation on a function-like node, a parameter, or a `new`
/// expression's type argument list.
#[derive(Clone, Debug, Serialize)]
pub enum TypeAnnotation {
    AnyKeyword,
    UnknownKeyword,
    VoidKeyword,
    UndefinedKeyword,
    NeverKeyword,
    BooleanKeyword,
    NumberKeyword,
    StringKeyword,
    TypeReference(TypeReferenceData),
}

#[derive(Clone, Debug, Serialize)]
pub struct TypeReferenceData {
    pub type_name: String,
    pub type_arguments: Vec<TypeAnnotation>,
}

/// Flat annotation kind, hashable so kind sets can be built over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    Any,
    Unknown,
    Void,
    Undefined,
    Never,
    Boolean,
    Number,
    String,
    Reference,
}

impl TypeAnnotation {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeAnnotation::AnyKeyword => TypeKind::Any,
            TypeAnnotation::UnknownKeyword => TypeKind::Unknown,
            TypeAnnotation::VoidKeyword => TypeKind::Void,
            TypeAnnotation::UndefinedKeyword => TypeKind::Undefined,
            TypeAnnotation::NeverKeyword => TypeKind::Never,
            TypeAnnotation::BooleanKeyword => TypeKind::Boolean,
            TypeAnnotation::NumberKeyword => TypeKind::Number,
            TypeAnnotation::StringKeyword => TypeKind::String,
            TypeAnnotation::TypeReference(_) => TypeKind::Reference,
        }
    }
}
