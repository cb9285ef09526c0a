//! Type normalization: reduce a type expression to the single crate-local
//! item it is about.

use super::rustdoc_model::{Id, Type};

/// Identifier of the one local named type `ty` ultimately refers to.
///
/// References, arrays and raw pointers are transparent (`&T`, `[T; N]` and
/// `*const T` are all about `T`), and a qualified path reduces to its self
/// type. Primitives, generics, externally defined types and any construct
/// without a crate-local identity yield `None`; so does an unrecognized
/// type kind, which is the expected absent case rather than an error.
pub fn type_identity(ty: &Type) -> Option<&Id> {
    match ty {
        Type::ResolvedPath { id, .. } => id.as_ref().filter(|id| id.is_local()),
        Type::BorrowedRef { type_, .. }
        | Type::Array { type_, .. }
        | Type::RawPointer { type_, .. } => type_identity(type_),
        Type::QualifiedPath { self_type, .. } => type_identity(self_type),
        _ => None,
    }
}
