//! Data type nodes.

use serde::Serialize;

/// The holeyc data types, including the pointer variants of the three
/// value types. `void` is only legal as a function return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Type {
    Int,
    IntPtr,
    Char,
    CharPtr,
    Bool,
    BoolPtr,
    Void,
}

impl Type {
    /// Whether this is a pointer (reference) type.
    pub fn is_reference(&self) -> bool {
        matches!(self, Type::IntPtr | Type::CharPtr | Type::BoolPtr)
    }
}
