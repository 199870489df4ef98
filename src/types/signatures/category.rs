use crate::types::field_type::FieldType;

use super::GenericType;

/// The structural category of a type.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, derive_more::Display)]
pub enum TypeCategory {
    /// A primitive type.
    #[display("non-reference type")]
    NonReference,
    /// A class or interface type without type arguments.
    #[display("plain object type")]
    PlainObject,
    /// An array type.
    #[display("array type")]
    Array,
    /// A generic class applied to type arguments, e.g., `List<String>`.
    #[display("parameterized type")]
    Parameterized,
    /// A type variable, e.g., `E`.
    #[display("type variable")]
    TypeVariable,
    /// The unbounded wildcard `?`.
    #[display("wildcard")]
    Wildcard,
    /// A wildcard with an upper bound, e.g., `? extends Comparable`.
    #[display("upper-bounded wildcard")]
    WildcardExtends,
    /// A wildcard with a lower bound, e.g., `? super Comparable`.
    #[display("lower-bounded wildcard")]
    WildcardSuper,
}

impl From<&FieldType> for TypeCategory {
    fn from(value: &FieldType) -> Self {
        match value {
            FieldType::Base(_) => Self::NonReference,
            FieldType::Object(_) => Self::PlainObject,
            FieldType::Array(_) => Self::Array,
        }
    }
}

impl GenericType {
    /// Returns the structural category of the type.
    #[must_use]
    pub fn category(&self) -> TypeCategory {
        match self {
            Self::NonGeneric(it) => it.into(),
            Self::Parameterized(_) => TypeCategory::Parameterized,
            Self::TypeVariable(_) => TypeCategory::TypeVariable,
            Self::Wildcard => TypeCategory::Wildcard,
            Self::WildcardExtends(_) => TypeCategory::WildcardExtends,
            Self::WildcardSuper(_) => TypeCategory::WildcardSuper,
            Self::ArrayOf(_) => TypeCategory::Array,
        }
    }

    /// Checks if the type is a class or interface type without generic information.
    #[must_use]
    pub fn is_plain_object(&self) -> bool {
        self.category() == TypeCategory::PlainObject
    }
}
