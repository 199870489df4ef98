//! Generic type signatures in the JVM.
//!
//! A signature extends a descriptor with type arguments (`Ljava/util/List<TE;>;`),
//! type variables (`TE;`) and wildcards (`*`, `+Ljava/lang/Number;`, `-TT;`).
//!
//! See the [JVM Specification §4.7.9.1](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-4.html#jvms-4.7.9.1) for more information.

use super::field_type::InvalidDescriptor;

mod category;
mod generic_type;
pub mod method;
mod parser;
pub mod tokenizer;

pub use category::TypeCategory;
pub use generic_type::{GenericArrayType, GenericType, ParameterizedType, TypeVariable};

/// An error indicating that a signature, or a component used to build a generic type, is invalid.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum InvalidSignature {
    /// The signature does not follow the signature grammar.
    #[error("Malformed signature: {0}")]
    Malformed(String),
    /// A single type was expected, but the signature contains none or several.
    #[error("The signature does not contain exactly one type: {0}")]
    NotSingleType(String),
    /// A parameterized type is built without type arguments.
    #[error("A parameterized type requires at least one type argument")]
    EmptyTypeArguments,
    /// An array type is built with no dimension.
    #[error("An array type requires at least one dimension")]
    ZeroDimensions,
    /// An array type has more dimensions than the JVM allows.
    #[error("An array type can have at most 255 dimensions")]
    TooManyDimensions,
    /// Types are nested more than 255 levels deep.
    #[error("The signature nests types more than 255 levels deep")]
    TooDeeplyNested,
    /// A class name or a type variable name is empty or contains a signature delimiter.
    #[error("Invalid name in signature: {0:?}")]
    InvalidName(String),
    /// A fragment without generic information is not a valid descriptor.
    #[error("Fail to parse descriptor: {0}")]
    InvalidDescriptor(#[from] InvalidDescriptor),
}
