//! Non-generic JVM field types.
use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::macros::see_jvm_spec;

use super::{Descriptor, references::ClassRef};

/// A primitive type in Java.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PrimitiveType {
    /// The `boolean` type.
    #[display("boolean")]
    Boolean,
    /// The `char` type.
    #[display("char")]
    Char,
    /// The `float` type.
    #[display("float")]
    Float,
    /// The `double` type.
    #[display("double")]
    Double,
    /// The `byte` type.
    #[display("byte")]
    Byte,
    /// The `short` type.
    #[display("short")]
    Short,
    /// The `int` type.
    #[display("int")]
    Int,
    /// The `long` type.
    #[display("long")]
    Long,
}

impl PrimitiveType {
    /// Returns the character denoting the primitive type in a descriptor.
    #[must_use]
    pub const fn descriptor_char(self) -> char {
        match self {
            Self::Boolean => 'Z',
            Self::Char => 'C',
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Byte => 'B',
            Self::Short => 'S',
            Self::Int => 'I',
            Self::Long => 'J',
        }
    }
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            _ => Err(InvalidDescriptor(descriptor.to_string())),
        }
    }
}

/// A type without generic information, as it appears in field and method descriptors.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum FieldType {
    /// A primitive type.
    Base(PrimitiveType),
    /// A class or interface type.
    Object(ClassRef),
    /// An array type.
    Array(Box<FieldType>),
}

impl FieldType {
    /// Creates an array type with `self` as the element type.
    #[must_use]
    pub fn into_array_type(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Creates an array type of `element` with the given number of dimensions.
    /// A dimension of `0` yields `element` itself.
    #[must_use]
    pub fn array_of(element: Self, dimensions: u8) -> Self {
        (0..dimensions).fold(element, |it, _| it.into_array_type())
    }

    /// Returns the innermost element type and the number of dimensions if `self` is an array.
    #[must_use]
    pub fn array_element_and_dimensions(&self) -> Option<(&FieldType, usize)> {
        let mut element = self;
        let mut dimensions = 0;
        while let Self::Array(inner) = element {
            element = inner.as_ref();
            dimensions += 1;
        }
        (dimensions > 0).then_some((element, dimensions))
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(it) => it.fmt(f),
            Self::Object(class) => write!(f, "{}", class.java_name()),
            Self::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}

impl Descriptor for FieldType {
    fn descriptor(&self) -> String {
        match self {
            Self::Base(it) => it.descriptor_char().to_string(),
            Self::Object(ClassRef { binary_name }) => format!("L{binary_name};"),
            Self::Array(inner) => format!("[{}", inner.descriptor()),
        }
    }
}

impl FromStr for FieldType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDescriptor(descriptor.to_owned());
        let element_descriptor = descriptor.trim_start_matches('[');
        let dimensions =
            u8::try_from(descriptor.len() - element_descriptor.len()).map_err(|_| invalid())?;
        let mut chars = element_descriptor.chars();
        let element = match chars.next() {
            Some('L') => {
                let binary_name: String = chars.take_while_ref(|c| *c != ';').collect();
                match chars.next() {
                    Some(';') if !binary_name.is_empty() => Self::Object(ClassRef::new(binary_name)),
                    _ => return Err(invalid()),
                }
            }
            Some(c) => PrimitiveType::try_from(c)
                .map(Self::Base)
                .map_err(|_| invalid())?,
            None => return Err(invalid()),
        };
        match chars.next() {
            None => Ok(Self::array_of(element, dimensions)),
            Some(_) => Err(invalid()),
        }
    }
}

/// An error indicating that a descriptor string is invalid.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("Invalid descriptor: {0}")]
pub struct InvalidDescriptor(pub String);
