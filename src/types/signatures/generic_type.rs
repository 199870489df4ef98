use std::fmt::Display;

use itertools::Itertools;

use crate::types::{Descriptor, field_type::FieldType};

use super::InvalidSignature;

/// A type that may carry generic information.
///
/// Values are validated on construction and never change afterwards, so they can be shared
/// freely. The [`Display`] implementation renders the type in Java source form, e.g.
/// `java.util.Map<K,? extends java.lang.Number>`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum GenericType {
    /// A type without generic information.
    NonGeneric(FieldType),
    /// A generic class applied to type arguments, e.g., `List<String>`.
    Parameterized(ParameterizedType),
    /// A reference to a type parameter, e.g., `E`.
    TypeVariable(TypeVariable),
    /// The unbounded wildcard `?`.
    Wildcard,
    /// A wildcard with an upper bound, e.g., `? extends Number`.
    WildcardExtends(Box<GenericType>),
    /// A wildcard with a lower bound, e.g., `? super Integer`.
    WildcardSuper(Box<GenericType>),
    /// An array whose element type may be generic, e.g., `List<T>[]`.
    ArrayOf(GenericArrayType),
}

/// A generic class or interface applied to type arguments.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct ParameterizedType {
    name: String,
    arguments: Vec<GenericType>,
}

impl ParameterizedType {
    /// The binary name of the generic class (e.g., `java/util/List`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type arguments, in declaration order. Never empty.
    #[must_use]
    pub fn arguments(&self) -> &[GenericType] {
        &self.arguments
    }
}

impl Display for ParameterizedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}<{}>",
            self.name.replace('/', "."),
            self.arguments.iter().join(",")
        )
    }
}

/// A reference to a type parameter of a class or a method.
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[display("{name}")]
pub struct TypeVariable {
    name: String,
}

impl TypeVariable {
    /// The declared name of the type parameter.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An array type whose element type may be generic.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GenericArrayType {
    element: Box<GenericType>,
    dimensions: u8,
}

impl GenericArrayType {
    /// The element type. It is never an [`GenericType::ArrayOf`].
    #[must_use]
    pub fn element(&self) -> &GenericType {
        &self.element
    }

    /// The number of dimensions. Always at least `1`.
    #[must_use]
    pub fn dimensions(&self) -> u8 {
        self.dimensions
    }
}

impl Display for GenericArrayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            self.element,
            "[]".repeat(usize::from(self.dimensions))
        )
    }
}

const NAME_DELIMITERS: [char; 3] = ['<', '>', ';'];

fn checked_name(name: String) -> Result<String, InvalidSignature> {
    if name.is_empty() || name.contains(NAME_DELIMITERS) {
        Err(InvalidSignature::InvalidName(name))
    } else {
        Ok(name)
    }
}

impl GenericType {
    /// Creates a parameterized type.
    /// # Errors
    /// - [`InvalidSignature::InvalidName`] if `name` is empty or contains `<`, `>` or `;`.
    /// - [`InvalidSignature::EmptyTypeArguments`] if `arguments` is empty.
    pub fn parameterized<S, A>(name: S, arguments: A) -> Result<Self, InvalidSignature>
    where
        S: Into<String>,
        A: IntoIterator<Item = GenericType>,
    {
        let name = checked_name(name.into())?;
        let arguments: Vec<_> = arguments.into_iter().collect();
        if arguments.is_empty() {
            return Err(InvalidSignature::EmptyTypeArguments);
        }
        Ok(Self::Parameterized(ParameterizedType { name, arguments }))
    }

    /// Creates a reference to the type parameter `name`.
    /// # Errors
    /// - [`InvalidSignature::InvalidName`] if `name` is empty or contains `<`, `>` or `;`.
    pub fn type_variable<S: Into<String>>(name: S) -> Result<Self, InvalidSignature> {
        let name = checked_name(name.into())?;
        Ok(Self::TypeVariable(TypeVariable { name }))
    }

    /// Creates the unbounded wildcard.
    #[must_use]
    pub const fn wildcard() -> Self {
        Self::Wildcard
    }

    /// Creates a wildcard with the upper bound `bound`.
    #[must_use]
    pub fn wildcard_extends(bound: GenericType) -> Self {
        Self::WildcardExtends(Box::new(bound))
    }

    /// Creates a wildcard with the lower bound `bound`.
    #[must_use]
    pub fn wildcard_super(bound: GenericType) -> Self {
        Self::WildcardSuper(Box::new(bound))
    }

    /// Creates an array of `element` with the given number of dimensions.
    /// If `element` is itself an [`GenericType::ArrayOf`], the dimensions are added up.
    /// # Errors
    /// - [`InvalidSignature::ZeroDimensions`] if `dimensions` is `0`.
    /// - [`InvalidSignature::TooManyDimensions`] if the resulting array has more than 255 dimensions.
    pub fn array_of(element: GenericType, dimensions: u8) -> Result<Self, InvalidSignature> {
        if dimensions == 0 {
            return Err(InvalidSignature::ZeroDimensions);
        }
        let (element, dimensions) = match element {
            Self::ArrayOf(GenericArrayType {
                element,
                dimensions: inner,
            }) => (
                element,
                inner
                    .checked_add(dimensions)
                    .ok_or(InvalidSignature::TooManyDimensions)?,
            ),
            other => (Box::new(other), dimensions),
        };
        Ok(Self::ArrayOf(GenericArrayType {
            element,
            dimensions,
        }))
    }

    /// Encodes the type in the signature grammar.
    /// Parsing the result yields a value equal to `self` unless `self` wraps a non-generic array,
    /// which is read back as an [`GenericType::ArrayOf`].
    #[must_use]
    pub fn signature(&self) -> String {
        match self {
            Self::NonGeneric(it) => it.descriptor(),
            Self::Parameterized(ParameterizedType { name, arguments }) => format!(
                "L{name}<{}>;",
                arguments.iter().map(Self::signature).join("")
            ),
            Self::TypeVariable(TypeVariable { name }) => format!("T{name};"),
            Self::Wildcard => "*".to_owned(),
            Self::WildcardExtends(bound) => format!("+{}", bound.signature()),
            Self::WildcardSuper(bound) => format!("-{}", bound.signature()),
            Self::ArrayOf(GenericArrayType {
                element,
                dimensions,
            }) => format!(
                "{}{}",
                "[".repeat(usize::from(*dimensions)),
                element.signature()
            ),
        }
    }
}

impl From<FieldType> for GenericType {
    fn from(value: FieldType) -> Self {
        Self::NonGeneric(value)
    }
}

impl Display for GenericType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonGeneric(it) => it.fmt(f),
            Self::Parameterized(it) => it.fmt(f),
            Self::TypeVariable(it) => it.fmt(f),
            Self::Wildcard => write!(f, "?"),
            Self::WildcardExtends(bound) => write!(f, "? extends {bound}"),
            Self::WildcardSuper(bound) => write!(f, "? super {bound}"),
            Self::ArrayOf(it) => it.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{field_type::PrimitiveType, references::ClassRef};

    fn object(name: &str) -> GenericType {
        FieldType::Object(ClassRef::new(name)).into()
    }

    #[test]
    fn parameterized_requires_arguments() {
        assert_eq!(
            GenericType::parameterized("java/util/List", Vec::new()),
            Err(InvalidSignature::EmptyTypeArguments)
        );
    }

    #[test]
    fn names_reject_delimiters() {
        for name in ["", "List<", "E>", "T;"] {
            assert_eq!(
                GenericType::type_variable(name),
                Err(InvalidSignature::InvalidName(name.to_owned()))
            );
            assert!(GenericType::parameterized(name, [GenericType::wildcard()]).is_err());
        }
    }

    #[test]
    fn array_requires_dimensions() {
        assert_eq!(
            GenericType::array_of(GenericType::wildcard(), 0),
            Err(InvalidSignature::ZeroDimensions)
        );
    }

    #[test]
    fn nested_arrays_are_flattened() {
        let element = GenericType::type_variable("T").unwrap();
        let inner = GenericType::array_of(element.clone(), 2).unwrap();
        let GenericType::ArrayOf(array) = GenericType::array_of(inner, 3).unwrap() else {
            panic!("Expected an array type");
        };
        assert_eq!(array.element(), &element);
        assert_eq!(array.dimensions(), 5);
    }

    #[test]
    fn nested_arrays_overflow() {
        let inner = GenericType::array_of(GenericType::wildcard(), u8::MAX).unwrap();
        assert_eq!(
            GenericType::array_of(inner, 1),
            Err(InvalidSignature::TooManyDimensions)
        );
    }

    #[test]
    fn display_parameterized() {
        let map = GenericType::parameterized(
            "java/util/Map",
            [
                GenericType::type_variable("K").unwrap(),
                GenericType::wildcard_extends(object("java/lang/Number")),
            ],
        )
        .unwrap();
        assert_eq!(
            map.to_string(),
            "java.util.Map<K,? extends java.lang.Number>"
        );
    }

    #[test]
    fn display_wildcards() {
        assert_eq!(GenericType::wildcard().to_string(), "?");
        let lower = GenericType::wildcard_super(object("java/lang/Integer"));
        assert_eq!(lower.to_string(), "? super java.lang.Integer");
        let nested = GenericType::wildcard_extends(GenericType::wildcard_super(object("X")));
        assert_eq!(nested.to_string(), "? extends ? super X");
    }

    #[test]
    fn display_arrays() {
        let list = GenericType::parameterized("java/util/List", [object("java/lang/String")]);
        let array = GenericType::array_of(list.unwrap(), 2).unwrap();
        assert_eq!(array.to_string(), "java.util.List<java.lang.String>[][]");
        let ints = GenericType::array_of(FieldType::Base(PrimitiveType::Int).into(), 1).unwrap();
        assert_eq!(ints.to_string(), "int[]");
    }

    #[test]
    fn signature_encoding() {
        let element = GenericType::parameterized(
            "java/util/List",
            [
                GenericType::type_variable("T").unwrap(),
                GenericType::wildcard_super(FieldType::Base(PrimitiveType::Int).into()),
                GenericType::wildcard(),
            ],
        )
        .unwrap();
        let array = GenericType::array_of(element, 2).unwrap();
        assert_eq!(array.signature(), "[[Ljava/util/List<TT;-I*>;");
    }
}
