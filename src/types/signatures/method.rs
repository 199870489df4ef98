//! Generic method signatures.

use std::{fmt::Display, str::FromStr};

use crate::macros::see_jvm_spec;

use super::{GenericType, InvalidSignature, TypeCategory, tokenizer::SignatureReader};

/// A formal type parameter of a generic method, e.g., `T extends Comparable<T>`.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct TypeParameter {
    /// The name of the type parameter.
    pub name: String,
    /// The class bound, if any.
    pub class_bound: Option<GenericType>,
    /// The interface bounds.
    pub interface_bounds: Vec<GenericType>,
}

/// Denotes the return type of a generic method.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum GenericReturnType {
    /// The method returns a specific type.
    Some(GenericType),
    /// The return type of the method is `void`.
    Void,
}

impl Display for GenericReturnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericReturnType::Some(t) => t.fmt(f),
            GenericReturnType::Void => write!(f, "void"),
        }
    }
}

/// The generic signature of a method.
/// Consists of the type parameters, the parameter types, the return type and the thrown types.
#[doc = see_jvm_spec!(4, 7, 9, 1)]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct MethodSignature {
    /// The formal type parameters of the method.
    pub type_parameters: Vec<TypeParameter>,
    /// The types of the parameters.
    pub parameters: Vec<GenericType>,
    /// The return type.
    pub return_type: GenericReturnType,
    /// The types listed in the `throws` clause.
    pub exceptions: Vec<GenericType>,
}

impl MethodSignature {
    /// Returns the number of parameters.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}

impl FromStr for MethodSignature {
    type Err = InvalidSignature;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        let mut reader = SignatureReader::new(signature);
        let type_parameters = if reader.consume('<') {
            read_type_parameters(&mut reader)?
        } else {
            Vec::new()
        };
        let parameters = reader
            .parameters()?
            .into_iter()
            .map(|it| value_type(it, &reader))
            .collect::<Result<Vec<_>, _>>()?;
        let return_type = if reader.consume('V') {
            GenericReturnType::Void
        } else {
            let return_type = reader.next_type()?;
            GenericReturnType::Some(value_type(return_type, &reader)?)
        };
        let mut exceptions = Vec::new();
        while reader.consume('^') {
            let exception = reader.next_type()?;
            exceptions.push(reference_type(exception, &reader)?);
        }
        if !reader.is_empty() {
            return Err(reader.malformed());
        }
        Ok(Self {
            type_parameters,
            parameters,
            return_type,
            exceptions,
        })
    }
}

/// Reads type parameters up to and including the closing `>`.
fn read_type_parameters(
    reader: &mut SignatureReader<'_>,
) -> Result<Vec<TypeParameter>, InvalidSignature> {
    let mut type_parameters = Vec::new();
    loop {
        let name = reader.identifier_until(':')?.to_owned();
        let class_bound = match reader.peek() {
            Some(':' | '>') => None,
            _ => {
                let bound = reader.next_type()?;
                Some(reference_type(bound, reader)?)
            }
        };
        let mut interface_bounds = Vec::new();
        while reader.consume(':') {
            let bound = reader.next_type()?;
            interface_bounds.push(reference_type(bound, reader)?);
        }
        type_parameters.push(TypeParameter {
            name,
            class_bound,
            interface_bounds,
        });
        if reader.consume('>') {
            break Ok(type_parameters);
        }
    }
}

/// Parses a type that can be the type of a value, i.e., anything but a wildcard.
/// Wildcards nested inside the type must be type arguments with reference bounds.
fn value_type(token: &str, reader: &SignatureReader<'_>) -> Result<GenericType, InvalidSignature> {
    let parsed = GenericType::parse(token)?;
    if is_value_type(&parsed) {
        Ok(parsed)
    } else {
        Err(reader.malformed())
    }
}

fn is_value_type(generic_type: &GenericType) -> bool {
    match generic_type {
        GenericType::NonGeneric(_) | GenericType::TypeVariable(_) => true,
        GenericType::Parameterized(it) => it.arguments().iter().all(is_type_argument),
        GenericType::ArrayOf(it) => is_value_type(it.element()),
        GenericType::Wildcard | GenericType::WildcardExtends(_) | GenericType::WildcardSuper(_) => {
            false
        }
    }
}

fn is_type_argument(argument: &GenericType) -> bool {
    match argument {
        GenericType::Wildcard => true,
        GenericType::WildcardExtends(bound) | GenericType::WildcardSuper(bound) => {
            is_reference_type(bound)
        }
        other => is_reference_type(other),
    }
}

fn is_reference_type(generic_type: &GenericType) -> bool {
    generic_type.category() != TypeCategory::NonReference && is_value_type(generic_type)
}

/// Parses a type that is a reference type, i.e., neither a primitive type nor a wildcard.
fn reference_type(
    token: &str,
    reader: &SignatureReader<'_>,
) -> Result<GenericType, InvalidSignature> {
    let parsed = value_type(token, reader)?;
    if parsed.category() == TypeCategory::NonReference {
        Err(reader.malformed())
    } else {
        Ok(parsed)
    }
}
