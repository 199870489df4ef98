use std::str::FromStr;

use crate::types::field_type::FieldType;

use super::{
    GenericType, InvalidSignature,
    tokenizer::{SignatureReader, parameter_count},
};

fn malformed(signature: &str) -> InvalidSignature {
    InvalidSignature::Malformed(signature.to_owned())
}

/// The deepest nesting of type arguments, wildcard bounds and array elements accepted by the parser.
pub(crate) const MAX_NESTING_DEPTH: usize = 255;

impl GenericType {
    /// Parses a signature that encodes exactly one type, e.g., `Ljava/util/List<TE;>;`.
    /// Fragments without generic information are parsed as [`FieldType`]s.
    /// # Errors
    /// - [`InvalidSignature::NotSingleType`] if the signature is empty or encodes several types.
    /// - [`InvalidSignature::InvalidDescriptor`] if a fragment without generic information is invalid.
    /// - [`InvalidSignature::TooDeeplyNested`] if types are nested more than 255 levels deep.
    /// - Other variants of [`InvalidSignature`] if the signature is malformed.
    pub fn parse(signature: &str) -> Result<Self, InvalidSignature> {
        Self::parse_nested(signature, 0)
    }

    /// Parses a signature that encodes zero or more consecutive types, e.g., `TK;Ljava/util/List<TV;>;I`.
    /// # Errors
    /// - [`InvalidSignature::Malformed`] if the signature cannot be split into complete type encodings.
    /// - Any error of [`GenericType::parse`] for the individual types.
    pub fn parse_many(signature: &str) -> Result<Vec<Self>, InvalidSignature> {
        Self::parse_many_nested(signature, 0)
    }

    fn parse_nested(signature: &str, depth: usize) -> Result<Self, InvalidSignature> {
        if depth > MAX_NESTING_DEPTH {
            return Err(InvalidSignature::TooDeeplyNested);
        }
        let count =
            parameter_count(&format!("({signature})V")).map_err(|_| malformed(signature))?;
        if count != 1 {
            return Err(InvalidSignature::NotSingleType(signature.to_owned()));
        }
        match signature.chars().next() {
            Some('L') => match signature.find('<') {
                None => Ok(FieldType::from_str(signature)?.into()),
                Some(open) => {
                    let close = signature
                        .rfind('>')
                        .filter(|close| *close > open && &signature[close + 1..] == ";")
                        .ok_or_else(|| malformed(signature))?;
                    let arguments =
                        Self::parse_many_nested(&signature[open + 1..close], depth + 1)?;
                    Self::parameterized(&signature[1..open], arguments)
                }
            },
            Some('T') => {
                let name = signature
                    .strip_prefix('T')
                    .and_then(|it| it.strip_suffix(';'))
                    .ok_or_else(|| malformed(signature))?;
                Self::type_variable(name)
            }
            Some('[') => {
                let element = signature.trim_start_matches('[');
                let dimensions = u8::try_from(signature.len() - element.len())
                    .map_err(|_| InvalidSignature::TooManyDimensions)?;
                Self::array_of(Self::parse_nested(element, depth + 1)?, dimensions)
            }
            Some('*') if signature.len() == 1 => Ok(Self::Wildcard),
            Some('+') => Self::parse_nested(&signature[1..], depth + 1).map(Self::wildcard_extends),
            Some('-') => Self::parse_nested(&signature[1..], depth + 1).map(Self::wildcard_super),
            _ => Ok(FieldType::from_str(signature)?.into()),
        }
    }

    fn parse_many_nested(signature: &str, depth: usize) -> Result<Vec<Self>, InvalidSignature> {
        let wrapped = format!("({signature})V");
        let mut reader = SignatureReader::new(&wrapped);
        let parameters = reader.parameters().map_err(|_| malformed(signature))?;
        if reader.remaining() != "V" {
            return Err(malformed(signature));
        }
        parameters
            .into_iter()
            .map(|it| Self::parse_nested(it, depth))
            .collect()
    }
}

impl FromStr for GenericType {
    type Err = InvalidSignature;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        Self::parse(signature)
    }
}
