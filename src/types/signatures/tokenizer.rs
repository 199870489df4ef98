//! Splitting of signature text into self-contained type encodings.
//!
//! Nested type arguments are balanced, so `Ljava/util/Map<TK;TV;>;I` splits into
//! `Ljava/util/Map<TK;TV;>;` and `I`.

use super::InvalidSignature;

/// A cursor over signature text that yields one type encoding at a time.
#[derive(Debug, Clone)]
pub struct SignatureReader<'s> {
    signature: &'s str,
    remaining: &'s str,
}

impl<'s> SignatureReader<'s> {
    /// Creates a reader positioned at the start of `signature`.
    #[must_use]
    pub fn new(signature: &'s str) -> Self {
        Self {
            signature,
            remaining: signature,
        }
    }

    /// The text that has not been read yet.
    #[must_use]
    pub fn remaining(&self) -> &'s str {
        self.remaining
    }

    /// Checks if the whole signature has been read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Consumes the next character if it is `expected`.
    /// Returns whether it was consumed.
    pub fn consume(&mut self, expected: char) -> bool {
        match self.remaining.strip_prefix(expected) {
            Some(rest) => {
                self.remaining = rest;
                true
            }
            None => false,
        }
    }

    /// Consumes the next character, which must be `expected`.
    /// # Errors
    /// - [`InvalidSignature::Malformed`] if the next character is not `expected`.
    pub fn expect(&mut self, expected: char) -> Result<(), InvalidSignature> {
        if self.consume(expected) {
            Ok(())
        } else {
            Err(self.malformed())
        }
    }

    /// Reads an identifier terminated by `delimiter` and consumes the delimiter.
    /// # Errors
    /// - [`InvalidSignature::Malformed`] if the identifier is empty, is not terminated, or
    ///   contains a signature delimiter.
    pub fn identifier_until(&mut self, delimiter: char) -> Result<&'s str, InvalidSignature> {
        let (identifier, rest) = self
            .remaining
            .split_once(delimiter)
            .ok_or_else(|| self.malformed())?;
        if identifier.is_empty() || identifier.contains(['<', '>', ';', ':', '(', ')']) {
            return Err(self.malformed());
        }
        self.remaining = rest;
        Ok(identifier)
    }

    /// Reads exactly one type encoding, e.g., `I`, `TT;`, `[Ljava/util/List<*>;` or `+TT;`.
    /// # Errors
    /// - [`InvalidSignature::Malformed`] if the remaining text does not start with a complete type encoding.
    pub fn next_type(&mut self) -> Result<&'s str, InvalidSignature> {
        let bytes = self.remaining.as_bytes();
        let prefix_len = bytes
            .iter()
            .take_while(|it| matches!(**it, b'[' | b'+' | b'-'))
            .count();
        let body = &bytes[prefix_len..];
        let body_len = match body.first() {
            Some(b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z' | b'*') => Some(1),
            Some(b'T') => body
                .iter()
                .position(|it| matches!(it, b';' | b'<' | b'>' | b'(' | b')'))
                .filter(|end| body[*end] == b';' && *end > 1)
                .map(|end| end + 1),
            Some(b'L') => class_type_len(body),
            _ => None,
        }
        .ok_or_else(|| self.malformed())?;
        let (token, rest) = self.remaining.split_at(prefix_len + body_len);
        self.remaining = rest;
        Ok(token)
    }

    /// Reads a parenthesized parameter list, e.g., `(ITT;)`, and returns the encoding of each parameter.
    /// # Errors
    /// - [`InvalidSignature::Malformed`] if the list is not opened, not closed, or contains a malformed type.
    pub fn parameters(&mut self) -> Result<Vec<&'s str>, InvalidSignature> {
        self.expect('(')?;
        let mut parameters = Vec::new();
        while !self.consume(')') {
            parameters.push(self.next_type()?);
        }
        Ok(parameters)
    }

    pub(crate) fn malformed(&self) -> InvalidSignature {
        InvalidSignature::Malformed(self.signature.to_owned())
    }
}

/// Returns the length of the class type at the start of `body`, including the trailing `;`.
fn class_type_len(body: &[u8]) -> Option<usize> {
    let mut depth = 0usize;
    for (index, byte) in body.iter().enumerate().skip(1) {
        match byte {
            b'<' => depth += 1,
            b'>' => depth = depth.checked_sub(1)?,
            b';' if depth == 0 => return (index > 1).then_some(index + 1),
            b'(' | b')' => return None,
            _ => {}
        }
    }
    None
}

/// Splits the parameters of a method signature of the form `(T1T2...Tn)R` into `[T1, T2, ..., Tn]`.
/// # Errors
/// - [`InvalidSignature::Malformed`] if the parameter list is malformed.
pub fn split_parameter_signatures(wrapped: &str) -> Result<Vec<&str>, InvalidSignature> {
    SignatureReader::new(wrapped).parameters()
}

/// Counts the parameters of a method signature of the form `(T1T2...Tn)R`.
/// # Errors
/// - [`InvalidSignature::Malformed`] if the parameter list is malformed.
pub fn parameter_count(wrapped: &str) -> Result<usize, InvalidSignature> {
    split_parameter_signatures(wrapped).map(|it| it.len())
}
