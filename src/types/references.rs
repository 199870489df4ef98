//! References to JVM classes.
use std::fmt::Display;

/// A reference to a class by its binary name.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct ClassRef {
    /// The binary name of the class (e.g., `java/lang/String`).
    pub binary_name: String,
}

impl ClassRef {
    /// Creates a new [`ClassRef`] from a binary name.
    pub fn new<S: Into<String>>(binary_name: S) -> Self {
        ClassRef {
            binary_name: binary_name.into(),
        }
    }

    /// Returns the name of the class as written in Java source code (e.g., `java.lang.String`).
    #[must_use]
    pub fn java_name(&self) -> String {
        self.binary_name.replace('/', ".")
    }
}

impl Display for ClassRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary_name)
    }
}
