#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![deny(rustdoc::broken_intra_doc_links)]

//! A library for decoding and rendering the generic type signatures stored in JVM class files.
//!
//! Generic information survives compilation only in the `Signature` attribute, encoded in a
//! compact grammar such as `Ljava/util/Map<TK;+Ljava/lang/Number;>;`.
//! This crate parses such signatures into [`GenericType`](types::signatures::GenericType) values
//! and renders them back in Java source form.
//!
//! ```
//! use jvm_generics::types::signatures::{GenericType, TypeCategory};
//!
//! let list: GenericType = "Ljava/util/List<+Ljava/lang/Number;>;".parse().unwrap();
//! assert_eq!(list.category(), TypeCategory::Parameterized);
//! assert_eq!(list.to_string(), "java.util.List<? extends java.lang.Number>");
//! ```

pub(crate) mod macros;
pub mod types;

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
