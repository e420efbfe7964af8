//! # xmlschema-core
//!
//! Foundational lexical and algebraic primitives for XML Schema (XSD)
//! processing, extracted from the helper layer of the Python
//! [xmlschema](https://github.com/sissaschool/xmlschema) package.
//!
//! The crate provides four small, independent components:
//!
//! - qualified name conversion between universal (`{uri}local`), prefixed
//!   (`prefix:local`) and local forms ([`names`]);
//! - validation of XSD derivation control and form attributes
//!   ([`validators::helpers`]);
//! - exact decimal digit counting for `totalDigits`/`fractionDigits` facets
//!   ([`validators::helpers::count_digits`]);
//! - the min/max occurrence algebra for content-model particles
//!   ([`validators::particles`]).
//!
//! All components are pure value computations with no I/O and no shared
//! state; they are safe to call concurrently as long as each caller owns its
//! own [`validators::particles::OccursCalculator`].
//!
//! ## Example
//!
//! ```rust
//! use xmlschema_core::names::{get_qname, local_name};
//!
//! let qname = get_qname("http://www.w3.org/2001/XMLSchema", "element");
//! assert_eq!(qname, "{http://www.w3.org/2001/XMLSchema}element");
//! assert_eq!(local_name(Some(qname.as_str())).unwrap().as_deref(), Some("element"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod names;
pub mod validators;

// Re-exports for convenience
pub use error::{Error, Result};
pub use names::NamespaceMap;
pub use validators::helpers::{count_digits, XSD_FINAL_ATTRIBUTE_VALUES};
pub use validators::particles::{Occurs, OccursCalculator};

/// Version of the xmlschema-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD 1.0 namespace
pub const XSD_1_0_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XSD 1.1 namespace
pub const XSD_1_1_NAMESPACE: &str = "http://www.w3.org/2009/XMLSchema";

/// XML namespace
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// XMLNS namespace
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";
