//! XML Schema validator primitives
//!
//! This module contains the attribute-level validators used while compiling
//! schema component definitions and the particle occurrence algebra used by
//! the content-model compiler.

pub mod helpers;
pub mod particles;

// Re-exports
pub use helpers::{
    count_decimal_digits, count_digits, get_xsd_derivation_attribute, get_xsd_form_attribute,
    XSD_FINAL_ATTRIBUTE_VALUES,
};
pub use particles::{parse_occurs, Occurs, OccursCalculator};
