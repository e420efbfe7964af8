//! Validator helper functions
//!
//! Attribute-level validators for XSD derivation control and form
//! attributes, plus the exact digit counter backing `totalDigits` and
//! `fractionDigits` facet checks. Attribute text is expected pre-trimmed,
//! exactly as found in the schema source.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

/// XSD final attribute values
pub const XSD_FINAL_ATTRIBUTE_VALUES: &[&str] = &["restriction", "extension", "list", "union"];

// Finite lexical forms of xs:decimal/xs:float/xs:double
static DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([Ee][+-]?\d+)?$").unwrap());

/// Validate a derivation attribute value (`block`, `blockDefault`, `final`
/// or `finalDefault`) against the admitted token set.
///
/// An absent value yields the empty string. The single token `#all` expands
/// to the space-joined `values` in the order given; otherwise every
/// whitespace-separated token must be a member of `values` and the raw value
/// is returned unchanged.
pub fn get_xsd_derivation_attribute(
    value: Option<&str>,
    attribute: &str,
    values: &[&str],
) -> Result<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };

    let items: Vec<&str> = value.split_whitespace().collect();
    if items.len() == 1 && items[0] == "#all" {
        Ok(values.join(" "))
    } else if items.iter().any(|s| !values.contains(s)) {
        Err(Error::Constraint(format!(
            "wrong value {:?} for attribute {:?}",
            value, attribute
        )))
    } else {
        Ok(value.to_string())
    }
}

/// Validate an XSD form attribute (`form`, `elementFormDefault` or
/// `attributeFormDefault`).
///
/// Returns `None` when the attribute is missing, keeping "not specified"
/// distinct from an explicit value. A present value must be exactly
/// `qualified` or `unqualified`.
pub fn get_xsd_form_attribute(value: Option<&str>, attribute: &str) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(value @ ("qualified" | "unqualified")) => Ok(Some(value.to_string())),
        Some(value) => Err(Error::Constraint(format!(
            "wrong value {:?} for attribute {:?}, it must be 'qualified' or 'unqualified'",
            value, attribute
        ))),
    }
}

/// Count the digits of a numeric lexical value.
///
/// Returns the number of digits of the integer part and of the fraction
/// part of the minimal decimal representation, ignoring the sign and any
/// non-significant zeros. Scientific notation is handled by shifting the
/// decimal point, so any exponent magnitude is counted exactly. A value
/// that is not a finite numeric lexical form fails with
/// [`Error::Constraint`].
pub fn count_digits(value: &str) -> Result<(usize, usize)> {
    if !DECIMAL_PATTERN.is_match(value) {
        return Err(Error::Constraint(format!(
            "{:?} is not a valid numeric lexical value",
            value
        )));
    }

    let unsigned = value.trim_start_matches(['+', '-']);
    match unsigned.split_once(['E', 'e']) {
        Some((significand, exponent)) => {
            let exponent: i64 = exponent.parse().map_err(|_| {
                Error::Constraint(format!("exponent out of range in {:?}", value))
            })?;
            Ok(count_decimal_parts(significand, exponent))
        }
        None => Ok(count_decimal_parts(unsigned, 0)),
    }
}

/// Count the digits of an exact decimal value.
///
/// Infallible counterpart of [`count_digits`] for already parsed values;
/// counts over the canonical plain-decimal rendering, which carries no
/// binary-float rounding artifacts.
pub fn count_decimal_digits(value: &Decimal) -> (usize, usize) {
    let text = value.to_string();
    count_decimal_parts(text.trim_start_matches(['+', '-']), 0)
}

// `significand` is an unsigned decimal literal; `exponent` shifts the
// decimal point right. Counting works on digit positions only: the integer
// digits span from the first significant digit to the point, the fraction
// digits from the point to the last significant digit. Positions are
// widened to i128 so that exponents at the i64 limits cannot overflow
// the shift.
fn count_decimal_parts(significand: &str, exponent: i64) -> (usize, usize) {
    let (integer_part, decimal_part) = match significand.split_once('.') {
        Some((integer_part, decimal_part)) => (integer_part, decimal_part),
        None => (significand, ""),
    };

    let digits: Vec<u8> = integer_part.bytes().chain(decimal_part.bytes()).collect();
    let point = integer_part.len() as i128 + exponent as i128;

    let Some(first) = digits.iter().position(|&b| b != b'0') else {
        return (0, 0); // zero in any representation
    };
    let last = digits.iter().rposition(|&b| b != b'0').unwrap_or(first);

    let integer_digits = (point - first as i128).max(0) as usize;
    let fraction_digits = (last as i128 + 1 - point).max(0) as usize;
    (integer_digits, fraction_digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_derivation_attribute() {
        let result =
            get_xsd_derivation_attribute(Some("extension"), "final", XSD_FINAL_ATTRIBUTE_VALUES)
                .unwrap();
        assert_eq!(result, "extension");

        // multiple tokens are kept verbatim, not normalized
        let result = get_xsd_derivation_attribute(
            Some("restriction  extension"),
            "block",
            XSD_FINAL_ATTRIBUTE_VALUES,
        )
        .unwrap();
        assert_eq!(result, "restriction  extension");

        let result =
            get_xsd_derivation_attribute(None, "final", XSD_FINAL_ATTRIBUTE_VALUES).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_derivation_attribute_all() {
        let result =
            get_xsd_derivation_attribute(Some("#all"), "final", XSD_FINAL_ATTRIBUTE_VALUES)
                .unwrap();
        assert_eq!(result, "restriction extension list union");

        let result = get_xsd_derivation_attribute(Some("#all"), "block", &["a", "b", "c"]).unwrap();
        assert_eq!(result, "a b c");
    }

    #[test]
    fn test_derivation_attribute_wrong_value() {
        let err = get_xsd_derivation_attribute(Some("a x"), "final", &["a", "b"]).unwrap_err();
        assert!(matches!(err, Error::Constraint(_)));
        let message = err.to_string();
        assert!(message.contains("a x"));
        assert!(message.contains("final"));

        // '#all' is only admitted as the sole token
        assert!(get_xsd_derivation_attribute(
            Some("#all extension"),
            "final",
            XSD_FINAL_ATTRIBUTE_VALUES
        )
        .is_err());
    }

    #[test]
    fn test_form_attribute() {
        assert_eq!(
            get_xsd_form_attribute(Some("qualified"), "form").unwrap(),
            Some("qualified".to_string())
        );
        assert_eq!(
            get_xsd_form_attribute(Some("unqualified"), "form").unwrap(),
            Some("unqualified".to_string())
        );
        assert_eq!(get_xsd_form_attribute(None, "form").unwrap(), None);
    }

    #[test]
    fn test_form_attribute_wrong_value() {
        let err = get_xsd_form_attribute(Some("maybe"), "elementFormDefault").unwrap_err();
        assert!(matches!(err, Error::Constraint(_)));
        assert!(err.to_string().contains("elementFormDefault"));
        assert!(get_xsd_form_attribute(Some(""), "form").is_err());
        assert!(get_xsd_form_attribute(Some("Qualified"), "form").is_err());
    }

    #[test]
    fn test_count_digits() {
        assert_eq!(count_digits("0012.3400").unwrap(), (2, 2));
        assert_eq!(count_digits("100").unwrap(), (3, 0));
        assert_eq!(count_digits("-3.14").unwrap(), (1, 2));
        assert_eq!(count_digits("+0.50").unwrap(), (0, 1));
        assert_eq!(count_digits("0").unwrap(), (0, 0));
        assert_eq!(count_digits("0.0").unwrap(), (0, 0));
        assert_eq!(count_digits(".5").unwrap(), (0, 1));
        assert_eq!(count_digits("5.").unwrap(), (1, 0));
    }

    #[test]
    fn test_count_digits_scientific() {
        assert_eq!(count_digits("1.5E3").unwrap(), (4, 0));
        assert_eq!(count_digits("1.5E-3").unwrap(), (0, 4));
        assert_eq!(count_digits("1E10").unwrap(), (11, 0));
        assert_eq!(count_digits("1.23e3").unwrap(), (4, 0));
        assert_eq!(count_digits("12345E2").unwrap(), (7, 0));
        assert_eq!(count_digits("0.5E2").unwrap(), (2, 0));
        assert_eq!(count_digits("1.50E2").unwrap(), (3, 0));
        assert_eq!(count_digits("0E5").unwrap(), (0, 0));
        // exponent shifts inside the significand
        assert_eq!(count_digits("123.45E1").unwrap(), (4, 1));
        // larger than any binary float mantissa, still exact
        assert_eq!(count_digits("1E40").unwrap(), (41, 0));
    }

    #[test]
    fn test_count_digits_invalid() {
        assert!(matches!(count_digits(""), Err(Error::Constraint(_))));
        assert!(count_digits("abc").is_err());
        assert!(count_digits("1.2.3").is_err());
        assert!(count_digits("1E").is_err());
        assert!(count_digits("NaN").is_err());
        assert!(count_digits("INF").is_err());
        assert!(count_digits(" 1 ").is_err());
        // exponents beyond i64 are rejected, not miscounted
        assert!(count_digits("1E99999999999999999999").is_err());
    }

    #[test]
    fn test_count_digits_extreme_exponent() {
        // exponents at the i64 limits shift the point without overflow
        assert_eq!(
            count_digits("1.5E9223372036854775807").unwrap(),
            (9_223_372_036_854_775_808, 0)
        );
        assert_eq!(
            count_digits("1.5E-9223372036854775808").unwrap(),
            (0, 9_223_372_036_854_775_809)
        );
        assert_eq!(count_digits("0E9223372036854775807").unwrap(), (0, 0));
    }

    #[test]
    fn test_count_decimal_digits() {
        let value = Decimal::from_str("0012.3400").unwrap();
        assert_eq!(count_decimal_digits(&value), (2, 2));

        let value = Decimal::from_str("-100").unwrap();
        assert_eq!(count_decimal_digits(&value), (3, 0));

        assert_eq!(count_decimal_digits(&Decimal::ZERO), (0, 0));

        let value = Decimal::from_scientific("1.5e3").unwrap();
        assert_eq!(count_decimal_digits(&value), (4, 0));

        let value = Decimal::from_scientific("1.5e-3").unwrap();
        assert_eq!(count_decimal_digits(&value), (0, 4));
    }
}
