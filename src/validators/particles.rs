//! XSD particle occurrence bounds
//!
//! Occurrence constraints (minOccurs, maxOccurs) for content-model
//! particles, the validator for their raw attribute text, and the
//! accumulator used to compute the effective occurrence range of nested
//! model groups bottom-up.
//!
//! Reference: https://www.w3.org/TR/xmlschema11-1/#p

use crate::error::{Error, Result};

/// Occurrence bounds of a particle (minOccurs, maxOccurs).
///
/// `max` is a tagged alternative: `None` means unbounded. It is never a
/// numeric sentinel, so the combination arithmetic in [`OccursCalculator`]
/// cannot silently corrupt an unbounded bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurs {
    /// Minimum number of occurrences (default 1)
    pub min: u32,
    /// Maximum number of occurrences (None = unbounded, default 1)
    pub max: Option<u32>,
}

impl Occurs {
    /// Create new occurrence bounds
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Default occurrence (1, 1)
    pub fn once() -> Self {
        Self { min: 1, max: Some(1) }
    }

    /// Optional occurrence (0, 1)
    pub fn optional() -> Self {
        Self { min: 0, max: Some(1) }
    }

    /// Zero or more (0, unbounded)
    pub fn zero_or_more() -> Self {
        Self { min: 0, max: None }
    }

    /// One or more (1, unbounded)
    pub fn one_or_more() -> Self {
        Self { min: 1, max: None }
    }

    /// Never present (0, 0)
    pub fn empty() -> Self {
        Self { min: 0, max: Some(0) }
    }

    /// Check if this particle may be absent (minOccurs == 0)
    pub fn is_emptiable(&self) -> bool {
        self.min == 0
    }

    /// Check if this particle is never present (maxOccurs == 0)
    pub fn is_empty(&self) -> bool {
        self.max == Some(0)
    }

    /// Check if this particle occurs at most once
    pub fn is_single(&self) -> bool {
        self.max == Some(1)
    }

    /// Check if this particle can occur more than once
    pub fn is_multiple(&self) -> bool {
        !self.is_empty() && !self.is_single()
    }

    /// Check if minOccurs != maxOccurs
    pub fn is_ambiguous(&self) -> bool {
        match self.max {
            Some(max) => self.min != max,
            None => true,
        }
    }

    /// Check if minOccurs == maxOccurs
    pub fn is_univocal(&self) -> bool {
        !self.is_ambiguous()
    }

    /// Check if these bounds are a valid occurrence restriction of `base`
    pub fn has_occurs_restriction(&self, base: &Occurs) -> bool {
        if self.min < base.min {
            return false;
        }
        // a never-present particle restricts anything its min allows
        if self.max == Some(0) {
            return true;
        }
        match (self.max, base.max) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(max), Some(base_max)) => max <= base_max,
        }
    }
}

impl Default for Occurs {
    fn default() -> Self {
        Self::once()
    }
}

/// Validate raw `minOccurs`/`maxOccurs` attribute text.
///
/// Missing attributes default to 1. `maxOccurs` admits the `unbounded`
/// keyword; both values must otherwise be non-negative integers with
/// `minOccurs <= maxOccurs`.
pub fn parse_occurs(min_occurs: Option<&str>, max_occurs: Option<&str>) -> Result<Occurs> {
    let mut occurs = Occurs::once();

    if let Some(text) = min_occurs {
        occurs.min = text.parse::<u32>().map_err(|_| {
            Error::Constraint(format!(
                "wrong value {:?} for attribute 'minOccurs', it must be a non-negative integer",
                text
            ))
        })?;
    }

    match max_occurs {
        Some("unbounded") => occurs.max = None,
        Some(text) => {
            let max = text.parse::<u32>().map_err(|_| {
                Error::Constraint(format!(
                    "wrong value {:?} for attribute 'maxOccurs', \
                     it must be a non-negative integer or 'unbounded'",
                    text
                ))
            })?;
            if occurs.min > max {
                return Err(Error::Constraint(
                    "minOccurs must be lesser or equal than maxOccurs".to_string(),
                ));
            }
            occurs.max = Some(max);
        }
        None => {
            if occurs.min > 1 {
                return Err(Error::Constraint(
                    "minOccurs must be lesser or equal than maxOccurs".to_string(),
                ));
            }
        }
    }

    Ok(occurs)
}

/// Accumulator for the total min/max occurrences of XSD particles.
///
/// The content-model compiler creates one per group node, folds the
/// children in with [`add`](Self::add) (particles placed one after another)
/// and applies the group's own bounds with [`multiply`](Self::multiply).
/// Both operations mutate the accumulator in place.
#[derive(Debug, Clone, Copy)]
pub struct OccursCalculator {
    /// Accumulated minimum occurrences
    pub min_occurs: u32,
    /// Accumulated maximum occurrences (None = unbounded)
    pub max_occurs: Option<u32>,
}

impl OccursCalculator {
    /// Create a new accumulator initialized to (0, 0)
    pub fn new() -> Self {
        Self {
            min_occurs: 0,
            max_occurs: Some(0),
        }
    }

    /// Read the accumulated bounds
    pub fn occurs(&self) -> Occurs {
        Occurs::new(self.min_occurs, self.max_occurs)
    }

    /// Add a particle placed in sequence: minimums add up and an unbounded
    /// maximum on either side makes the sum unbounded. Finite bounds
    /// saturate at `u32::MAX` instead of overflowing.
    pub fn add(&mut self, other: Occurs) {
        self.min_occurs = self.min_occurs.saturating_add(other.min);
        self.max_occurs = match (self.max_occurs, other.max) {
            (Some(a), Some(b)) => Some(a.saturating_add(b)),
            _ => None,
        };
    }

    /// Multiply by the bounds of an enclosing or nested particle.
    ///
    /// A never-present operand (maxOccurs 0) absorbs an unbounded one in
    /// either position: there is nothing to repeat, so the product stays 0
    /// rather than becoming unbounded. Finite bounds saturate at
    /// `u32::MAX` instead of overflowing.
    pub fn multiply(&mut self, other: Occurs) {
        self.min_occurs = self.min_occurs.saturating_mul(other.min);
        self.max_occurs = match (self.max_occurs, other.max) {
            (None, Some(0)) => Some(0),
            (Some(0), _) => Some(0),
            (Some(_), None) => None,
            (None, _) => None,
            (Some(a), Some(b)) => Some(a.saturating_mul(b)),
        };
    }

    /// Reset the accumulator to (0, 0)
    pub fn reset(&mut self) {
        self.min_occurs = 0;
        self.max_occurs = Some(0);
    }
}

impl Default for OccursCalculator {
    fn default() -> Self {
        Self::new()
    }
}
