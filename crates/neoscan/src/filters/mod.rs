//! Attribute filters over close approaches.
//!
//! A query is a set of single-criterion predicates combined with AND. Each
//! predicate is an [`AttributeFilter`]: a [`Comparator`] and a reference
//! [`Value`] bound to one [`Attribute`]. The comparison is the same for every
//! attribute; only the extraction differs, and that is a `match` on the
//! attribute rather than a per-attribute type.
//!
//! # Example
//!
//! ```
//! use neoscan::filters::{create_filters, Criteria};
//!
//! let criteria = Criteria {
//!     distance_max: Some(0.4),
//!     hazardous: Some(true),
//!     ..Criteria::default()
//! };
//! let filters = create_filters(&criteria);
//!
//! assert_eq!(filters.len(), 2);
//! assert_eq!(filters.to_string(), "distance <= 0.4 AND hazardous == true");
//! ```

mod factory;
mod set;

pub use factory::{create_filters, Criteria};
pub use set::{FilterSet, Matches};

use crate::domain::CloseApproach;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Errors raised by the filter engine.
///
/// These indicate a bug in the caller, not bad user input: a filter was
/// built with a reference value its attribute cannot be compared against.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// The attribute has no accessor that yields a value of this kind.
    #[error("unsupported criterion: {attribute} cannot be compared with {value_kind} value {value}")]
    UnsupportedCriterion {
        /// The attribute the filter is bound to.
        attribute: Attribute,
        /// Kind of the reference value that was supplied.
        value_kind: ValueKind,
        /// The reference value that was supplied.
        value: Value,
    },
}

/// Binary comparison applied as `record_value OP reference_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// `==`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl Comparator {
    /// Apply the comparison.
    pub fn compare<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ge => lhs >= rhs,
            Self::Le => lhs <= rhs,
        }
    }

    /// Short operator name (`eq`, `ge`, `le`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ge => "ge",
            Self::Le => "le",
        }
    }

    /// Operator symbol (`==`, `>=`, `<=`).
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ge => ">=",
            Self::Le => "<=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Calendar date
    Date,
    /// Floating-point number
    Number,
    /// Boolean flag
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Date => "date",
            Self::Number => "number",
            Self::Flag => "flag",
        })
    }
}

/// A reference value or an extracted attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Calendar date, no time of day
    Date(NaiveDate),
    /// Floating-point number
    Number(f64),
    /// Boolean flag
    Flag(bool),
}

impl Value {
    /// The kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Date(_) => ValueKind::Date,
            Self::Number(_) => ValueKind::Number,
            Self::Flag(_) => ValueKind::Flag,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date),
            Self::Number(number) => write!(f, "{}", number),
            Self::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

/// A filterable attribute of a close approach.
///
/// The set is closed; adding an attribute means adding a variant here and an
/// arm in [`Attribute::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Calendar date of the approach (time of day discarded)
    Date,
    /// Nominal approach distance in au
    Distance,
    /// Relative approach velocity in km/s
    Velocity,
    /// Diameter of the approaching NEO in km
    Diameter,
    /// Hazard flag of the approaching NEO
    Hazardous,
}

impl Attribute {
    /// Every attribute, in factory order.
    pub const ALL: [Attribute; 5] = [
        Self::Date,
        Self::Distance,
        Self::Velocity,
        Self::Diameter,
        Self::Hazardous,
    ];

    /// Lowercase attribute name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Distance => "distance",
            Self::Velocity => "velocity",
            Self::Diameter => "diameter",
            Self::Hazardous => "hazardous",
        }
    }

    /// Kind of value the accessor yields.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Self::Date => ValueKind::Date,
            Self::Distance | Self::Velocity | Self::Diameter => ValueKind::Number,
            Self::Hazardous => ValueKind::Flag,
        }
    }

    /// Extract this attribute from an approach.
    ///
    /// Returns `None` when the value is unknown: an unknown diameter, or a
    /// diameter/hazard flag for an approach that is not linked to its NEO.
    pub fn get(self, approach: &CloseApproach) -> Option<Value> {
        match self {
            Self::Date => Some(Value::Date(approach.time.date())),
            Self::Distance => Some(Value::Number(approach.distance)),
            Self::Velocity => Some(Value::Number(approach.velocity)),
            Self::Diameter => approach
                .neo
                .as_ref()
                .and_then(|neo| neo.diameter)
                .map(Value::Number),
            Self::Hazardous => approach.neo.as_ref().map(|neo| Value::Flag(neo.hazardous)),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single-criterion predicate: `attribute(approach) OP value`.
#[derive(Clone, Copy, PartialEq)]
pub struct AttributeFilter {
    attribute: Attribute,
    op: Comparator,
    value: Value,
}

impl AttributeFilter {
    /// Bind a comparator and reference value to an attribute.
    ///
    /// The value kind is not checked here; see [`validate`](Self::validate).
    pub fn new(attribute: Attribute, op: Comparator, value: impl Into<Value>) -> Self {
        Self {
            attribute,
            op,
            value: value.into(),
        }
    }

    /// Filter on the calendar date of the approach.
    pub fn date(op: Comparator, date: NaiveDate) -> Self {
        Self::new(Attribute::Date, op, date)
    }

    /// Filter on the nominal approach distance.
    pub fn distance(op: Comparator, au: f64) -> Self {
        Self::new(Attribute::Distance, op, au)
    }

    /// Filter on the relative approach velocity.
    pub fn velocity(op: Comparator, km_s: f64) -> Self {
        Self::new(Attribute::Velocity, op, km_s)
    }

    /// Filter on the NEO diameter.
    pub fn diameter(op: Comparator, km: f64) -> Self {
        Self::new(Attribute::Diameter, op, km)
    }

    /// Filter on the NEO hazard flag.
    pub fn hazardous(op: Comparator, hazardous: bool) -> Self {
        Self::new(Attribute::Hazardous, op, hazardous)
    }

    /// The attribute this filter reads.
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// The comparator.
    pub fn op(&self) -> Comparator {
        self.op
    }

    /// The reference value.
    pub fn value(&self) -> Value {
        self.value
    }

    /// Check that the reference value can be compared with the attribute.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnsupportedCriterion`] on a kind mismatch.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.attribute.value_kind() == self.value.kind() {
            Ok(())
        } else {
            Err(FilterError::UnsupportedCriterion {
                attribute: self.attribute,
                value_kind: self.value.kind(),
                value: self.value,
            })
        }
    }

    /// Evaluate the filter against an approach.
    ///
    /// An unknown attribute value never matches.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnsupportedCriterion`] if the filter is
    /// invalid, before the approach is inspected.
    pub fn evaluate(&self, approach: &CloseApproach) -> Result<bool, FilterError> {
        self.validate()?;
        Ok(self.test(approach))
    }

    /// Evaluate a filter already known to be valid.
    pub(crate) fn test(&self, approach: &CloseApproach) -> bool {
        let Some(actual) = self.attribute.get(approach) else {
            return false;
        };
        match (actual, self.value) {
            (Value::Date(actual), Value::Date(reference)) => self.op.compare(&actual, &reference),
            (Value::Number(actual), Value::Number(reference)) => {
                self.op.compare(&actual, &reference)
            }
            (Value::Flag(actual), Value::Flag(reference)) => self.op.compare(&actual, &reference),
            _ => false,
        }
    }
}

impl fmt::Debug for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut name = self.attribute.name().to_string();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        write!(f, "{}Filter(op={}, value={})", name, self.op.name(), self.value)
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.op, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NearEarthObject;
    use rstest::rstest;
    use std::sync::Arc;

    fn approach_at(day: u32, hour: u32) -> CloseApproach {
        let time = NaiveDate::from_ymd_opt(2020, 1, day)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap();
        CloseApproach::new("433", time, 0.3, 12.5)
    }

    fn linked(diameter: Option<f64>, hazardous: bool) -> CloseApproach {
        let neo = NearEarthObject::new("433", None, diameter, hazardous);
        approach_at(1, 0).with_neo(Arc::new(neo))
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, day).unwrap()
    }

    #[rstest]
    #[case::eq_equal(Comparator::Eq, 1.0, 1.0, true)]
    #[case::eq_different(Comparator::Eq, 1.0, 2.0, false)]
    #[case::ge_greater(Comparator::Ge, 2.0, 1.0, true)]
    #[case::ge_equal(Comparator::Ge, 1.0, 1.0, true)]
    #[case::ge_less(Comparator::Ge, 0.5, 1.0, false)]
    #[case::le_less(Comparator::Le, 0.5, 1.0, true)]
    #[case::le_equal(Comparator::Le, 1.0, 1.0, true)]
    #[case::le_greater(Comparator::Le, 2.0, 1.0, false)]
    fn test_comparator(
        #[case] op: Comparator,
        #[case] lhs: f64,
        #[case] rhs: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(op.compare(&lhs, &rhs), expected);
    }

    #[test]
    fn test_nan_never_compares() {
        for op in [Comparator::Eq, Comparator::Ge, Comparator::Le] {
            assert!(!op.compare(&f64::NAN, &1.0));
        }
    }

    #[test]
    fn test_date_accessor_truncates_time_of_day() {
        let morning = approach_at(2, 0);
        let night = approach_at(2, 23);
        let filter = AttributeFilter::date(Comparator::Eq, jan(2));

        assert!(filter.evaluate(&morning).unwrap());
        assert!(filter.evaluate(&night).unwrap());
        assert!(!filter.evaluate(&approach_at(3, 0)).unwrap());
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let approach = approach_at(10, 22);
        assert!(AttributeFilter::date(Comparator::Ge, jan(10))
            .evaluate(&approach)
            .unwrap());
        assert!(AttributeFilter::date(Comparator::Le, jan(10))
            .evaluate(&approach)
            .unwrap());
        assert!(!AttributeFilter::date(Comparator::Ge, jan(11))
            .evaluate(&approach)
            .unwrap());
    }

    #[rstest]
    #[case::distance_min(AttributeFilter::distance(Comparator::Ge, 0.3), true)]
    #[case::distance_max(AttributeFilter::distance(Comparator::Le, 0.2), false)]
    #[case::velocity_min(AttributeFilter::velocity(Comparator::Ge, 13.0), false)]
    #[case::velocity_max(AttributeFilter::velocity(Comparator::Le, 12.5), true)]
    fn test_approach_number_accessors(#[case] filter: AttributeFilter, #[case] expected: bool) {
        assert_eq!(filter.evaluate(&approach_at(1, 0)).unwrap(), expected);
    }

    #[test]
    fn test_neo_accessors_read_linked_neo() {
        let approach = linked(Some(1.5), true);
        assert_eq!(
            Attribute::Diameter.get(&approach),
            Some(Value::Number(1.5))
        );
        assert_eq!(Attribute::Hazardous.get(&approach), Some(Value::Flag(true)));
        assert!(AttributeFilter::hazardous(Comparator::Eq, true)
            .evaluate(&approach)
            .unwrap());
        assert!(!AttributeFilter::hazardous(Comparator::Eq, false)
            .evaluate(&approach)
            .unwrap());
    }

    #[rstest]
    #[case::min(Comparator::Ge)]
    #[case::max(Comparator::Le)]
    #[case::exact(Comparator::Eq)]
    fn test_unknown_diameter_never_matches(#[case] op: Comparator) {
        let approach = linked(None, false);
        assert_eq!(Attribute::Diameter.get(&approach), None);
        assert!(!AttributeFilter::diameter(op, 0.0)
            .evaluate(&approach)
            .unwrap());
    }

    #[test]
    fn test_unlinked_approach_has_no_neo_attributes() {
        let approach = approach_at(1, 0);
        assert_eq!(Attribute::Diameter.get(&approach), None);
        assert_eq!(Attribute::Hazardous.get(&approach), None);
        assert!(!AttributeFilter::hazardous(Comparator::Eq, false)
            .evaluate(&approach)
            .unwrap());
    }

    #[test]
    fn test_mismatched_value_is_unsupported_criterion() {
        let filter = AttributeFilter::new(Attribute::Hazardous, Comparator::Ge, 0.5);
        let err = filter.evaluate(&linked(Some(1.0), true)).unwrap_err();

        assert_eq!(
            err,
            FilterError::UnsupportedCriterion {
                attribute: Attribute::Hazardous,
                value_kind: ValueKind::Number,
                value: Value::Number(0.5),
            }
        );
        assert!(err.to_string().contains("hazardous cannot be compared"));
    }

    #[test]
    fn test_every_attribute_accepts_its_own_kind() {
        let reference = |kind: ValueKind| match kind {
            ValueKind::Date => Value::Date(jan(1)),
            ValueKind::Number => Value::Number(1.0),
            ValueKind::Flag => Value::Flag(true),
        };
        for attribute in Attribute::ALL {
            let filter =
                AttributeFilter::new(attribute, Comparator::Eq, reference(attribute.value_kind()));
            assert!(filter.validate().is_ok(), "{attribute} should accept its kind");
        }
    }

    #[test]
    fn test_debug_and_display() {
        let filter = AttributeFilter::distance(Comparator::Le, 0.4);
        assert_eq!(format!("{:?}", filter), "DistanceFilter(op=le, value=0.4)");
        assert_eq!(filter.to_string(), "distance <= 0.4");

        let filter = AttributeFilter::date(Comparator::Eq, jan(2));
        assert_eq!(format!("{:?}", filter), "DateFilter(op=eq, value=2020-01-02)");
    }
}
