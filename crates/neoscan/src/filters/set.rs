//! Ordered filter collections and AND-evaluation over record sequences.

use super::{AttributeFilter, FilterError};
use crate::domain::CloseApproach;
use std::fmt;
use std::iter::FusedIterator;

/// An ordered, immutable collection of filters combined with AND.
///
/// An empty set accepts every approach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    filters: Vec<AttributeFilter>,
}

impl FilterSet {
    /// Create a filter set from filters in evaluation order.
    pub fn new(filters: Vec<AttributeFilter>) -> Self {
        Self { filters }
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the set has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate over the filters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeFilter> {
        self.filters.iter()
    }

    /// Check every filter.
    ///
    /// # Errors
    ///
    /// Returns the first [`FilterError::UnsupportedCriterion`] found.
    pub fn validate(&self) -> Result<(), FilterError> {
        self.filters.iter().try_for_each(AttributeFilter::validate)
    }

    /// Evaluate the whole set against one approach.
    ///
    /// # Errors
    ///
    /// Fails if any filter is invalid, whether or not an earlier filter
    /// already rejected the approach.
    pub fn evaluate(&self, approach: &CloseApproach) -> Result<bool, FilterError> {
        self.validate()?;
        Ok(self.accepts(approach))
    }

    /// AND of every filter, short-circuiting. The set must be valid.
    pub(crate) fn accepts(&self, approach: &CloseApproach) -> bool {
        self.filters.iter().all(|filter| filter.test(approach))
    }

    /// Lazily select the records every filter accepts, in source order.
    ///
    /// The set is validated once up front, so an invalid filter fails
    /// before any record is pulled.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnsupportedCriterion`] for an invalid filter.
    pub fn select<'r, I>(&self, records: I) -> Result<Matches<'_, I::IntoIter>, FilterError>
    where
        I: IntoIterator<Item = &'r CloseApproach>,
    {
        self.validate()?;
        Ok(Matches {
            filters: self,
            records: records.into_iter(),
        })
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a AttributeFilter;
    type IntoIter = std::slice::Iter<'a, AttributeFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<AttributeFilter> for FilterSet {
    fn from_iter<T: IntoIterator<Item = AttributeFilter>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<AttributeFilter>> for FilterSet {
    fn from(filters: Vec<AttributeFilter>) -> Self {
        Self::new(filters)
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filters.is_empty() {
            return f.write_str("(no filters)");
        }
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", filter)?;
        }
        Ok(())
    }
}

/// Lazy iterator over the records accepted by a [`FilterSet`].
///
/// Created by [`FilterSet::select`]. Pulls from the source only as far as
/// needed to produce the next match.
#[derive(Debug, Clone)]
pub struct Matches<'f, I> {
    filters: &'f FilterSet,
    records: I,
}

impl<'f, 'r, I> Iterator for Matches<'f, I>
where
    I: Iterator<Item = &'r CloseApproach>,
{
    type Item = &'r CloseApproach;

    fn next(&mut self) -> Option<Self::Item> {
        let filters = self.filters;
        self.records.find(|approach| filters.accepts(approach))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.records.size_hint();
        if self.filters.is_empty() {
            self.records.size_hint()
        } else {
            (0, upper)
        }
    }
}

impl<'f, 'r, I> FusedIterator for Matches<'f, I> where I: FusedIterator<Item = &'r CloseApproach> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NearEarthObject;
    use crate::filters::{create_filters, Attribute, Comparator, Criteria};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn approach(designation: &str, distance: f64, hazardous: bool) -> CloseApproach {
        let time = NaiveDate::from_ymd_opt(2021, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let neo = NearEarthObject::new(designation, None, Some(1.0), hazardous);
        CloseApproach::new(designation, time, distance, 10.0).with_neo(Arc::new(neo))
    }

    fn fixtures() -> Vec<CloseApproach> {
        vec![
            approach("A", 0.1, true),
            approach("B", 0.5, false),
            approach("C", 0.3, true),
        ]
    }

    fn designations<'a>(records: impl Iterator<Item = &'a CloseApproach>) -> Vec<&'a str> {
        records.map(|a| a.designation.as_str()).collect()
    }

    #[test]
    fn test_empty_set_selects_everything() {
        let records = fixtures();
        let filters = FilterSet::default();
        let selected = filters.select(&records).unwrap();
        assert_eq!(designations(selected), vec!["A", "B", "C"]);
        assert_eq!(filters.to_string(), "(no filters)");
    }

    #[test]
    fn test_and_semantics_example() {
        let records = fixtures();
        let filters = create_filters(&Criteria {
            distance_max: Some(0.4),
            hazardous: Some(true),
            ..Criteria::default()
        });
        let selected = filters.select(&records).unwrap();
        assert_eq!(designations(selected), vec!["A", "C"]);

        let tighter = create_filters(&Criteria {
            distance_max: Some(0.2),
            hazardous: Some(true),
            ..Criteria::default()
        });
        assert_eq!(designations(tighter.select(&records).unwrap()), vec!["A"]);
    }

    #[test]
    fn test_contradictory_bounds_select_nothing() {
        let records = fixtures();
        let filters = create_filters(&Criteria {
            distance_min: Some(0.4),
            distance_max: Some(0.2),
            ..Criteria::default()
        });
        assert_eq!(filters.select(&records).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_filter_fails_before_iteration() {
        let records = fixtures();
        let filters: FilterSet = vec![
            AttributeFilter::distance(Comparator::Le, 1.0),
            AttributeFilter::new(Attribute::Distance, Comparator::Eq, true),
        ]
        .into();

        assert!(filters.select(&records).is_err());
        assert!(filters.evaluate(&records[0]).is_err());
    }

    #[test]
    fn test_select_is_lazy() {
        let records = fixtures();
        let mut pulled = 0;
        let source = records.iter().inspect(|_| pulled += 1);
        let filters = create_filters(&Criteria {
            hazardous: Some(true),
            ..Criteria::default()
        });

        let first = filters.select(source).unwrap().next().unwrap();

        assert_eq!(first.designation.as_str(), "A");
        assert_eq!(pulled, 1);
    }

    #[test]
    fn test_filters_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AttributeFilter>();
        assert_send_sync::<FilterSet>();
    }

    #[test]
    fn test_identical_criteria_build_identical_sets() {
        let criteria = Criteria {
            start_date: NaiveDate::from_ymd_opt(2021, 1, 1),
            velocity_max: Some(12.0),
            ..Criteria::default()
        };
        assert_eq!(create_filters(&criteria), create_filters(&criteria));
    }

    #[test]
    fn test_display_joins_with_and() {
        let filters = create_filters(&Criteria {
            velocity_min: Some(5.0),
            diameter_max: Some(2.5),
            ..Criteria::default()
        });
        assert_eq!(filters.to_string(), "velocity >= 5 AND diameter <= 2.5");
    }
}
