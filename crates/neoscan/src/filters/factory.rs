//! Building a [`FilterSet`] from user criteria.

use super::{AttributeFilter, Comparator, FilterSet};
use chrono::NaiveDate;

/// Sparse query criteria.
///
/// Every field is optional and `None` means "not specified". In particular
/// `hazardous: Some(false)` asks for non-hazardous objects, while
/// `hazardous: None` places no constraint on the hazard flag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Criteria {
    /// Approach happened on exactly this date
    pub date: Option<NaiveDate>,

    /// Approach happened on or after this date
    pub start_date: Option<NaiveDate>,

    /// Approach happened on or before this date
    pub end_date: Option<NaiveDate>,

    /// Minimum nominal approach distance (au)
    pub distance_min: Option<f64>,

    /// Maximum nominal approach distance (au)
    pub distance_max: Option<f64>,

    /// Minimum relative approach velocity (km/s)
    pub velocity_min: Option<f64>,

    /// Maximum relative approach velocity (km/s)
    pub velocity_max: Option<f64>,

    /// Minimum NEO diameter (km)
    pub diameter_min: Option<f64>,

    /// Maximum NEO diameter (km)
    pub diameter_max: Option<f64>,

    /// Required hazard flag of the NEO
    pub hazardous: Option<bool>,
}

impl Criteria {
    /// Returns `true` if no criterion is specified.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Create one filter per specified criterion.
///
/// Exact values compare with `==`, `_min` and `start_date` with `>=`, `_max`
/// and `end_date` with `<=`. The output order follows the field order of
/// [`Criteria`]. Contradictory bounds are accepted as-is and simply match
/// nothing.
pub fn create_filters(criteria: &Criteria) -> FilterSet {
    let Criteria {
        date,
        start_date,
        end_date,
        distance_min,
        distance_max,
        velocity_min,
        velocity_max,
        diameter_min,
        diameter_max,
        hazardous,
    } = *criteria;

    let filters = [
        date.map(|d| AttributeFilter::date(Comparator::Eq, d)),
        start_date.map(|d| AttributeFilter::date(Comparator::Ge, d)),
        end_date.map(|d| AttributeFilter::date(Comparator::Le, d)),
        distance_min.map(|x| AttributeFilter::distance(Comparator::Ge, x)),
        distance_max.map(|x| AttributeFilter::distance(Comparator::Le, x)),
        velocity_min.map(|x| AttributeFilter::velocity(Comparator::Ge, x)),
        velocity_max.map(|x| AttributeFilter::velocity(Comparator::Le, x)),
        diameter_min.map(|x| AttributeFilter::diameter(Comparator::Ge, x)),
        diameter_max.map(|x| AttributeFilter::diameter(Comparator::Le, x)),
        hazardous.map(|h| AttributeFilter::hazardous(Comparator::Eq, h)),
    ];

    let set: FilterSet = filters.into_iter().flatten().collect();
    tracing::debug!(count = set.len(), filters = %set, "Created filters");
    set
}
