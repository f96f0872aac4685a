//! In-memory store of NEOs and their close approaches.
//!
//! [`NeoDatabase`] owns both collections, links every approach to its NEO
//! once at construction, and answers lookups and filtered queries. Query
//! evaluation itself lives in [`crate::filters`]; the store only supplies
//! the records through the [`ApproachSource`] trait.

use crate::domain::{CloseApproach, Designation, NearEarthObject};
use crate::filters::{FilterError, FilterSet, Matches};
use std::collections::HashMap;
use std::sync::Arc;

/// Anything that can hand out close approaches in a stable order.
///
/// The query engine only needs this, so alternative stores (a test fixture,
/// a pre-filtered slice) can be queried the same way as [`NeoDatabase`].
pub trait ApproachSource {
    /// All approaches, in data order.
    fn approaches(&self) -> &[CloseApproach];

    /// Lazily yield the approaches accepted by every filter in `filters`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnsupportedCriterion`] before yielding anything
    /// if a filter is invalid.
    fn query<'a>(
        &'a self,
        filters: &'a FilterSet,
    ) -> Result<Matches<'a, std::slice::Iter<'a, CloseApproach>>, FilterError> {
        tracing::debug!(filters = %filters, "Starting query");
        filters.select(self.approaches())
    }
}

impl ApproachSource for [CloseApproach] {
    fn approaches(&self) -> &[CloseApproach] {
        self
    }
}

impl ApproachSource for Vec<CloseApproach> {
    fn approaches(&self) -> &[CloseApproach] {
        self
    }
}

/// Linked collection of NEOs and close approaches.
#[derive(Debug, Clone, Default)]
pub struct NeoDatabase {
    neos: Vec<Arc<NearEarthObject>>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<Designation, usize>,
    by_name: HashMap<String, usize>,
    /// NEO index -> indices into `approaches`, in data order
    approaches_by_neo: Vec<Vec<usize>>,
}

impl NeoDatabase {
    /// Build the database and link approaches to NEOs by designation.
    ///
    /// When two NEOs share a designation the first one is kept in the
    /// lookup index. Approaches whose designation matches no NEO stay
    /// unlinked; their diameter and hazard flag are unknown.
    pub fn new(neos: Vec<NearEarthObject>, approaches: Vec<CloseApproach>) -> Self {
        let neos: Vec<Arc<NearEarthObject>> = neos.into_iter().map(Arc::new).collect();

        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        for (index, neo) in neos.iter().enumerate() {
            if by_designation.contains_key(&neo.designation) {
                tracing::debug!(designation = %neo.designation, "Duplicate designation ignored in index");
                continue;
            }
            by_designation.insert(neo.designation.clone(), index);
            if let Some(name) = &neo.name {
                by_name.entry(name.clone()).or_insert(index);
            }
        }

        let mut approaches_by_neo = vec![Vec::new(); neos.len()];
        let mut unlinked = 0usize;
        let approaches: Vec<CloseApproach> = approaches
            .into_iter()
            .enumerate()
            .map(|(position, approach)| match by_designation.get(&approach.designation) {
                Some(&index) => {
                    approaches_by_neo[index].push(position);
                    approach.with_neo(Arc::clone(&neos[index]))
                }
                None => {
                    unlinked += 1;
                    approach
                }
            })
            .collect();

        tracing::info!(
            neos = neos.len(),
            approaches = approaches.len(),
            unlinked,
            "Linked close approaches to NEOs"
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
            approaches_by_neo,
        }
    }

    /// All NEOs, in data order.
    pub fn neos(&self) -> &[Arc<NearEarthObject>] {
        &self.neos
    }

    /// Find a NEO by its primary designation. Matching is exact.
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&Arc<NearEarthObject>> {
        self.by_designation
            .get(&Designation::from(designation))
            .map(|&index| &self.neos[index])
    }

    /// Find a NEO by its IAU name. Matching is exact; unnamed NEOs are never
    /// found, not even by an empty string.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&Arc<NearEarthObject>> {
        self.by_name.get(name).map(|&index| &self.neos[index])
    }

    /// The close approaches of one NEO, in data order.
    pub fn approaches_for<'a>(
        &'a self,
        neo: &NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        let positions: &[usize] = self
            .by_designation
            .get(&neo.designation)
            .map_or(&[][..], |&index| self.approaches_by_neo[index].as_slice());
        positions.iter().map(move |&position| &self.approaches[position])
    }
}

impl ApproachSource for NeoDatabase {
    fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }
}
