use crate::constants::NEARBY_SEARCH_MAX_RESULTS;
use crate::error::Result;
use crate::models::{CandidatePlace, Coordinates};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Source of places around a search center.
#[async_trait]
pub trait NearbySearch: Send + Sync {
    async fn search_nearby(
        &self,
        center: &Coordinates,
        radius_m: f64,
        max_results: u32,
    ) -> Result<Vec<CandidatePlace>>;
}

/// Runs one nearby search per sample point and merges the results by place id.
#[derive(Clone)]
pub struct PlaceAggregator {
    search: Arc<dyn NearbySearch>,
}

impl PlaceAggregator {
    pub fn new(search: Arc<dyn NearbySearch>) -> Self {
        PlaceAggregator { search }
    }

    /// Query every sample point in order and merge the results.
    ///
    /// Lookups run one at a time. The first occurrence of a place id wins;
    /// later duplicates are dropped without merging fields. Any failed lookup
    /// aborts the whole collection.
    pub async fn collect(
        &self,
        samples: &[Coordinates],
        radius_km: f64,
    ) -> Result<Vec<CandidatePlace>> {
        let radius_m = radius_km * 1000.0;
        let mut merged = CandidateSet::default();

        for (idx, center) in samples.iter().enumerate() {
            let places = self
                .search
                .search_nearby(center, radius_m, NEARBY_SEARCH_MAX_RESULTS)
                .await
                .map_err(|e| {
                    tracing::warn!(
                        sample = idx,
                        lat = center.lat,
                        lng = center.lng,
                        "Nearby search failed at sample {}: {}",
                        idx, e
                    );
                    e
                })?;

            let returned = places.len();
            let added = merged.extend(places);
            tracing::debug!(
                sample = idx,
                returned,
                added,
                "Sample {}: {} places returned, {} new",
                idx, returned, added
            );
        }

        tracing::debug!("Merged {} distinct places from {} samples", merged.len(), samples.len());
        Ok(merged.into_vec())
    }
}

/// Insertion-ordered set of candidates keyed by id, first-seen wins.
#[derive(Debug, Default)]
pub(crate) struct CandidateSet {
    index: HashMap<String, usize>,
    places: Vec<CandidatePlace>,
}

impl CandidateSet {
    /// Insert `place` unless its id is already present. Returns whether it was added.
    pub fn insert(&mut self, place: CandidatePlace) -> bool {
        if self.index.contains_key(&place.id) {
            return false;
        }
        self.index.insert(place.id.clone(), self.places.len());
        self.places.push(place);
        true
    }

    /// Insert every place, returning how many were new.
    pub fn extend(&mut self, places: impl IntoIterator<Item = CandidatePlace>) -> usize {
        places
            .into_iter()
            .fold(0, |added, place| added + usize::from(self.insert(place)))
    }

    #[cfg(test)]
    fn get(&self, id: &str) -> Option<&CandidatePlace> {
        self.index.get(id).map(|&i| &self.places[i])
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn into_vec(self) -> Vec<CandidatePlace> {
        self.places
    }
}
