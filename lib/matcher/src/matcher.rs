//! Brute-force nearest-neighbor scan under Euclidean distance

use crate::config::TieBreak;
use exomatch_core::{Error, FeatureVector, Result};
use tracing::{debug, trace};

/// Closest candidate found by [`nearest`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub distance: f64,
    pub index: usize,
    pub candidate: &'a FeatureVector,
}

/// Scan every candidate in order and keep the closest one
///
/// With [`TieBreak::Last`] a candidate at a distance equal to the current
/// best replaces it, so the highest index among equidistant candidates is
/// returned. With [`TieBreak::First`] the lowest index is kept.
///
/// Fails with `EmptyInput` for an empty slice, `DimensionMismatch` for a
/// candidate whose length differs from the query, and `NonFinite` if a
/// distance is NaN.
pub fn nearest<'a>(
    query: &FeatureVector,
    candidates: &'a [FeatureVector],
    tie_break: TieBreak,
) -> Result<Nearest<'a>> {
    let (first, rest) = candidates.split_first().ok_or(Error::EmptyInput)?;

    let mut best = Nearest {
        distance: distance_at(query, first, 0)?,
        index: 0,
        candidate: first,
    };

    for (offset, candidate) in rest.iter().enumerate() {
        let index = offset + 1;
        let distance = distance_at(query, candidate, index)?;
        if tie_break.replaces(distance, best.distance) {
            trace!(index, distance, "new nearest candidate");
            best = Nearest {
                distance,
                index,
                candidate,
            };
        }
    }

    debug!(
        candidates = candidates.len(),
        index = best.index,
        distance = best.distance,
        "nearest-neighbor scan complete"
    );
    Ok(best)
}

fn distance_at(query: &FeatureVector, candidate: &FeatureVector, index: usize) -> Result<f64> {
    let distance = query.euclidean_distance(candidate)?;
    if distance.is_nan() {
        return Err(Error::NonFinite { index });
    }
    Ok(distance)
}
