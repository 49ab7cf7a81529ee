use serde::{Deserialize, Serialize};

use crate::error::HullError;
use crate::geometry::geo_traits::KernelShape;
use crate::ops::hull::hull_of;

/// Configuration of [`chain_hull`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ChainHullConfig {
    ///Whether the last shape also hulls back to the first, closing the chain
    pub closed: bool,
}

/// Computes a "chain hull" across an ordered sequence of planar shapes:
/// hull(shape[0], shape[1]), hull(shape[1], shape[2]), ... unioned into one
/// shape, blending a sequence of cross-sections into a single solid.
/// With `closed` set, the last shape also pairs back up with the first.
///
/// Pairs whose hull is degenerate are skipped; `Ok(None)` is returned when
/// no pair produces a hull.
pub fn chain_hull<S: KernelShape>(
    shapes: &[S],
    config: ChainHullConfig,
) -> Result<Option<S>, HullError> {
    if shapes.len() < 2 {
        return Err(HullError::InsufficientInput(shapes.len()));
    }

    let n_pairs = match config.closed {
        true => shapes.len(),
        false => shapes.len() - 1,
    };

    let mut parts = Vec::with_capacity(n_pairs);
    for i in 0..n_pairs {
        let pair = [&shapes[i], &shapes[(i + 1) % shapes.len()]];
        if let Some(h) = hull_of(pair)? {
            parts.push(h);
        }
    }

    match parts.is_empty() {
        true => Ok(None),
        false => Ok(Some(S::union(parts))),
    }
}
