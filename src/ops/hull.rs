use std::collections::HashSet;

use itertools::Itertools;
use log::debug;

use crate::error::HullError;
use crate::geometry::convex_hull::convex_hull_indices;
use crate::geometry::geo_traits::KernelShape;
use crate::geometry::primitives::Point;
use crate::util::assertions;

/// Computes the convex hull of the given shapes as a single new planar shape.
///
/// All boundary vertices are pooled (exact duplicates skipped) before the
/// hull is computed, so the result is independent of the order of `shapes`.
/// Returns `Ok(None)` when fewer than 3 unique points are available, or when
/// the scan collapses the input as (near-)collinear.
pub fn hull<S: KernelShape>(shapes: &[S]) -> Result<Option<S>, HullError> {
    hull_of(shapes)
}

/// [`hull`] over any iterable of shape references, shared with the chain
/// hull pair loop.
pub(crate) fn hull_of<'a, S: KernelShape + 'a>(
    shapes: impl IntoIterator<Item = &'a S>,
) -> Result<Option<S>, HullError> {
    let pool = pool_boundary_points(shapes)?;
    let indices = convex_hull_indices(&pool);
    if indices.len() < 3 {
        debug!(
            "no hull producible: {} unique points -> {} hull vertices",
            pool.len(),
            indices.len()
        );
        return Ok(None);
    }
    let hull_points = indices.iter().map(|&i| pool[i]).collect_vec();

    debug_assert!(assertions::polygon_is_convex(&hull_points));
    debug_assert!(assertions::hull_contains_points(&hull_points, &pool));

    Ok(Some(S::from_boundary(hull_points)))
}

/// Pools the boundary vertices of all `shapes` into a flat point array,
/// skipping any point already present (exact coordinate equality, no
/// tolerance). Insertion order is preserved.
pub(crate) fn pool_boundary_points<'a, S: KernelShape + 'a>(
    shapes: impl IntoIterator<Item = &'a S>,
) -> Result<Vec<Point>, HullError> {
    let mut seen: HashSet<Point> = HashSet::new();
    let mut pool = vec![];
    for shape in shapes {
        let edges = shape.boundary_edges().ok_or(HullError::InvalidInputKind)?;
        for edge in edges {
            if seen.insert(edge.start) {
                pool.push(edge.start);
            }
        }
    }
    Ok(pool)
}
