use crate::geometry::convex_hull::{COLLINEARITY_EPSILON, cross};
use crate::geometry::primitives::Point;
use log::error;

//Various checks to verify the correctness of computed hulls
//Used in debug_assert!() blocks

/// Checks that `hull` never bends clockwise, wrap-around triples included.
pub fn polygon_is_convex(hull: &[Point]) -> bool {
    if hull.len() < 3 {
        error!("hull with {} vertices cannot be convex", hull.len());
        return false;
    }
    for i in 0..hull.len() {
        let a = &hull[i];
        let b = &hull[(i + 1) % hull.len()];
        let c = &hull[(i + 2) % hull.len()];
        if cross(a, b, c) < -COLLINEARITY_EPSILON {
            error!("hull bends clockwise at {b:?}");
            return false;
        }
    }
    true
}

/// Checks that every point of `pool` lies inside or on the boundary of the
/// counterclockwise polygon `hull`, within the scan's collinearity tolerance.
pub fn hull_contains_points(hull: &[Point], pool: &[Point]) -> bool {
    pool.iter().all(|p| {
        let inside = (0..hull.len()).all(|i| {
            let a = &hull[i];
            let b = &hull[(i + 1) % hull.len()];
            cross(a, b, p) >= -COLLINEARITY_EPSILON
        });
        if !inside {
            error!("point {p:?} lies outside the computed hull");
        }
        inside
    })
}
