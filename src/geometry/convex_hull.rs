use std::f64::consts::PI;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::geometry::primitives::Point;

/// Cross products below this threshold count as "no turn" during the scan.
///
/// This is a termination guard: without it, exactly-collinear point sets can
/// cycle between popping and re-pushing indefinitely. The flip side is that
/// convex turns shallower than the threshold are collapsed into a single
/// hull edge.
pub const COLLINEARITY_EPSILON: f64 = 1e-5;

/// Entry of the angular sort: a point index with its polar angle and squared
/// distance relative to the pivot.
#[derive(Debug, Clone, Copy)]
struct HullCandidate {
    index: usize,
    angle: f64,
    sq_distance: f64,
}

impl HullCandidate {
    fn new(index: usize, pivot: &Point, point: &Point) -> Self {
        let mut angle = (point.1 - pivot.1).atan2(point.0 - pivot.0);
        if angle < 0.0 {
            //the sweep only covers a half-turn once anchored at the lowest point
            angle += PI;
        }
        HullCandidate {
            index,
            angle,
            sq_distance: pivot.sq_distance(point),
        }
    }
}

/// Returns the indices of the points that form the convex hull of `points`,
/// in counterclockwise order starting from the pivot (lowest point).
///
/// Fewer than 3 input points yield an empty result. Input that collapses
/// under [`COLLINEARITY_EPSILON`] (e.g. all points collinear) can yield fewer
/// than 3 indices; callers must treat such results as "no hull producible".
pub fn convex_hull_indices(points: &[Point]) -> Vec<usize> {
    //https://en.wikipedia.org/wiki/Graham_scan
    if points.len() < 3 {
        return vec![];
    }

    //lowest point, ties broken towards lowest x; guaranteed to lie on the hull
    let pivot = points
        .iter()
        .position_min_by_key(|p| (OrderedFloat(p.1), OrderedFloat(p.0)))
        .unwrap();

    let mut candidates = points
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != pivot)
        .map(|(i, p)| HullCandidate::new(i, &points[pivot], p))
        .collect_vec();

    //stable sort: equal-angle points stay ordered nearest-first, so the scan
    //discards interior collinear points
    candidates.sort_by_key(|c| (OrderedFloat(c.angle), OrderedFloat(c.sq_distance)));

    //the highest-angle candidate is itself a hull vertex; seeding it below
    //the pivot lets the scan wrap around without running off the stack
    let sentinel = candidates.last().unwrap().index;
    let mut stack = vec![sentinel, pivot, candidates[0].index];

    for candidate in &candidates[1..] {
        while stack.len() >= 2
            && !is_ccw_turn(
                &points[stack[stack.len() - 2]],
                &points[stack[stack.len() - 1]],
                &points[candidate.index],
            )
        {
            stack.pop();
        }
        stack.push(candidate.index);
    }

    //drop the sentinel slot, the hull starts at the pivot
    stack.remove(0);
    stack
}

/// Whether the path a -> b -> c bends counterclockwise. Any cross product
/// below [`COLLINEARITY_EPSILON`] is treated as "not a turn", rejecting both
/// clockwise bends and near-collinear triples.
fn is_ccw_turn(a: &Point, b: &Point, c: &Point) -> bool {
    cross(a, b, c) >= COLLINEARITY_EPSILON
}

pub(crate) fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}
