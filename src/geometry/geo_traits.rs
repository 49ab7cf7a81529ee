use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;

/// Trait for the shape type of an external CSG kernel.
///
/// The hull operations consume exactly three capabilities from the kernel:
/// reading the ordered boundary of a planar form, building a planar form
/// from an ordered point list and an n-ary boolean union.
pub trait KernelShape: Sized {
    /// The ordered boundary edges of the shape, or `None` if the shape is
    /// not a planar form (e.g. a solid).
    fn boundary_edges(&self) -> Option<Vec<Edge>>;

    /// Builds a closed planar shape from an ordered list of boundary points.
    /// Callers guarantee a valid boundary: non-self-intersecting and
    /// consistently wound.
    fn from_boundary(points: Vec<Point>) -> Self;

    /// Boolean union of the given shapes. Must be associative and
    /// deduplicate coincident boundary geometry; never called with an empty
    /// vector.
    fn union(parts: Vec<Self>) -> Self;
}
