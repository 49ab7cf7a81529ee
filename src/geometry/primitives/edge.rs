use crate::geometry::primitives::Point;

/// Line segment between two [`Point`]s, as handed out by the kernel's
/// boundary walk. The hull operations only ever read [`Edge::start`].
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Edge { start, end }
    }
}
