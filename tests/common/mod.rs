#![allow(dead_code)]

use hull2d::geometry::geo_traits::KernelShape;
use hull2d::geometry::primitives::{Edge, Point};

/// Minimal stand-in for the external CSG kernel: a polygon is its ordered
/// boundary, a union just records its parts and a solid has no planar
/// boundary at all.
#[derive(Debug, Clone, PartialEq)]
pub enum MockShape {
    Polygon(Vec<Point>),
    Union(Vec<MockShape>),
    Solid,
}

impl MockShape {
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        MockShape::Polygon(points.iter().map(|&p| Point::from(p)).collect())
    }

    /// Regular n-gon approximating a circle, first vertex at angle 0
    pub fn circle(center: (f64, f64), radius: f64, n_vertices: usize) -> Self {
        let points = (0..n_vertices)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / n_vertices as f64;
                Point(
                    center.0 + radius * angle.cos(),
                    center.1 + radius * angle.sin(),
                )
            })
            .collect();
        MockShape::Polygon(points)
    }

    /// Axis-aligned unit-square-like rectangle with its lower-left corner at `(x, y)`
    pub fn square(x: f64, y: f64, size: f64) -> Self {
        MockShape::polygon(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
    }

    pub fn vertices(&self) -> &[Point] {
        match self {
            MockShape::Polygon(points) => points,
            _ => panic!("not a polygon"),
        }
    }

    pub fn union_parts(&self) -> &[MockShape] {
        match self {
            MockShape::Union(parts) => parts,
            _ => panic!("not a union"),
        }
    }
}

impl KernelShape for MockShape {
    fn boundary_edges(&self) -> Option<Vec<Edge>> {
        match self {
            MockShape::Polygon(points) => Some(
                (0..points.len())
                    .map(|i| Edge::new(points[i], points[(i + 1) % points.len()]))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn from_boundary(points: Vec<Point>) -> Self {
        MockShape::Polygon(points)
    }

    fn union(parts: Vec<Self>) -> Self {
        MockShape::Union(parts)
    }
}

/// Shoelace formula, positive for counterclockwise boundaries
pub fn signed_area(points: &[Point]) -> f64 {
    let mut sigma = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sigma += (points[i].1 + points[j].1) * (points[i].0 - points[j].0);
    }
    0.5 * sigma
}
