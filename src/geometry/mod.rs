/// Set of functions to compute [convex hulls](https://en.wikipedia.org/wiki/Convex_hull)
pub mod convex_hull;

/// Traits representing the capabilities consumed from the external geometry kernel
pub mod geo_traits;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;
