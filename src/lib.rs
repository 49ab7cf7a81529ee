//! 2D convex hull construction and "chain hull" composition over the shapes
//! of an external CSG geometry kernel.
//!
//! The kernel stays in charge of building, transforming and booleaning
//! shapes. This crate only reads planar boundaries, computes hulls and hands
//! the results back through [`KernelShape`](geometry::geo_traits::KernelShape).

/// Geometric primitives and the convex hull solver
pub mod geometry;

/// The public hull operations
pub mod ops;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::HullError;
