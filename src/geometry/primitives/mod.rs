mod edge;
mod point;

#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use point::Point;
