mod chain_hull;
mod hull;

#[doc(inline)]
pub use chain_hull::ChainHullConfig;
#[doc(inline)]
pub use chain_hull::chain_hull;
#[doc(inline)]
pub use hull::hull;
