use thiserror::Error;

/// Errors raised by the hull operations.
///
/// Both variants indicate misuse by the caller, not transient conditions.
/// Degenerate geometry (too few unique points, collinear input) is reported
/// through an empty result, never through an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    /// A supplied shape has no planar boundary (e.g. a solid).
    #[error("hull operations accept only planar (2D) forms")]
    InvalidInputKind,

    /// Chain hull needs at least two shapes to form a pair.
    #[error("chain hull requires at least 2 shapes, got {0}")]
    InsufficientInput(usize),
}
