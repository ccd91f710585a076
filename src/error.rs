//! Crate-wide error type.
//!
//! Every fallible operation in this crate reports one of the variants below
//! synchronously at the call that triggers it. There is no retry logic and no
//! partial-result recovery: a failed fetch on one element of a linked group
//! aborts the whole group fetch, and out-of-range indices are never clamped.

/// Errors surfaced by container operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObsError {
    /// A value was used as a container but is not known to satisfy the
    /// `n_obs`/`fetch` contract. Only reachable through the type-erased
    /// dispatch path; statically typed calls are checked at compile time.
    #[error("type `{type_name}` does not satisfy the container contract")]
    UnsupportedContainer { type_name: String },

    /// An observation index fell outside `1..=len`. Index 0 is always out of
    /// range: observation indices are 1-based.
    #[error("observation index {index} out of range 1..={len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An explicit dimension named an axis the container does not have.
    #[error("axis {axis} does not exist on a rank-{ndim} container")]
    InvalidDimension { axis: usize, ndim: usize },

    /// The elements of a linked group disagree on observation count.
    /// `counts` lists every element's count in group order.
    #[error("linked containers disagree on observation count: {counts:?}")]
    InconsistentLength { counts: Vec<usize> },

    /// A `fetch_into` buffer's shape is incompatible with the shape `fetch`
    /// would have produced for the same index set.
    #[error("buffer shape {got:?} does not match expected shape {expected:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
}
