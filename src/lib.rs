//! obskit: uniform indexed access to heterogeneous observation containers.
//!
//! Batching, shuffling, and splitting layers all need the same two things
//! from a data source: how many observations it holds, and the observations
//! at a given set of indices. This crate defines that contract once —
//! [`ObsContainer`] — and lets in-memory arrays, custom out-of-core sources,
//! and linked groups of several sources satisfy it uniformly, so downstream
//! code never depends on concrete storage types.
//!
//! # Key Types
//!
//! - [`ObsContainer`] / [`LabeledContainer`] - The capability contract
//! - [`ObsDim`] - Per-call choice of the observation axis
//! - [`Subset`] - Lazy index view over any container
//! - [`ContainerRegistry`] - Type-erased dispatch for runtime-typed sources
//! - [`ObsError`] - Everything that can go wrong, never masked
//!
//! # Conventions
//!
//! Observation indices are **1-based** (`1..=n_obs`), as are explicit axis
//! numbers. With no explicit dimension the **last** axis of a multi-axis
//! container enumerates observations; rank-1 values are their own
//! observation axis.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use obskit::{fetch, n_obs, ObsDim};
//!
//! let table = array![
//!     [0.17, 0.20, 0.62, 0.07, 0.45],
//!     [0.20, 0.28, 0.10, 0.94, 0.58],
//! ];
//!
//! // 5 observations of 2 features each.
//! assert_eq!(n_obs(&table, ObsDim::Unspecified)?, 5);
//! assert_eq!(n_obs(&table, ObsDim::First)?, 2);
//!
//! // Observation 2 is the second column.
//! assert_eq!(fetch(&table, &[2], ObsDim::Unspecified)?, array![[0.20], [0.28]]);
//!
//! // Linking features with targets keeps them index-synchronized.
//! let targets = vec![0, 1, 1, 0, 1];
//! let (x, y) = fetch(&(table, targets), &[5, 2], ObsDim::Unspecified)?;
//! assert_eq!(x, array![[0.45, 0.20], [0.58, 0.28]]);
//! assert_eq!(y, vec![1, 1]);
//! # Ok::<(), obskit::ObsError>(())
//! ```

// Re-export approx traits for users who want to compare fetched results
pub use approx;

pub mod container;
pub mod dim;
pub mod error;
pub mod registry;
pub mod subset;

mod access;
mod composite;

// Contract traits
pub use container::{LabeledContainer, ObsContainer};

// Dimension selection
pub use dim::{ObsDim, ParseObsDimError};

// Errors
pub use error::ObsError;

// Views and erased dispatch
pub use registry::{AnyValue, ContainerRegistry};
pub use subset::Subset;

// Free-function surface (accepts ObsDim shorthands)
pub use access::{fetch, fetch_all, fetch_into, fetch_targets, n_obs, subset};
