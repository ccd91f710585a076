//! Observation-dimension selection and resolution.
//!
//! Multi-axis containers need to know which axis enumerates observations.
//! [`ObsDim`] is that choice, supplied per call and never stored by this
//! crate. [`ObsDim::resolve`] maps the choice to a concrete axis for a given
//! rank; the default (no explicit choice) is the **last** axis for rank ≥ 2
//! and the whole value for rank ≤ 1.
//!
//! The default is a deliberate convention, not a property inferred from the
//! data: a 2×5 table holds 5 observations of 2 features each, not the other
//! way around.

use std::str::FromStr;

use crate::error::ObsError;

/// Which axis of a container enumerates observations.
///
/// A per-call parameter. The same container may be queried with different
/// dimensions in different calls, though consumers are expected to use one
/// consistent dimension per logical dataset.
///
/// Axis numbers are 1-based, like observation indices: `Axis(1)` is the
/// first axis.
///
/// # Shorthands
///
/// Integers and symbolic names normalize to the same enum at the API
/// boundary; resolution logic only ever sees `ObsDim`:
///
/// ```
/// use obskit::ObsDim;
///
/// assert_eq!(ObsDim::from(2), ObsDim::Axis(2));
/// assert_eq!("first".parse::<ObsDim>().unwrap(), ObsDim::First);
/// assert_eq!("2".parse::<ObsDim>().unwrap(), ObsDim::Axis(2));
/// assert_eq!(ObsDim::default(), ObsDim::Unspecified);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObsDim {
    /// No explicit choice; the default-resolution rule applies.
    #[default]
    Unspecified,
    /// The first axis.
    First,
    /// The last axis.
    Last,
    /// A fixed axis, 1-based.
    Axis(usize),
}

impl ObsDim {
    /// Resolve to a 0-based axis of a rank-`ndim` container.
    ///
    /// Rank-0 containers have no axis to enumerate, and an explicit
    /// [`ObsDim::Axis`] beyond the container's rank names an axis that does
    /// not exist; both fail with [`ObsError::InvalidDimension`].
    ///
    /// For rank ≤ 1 every applicable variant resolves to axis 0 (the whole
    /// value). For rank ≥ 2, `Unspecified` resolves to the last axis.
    pub fn resolve(self, ndim: usize) -> Result<usize, ObsError> {
        if ndim == 0 {
            let axis = match self {
                ObsDim::Axis(k) => k,
                _ => 1,
            };
            return Err(ObsError::InvalidDimension { axis, ndim });
        }
        match self {
            ObsDim::Axis(0) => Err(ObsError::InvalidDimension { axis: 0, ndim }),
            ObsDim::Axis(k) if k > ndim => Err(ObsError::InvalidDimension { axis: k, ndim }),
            ObsDim::Axis(k) => Ok(k - 1),
            ObsDim::First => Ok(0),
            ObsDim::Last | ObsDim::Unspecified => Ok(ndim - 1),
        }
    }
}

impl From<usize> for ObsDim {
    /// Integer shorthand: `2` means [`ObsDim::Axis`]`(2)`.
    fn from(axis: usize) -> Self {
        ObsDim::Axis(axis)
    }
}

/// Error returned when parsing an [`ObsDim`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized observation dimension `{0}`")]
pub struct ParseObsDimError(String);

impl FromStr for ObsDim {
    type Err = ParseObsDimError;

    /// Symbolic shorthand: `"first"`, `"last"`, `"unspecified"`, or an axis
    /// number. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(ObsDim::First),
            "last" => Ok(ObsDim::Last),
            "unspecified" => Ok(ObsDim::Unspecified),
            other => other
                .parse::<usize>()
                .map(ObsDim::Axis)
                .map_err(|_| ParseObsDimError(s.to_string())),
        }
    }
}
