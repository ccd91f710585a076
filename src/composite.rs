//! Linked groups of containers.
//!
//! An ordered tuple of containers behaves as a single container: its
//! observation count is the common count of its elements, and a fetch fans
//! the identical index set out to every element, returning a tuple of
//! per-element results in the same order. Groups nest — a tuple element may
//! itself be a tuple — and the consistency check recurses with them.
//!
//! The count check runs on every operation, so a group whose elements drift
//! apart fails with [`ObsError::InconsistentLength`] instead of silently
//! returning misaligned results. Any element failure aborts the whole group
//! operation.
//!
//! # Per-element dimension policy
//!
//! The group's `dim` is applied to every element for which it resolves. An
//! element whose rank makes the dim inapplicable (for example `Axis(2)`
//! against a rank-1 target vector) falls back to `Unspecified` for that
//! element only. Direct, non-group calls still fail loudly on an invalid
//! axis.

use log::trace;

use crate::container::{LabeledContainer, ObsContainer};
use crate::dim::ObsDim;
use crate::error::ObsError;

/// Count with the group fallback: a dim that does not resolve for this
/// element is ignored for it.
fn elem_n_obs<C: ObsContainer>(elem: &C, dim: ObsDim) -> Result<usize, ObsError> {
    match elem.n_obs(dim) {
        Err(ObsError::InvalidDimension { .. }) if dim != ObsDim::Unspecified => {
            trace!("group dim {dim:?} inapplicable to element, using Unspecified");
            elem.n_obs(ObsDim::Unspecified)
        }
        other => other,
    }
}

fn elem_fetch<C: ObsContainer>(
    elem: &C,
    indices: &[usize],
    dim: ObsDim,
) -> Result<C::Obs, ObsError> {
    match elem.fetch(indices, dim) {
        Err(ObsError::InvalidDimension { .. }) if dim != ObsDim::Unspecified => {
            elem.fetch(indices, ObsDim::Unspecified)
        }
        other => other,
    }
}

fn elem_fetch_into<C: ObsContainer>(
    elem: &C,
    buf: &mut C::Obs,
    indices: &[usize],
    dim: ObsDim,
) -> Result<(), ObsError> {
    match elem.fetch_into(buf, indices, dim) {
        Err(ObsError::InvalidDimension { .. }) if dim != ObsDim::Unspecified => {
            elem.fetch_into(buf, indices, ObsDim::Unspecified)
        }
        other => other,
    }
}

macro_rules! impl_linked_tuple {
    ($($C:ident => $i:tt),+ ; last: $Last:ident => $last:tt) => {
        impl<$($C: ObsContainer),+> ObsContainer for ($($C,)+) {
            type Obs = ($($C::Obs,)+);

            fn n_obs(&self, dim: ObsDim) -> Result<usize, ObsError> {
                let counts = [$(elem_n_obs(&self.$i, dim)?),+];
                if counts.windows(2).any(|pair| pair[0] != pair[1]) {
                    return Err(ObsError::InconsistentLength {
                        counts: counts.to_vec(),
                    });
                }
                Ok(counts[0])
            }

            fn fetch(&self, indices: &[usize], dim: ObsDim) -> Result<Self::Obs, ObsError> {
                // A misaligned group must never fetch.
                self.n_obs(dim)?;
                Ok(($(elem_fetch(&self.$i, indices, dim)?,)+))
            }

            fn fetch_all(&self) -> Result<Self::Obs, ObsError> {
                self.n_obs(ObsDim::Unspecified)?;
                Ok(($(self.$i.fetch_all()?,)+))
            }

            fn fetch_into(
                &self,
                buf: &mut Self::Obs,
                indices: &[usize],
                dim: ObsDim,
            ) -> Result<(), ObsError> {
                self.n_obs(dim)?;
                $(elem_fetch_into(&self.$i, &mut buf.$i, indices, dim)?;)+
                Ok(())
            }
        }

        impl<$($C: ObsContainer),+> LabeledContainer for ($($C,)+) {
            type Targets = <$Last as ObsContainer>::Obs;

            fn fetch_targets(
                &self,
                indices: &[usize],
                dim: ObsDim,
            ) -> Result<Self::Targets, ObsError> {
                self.n_obs(dim)?;
                elem_fetch(&self.$last, indices, dim)
            }
        }
    };
}

impl_linked_tuple!(C0 => 0, C1 => 1; last: C1 => 1);
impl_linked_tuple!(C0 => 0, C1 => 1, C2 => 2; last: C2 => 2);
impl_linked_tuple!(C0 => 0, C1 => 1, C2 => 2, C3 => 3; last: C3 => 3);
