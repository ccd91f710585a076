//! `ObsContainer` conformance for `ndarray` arrays.
//!
//! Any rectangular, multi-axis array conforms out of the box: the resolver
//! picks the observation axis, `fetch` selects along it, and the remaining
//! axes become per-observation feature dimensions. Fetched observations keep
//! the observation axis with length `|indices|`, so a column fetched from a
//! 2×5 table comes back as a 2×1 array.

use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis};

use crate::container::{to_zero_based, ObsContainer};
use crate::dim::ObsDim;
use crate::error::ObsError;

impl<A, S, D> ObsContainer for ArrayBase<S, D>
where
    A: Clone,
    S: Data<Elem = A>,
    D: RemoveAxis,
{
    type Obs = Array<A, D>;

    fn n_obs(&self, dim: ObsDim) -> Result<usize, ObsError> {
        let axis = dim.resolve(self.ndim())?;
        Ok(self.len_of(Axis(axis)))
    }

    fn fetch(&self, indices: &[usize], dim: ObsDim) -> Result<Self::Obs, ObsError> {
        let axis = dim.resolve(self.ndim())?;
        let picked = to_zero_based(indices, self.len_of(Axis(axis)))?;
        Ok(self.select(Axis(axis), &picked))
    }

    fn fetch_all(&self) -> Result<Self::Obs, ObsError> {
        // Bulk access is the identity on the stored data.
        Ok(self.to_owned())
    }

    fn fetch_into(
        &self,
        buf: &mut Self::Obs,
        indices: &[usize],
        dim: ObsDim,
    ) -> Result<(), ObsError> {
        let axis = dim.resolve(self.ndim())?;
        let picked = to_zero_based(indices, self.len_of(Axis(axis)))?;

        let mut expected = self.shape().to_vec();
        expected[axis] = indices.len();
        if buf.shape() != expected.as_slice() {
            return Err(ObsError::ShapeMismatch {
                expected,
                got: buf.shape().to_vec(),
            });
        }

        for (slot, &src) in picked.iter().enumerate() {
            buf.index_axis_mut(Axis(axis), slot)
                .assign(&self.index_axis(Axis(axis), src));
        }
        Ok(())
    }
}
