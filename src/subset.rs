//! Lazy index views over containers.

use crate::container::{to_zero_based, LabeledContainer, ObsContainer};
use crate::dim::ObsDim;
use crate::error::ObsError;

/// A lazy view of selected observation indices into a container.
///
/// Holds the container (by value or by reference), a validated 1-based index
/// vector, and the [`ObsDim`] pinned at construction. No underlying data is
/// copied until a fetch; downstream layers permute or partition the index
/// vector and everything stays aligned.
///
/// The view renumbers observations: a `Subset` of `k` indices is itself a
/// container with observations `1..=k`, so subsets nest and compose.
/// Because the dim is applied at construction, the per-call `dim` argument
/// is ignored on the view itself.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use obskit::{ObsContainer, ObsDim};
///
/// let data = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
/// let view = data.subset(&[4, 2], ObsDim::Unspecified)?;
///
/// assert_eq!(view.n_obs(ObsDim::Unspecified)?, 2);
/// assert_eq!(view.fetch(&[1], ObsDim::Unspecified)?, array![[4.0], [8.0]]);
/// # Ok::<(), obskit::ObsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Subset<C> {
    inner: C,
    indices: Vec<usize>,
    dim: ObsDim,
}

impl<C: ObsContainer> Subset<C> {
    /// Create a view of `indices` into `inner`.
    ///
    /// Every index is validated against `inner`'s observation count here, so
    /// a bad index set is a construction-time error. Duplicates and
    /// arbitrary order are permitted.
    pub fn new(inner: C, indices: Vec<usize>, dim: ObsDim) -> Result<Self, ObsError> {
        let len = inner.n_obs(dim)?;
        for &index in &indices {
            if index == 0 || index > len {
                return Err(ObsError::IndexOutOfRange { index, len });
            }
        }
        Ok(Self { inner, indices, dim })
    }

    /// The viewed 1-based indices into the underlying container.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The observation dimension pinned at construction.
    pub fn dim(&self) -> ObsDim {
        self.dim
    }

    /// Borrow the underlying container.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Consume the view and return the underlying container.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Map view-local 1-based indices to indices into the underlying
    /// container.
    fn to_parent(&self, indices: &[usize]) -> Result<Vec<usize>, ObsError> {
        let picked = to_zero_based(indices, self.indices.len())?;
        Ok(picked.into_iter().map(|i| self.indices[i]).collect())
    }
}

impl<C: ObsContainer> ObsContainer for Subset<C> {
    type Obs = C::Obs;

    fn n_obs(&self, _dim: ObsDim) -> Result<usize, ObsError> {
        Ok(self.indices.len())
    }

    fn fetch(&self, indices: &[usize], _dim: ObsDim) -> Result<Self::Obs, ObsError> {
        let parent = self.to_parent(indices)?;
        self.inner.fetch(&parent, self.dim)
    }

    fn fetch_all(&self) -> Result<Self::Obs, ObsError> {
        // Materializes exactly the viewed indices.
        self.inner.fetch(&self.indices, self.dim)
    }

    fn fetch_into(
        &self,
        buf: &mut Self::Obs,
        indices: &[usize],
        _dim: ObsDim,
    ) -> Result<(), ObsError> {
        let parent = self.to_parent(indices)?;
        self.inner.fetch_into(buf, &parent, self.dim)
    }
}

impl<C: LabeledContainer> LabeledContainer for Subset<C> {
    type Targets = C::Targets;

    fn fetch_targets(&self, indices: &[usize], _dim: ObsDim) -> Result<Self::Targets, ObsError> {
        let parent = self.to_parent(indices)?;
        self.inner.fetch_targets(&parent, self.dim)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn construction_validates_indices() {
        let v = vec![10, 20, 30];
        assert!(Subset::new(&v, vec![1, 3], ObsDim::Unspecified).is_ok());
        assert_eq!(
            Subset::new(&v, vec![4], ObsDim::Unspecified).unwrap_err(),
            ObsError::IndexOutOfRange { index: 4, len: 3 }
        );
        assert_eq!(
            Subset::new(&v, vec![0], ObsDim::Unspecified).unwrap_err(),
            ObsError::IndexOutOfRange { index: 0, len: 3 }
        );
    }

    #[test]
    fn subset_renumbers_observations() {
        let v = vec![10, 20, 30, 40, 50];
        let view = v.subset(&[5, 3, 1], ObsDim::Unspecified).unwrap();

        assert_eq!(view.n_obs(ObsDim::Unspecified).unwrap(), 3);
        assert_eq!(view.fetch(&[1], ObsDim::Unspecified).unwrap(), vec![50]);
        assert_eq!(view.fetch(&[3], ObsDim::Unspecified).unwrap(), vec![10]);
        assert_eq!(
            view.fetch(&[4], ObsDim::Unspecified),
            Err(ObsError::IndexOutOfRange { index: 4, len: 3 })
        );
    }

    #[test]
    fn round_trip_matches_direct_fetch() {
        let data = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
        let wanted = [4, 2, 2];
        let view = data.subset(&wanted, ObsDim::Unspecified).unwrap();

        let all: Vec<usize> = (1..=wanted.len()).collect();
        assert_eq!(
            view.fetch(&all, ObsDim::Unspecified).unwrap(),
            data.fetch(&wanted, ObsDim::Unspecified).unwrap()
        );
        assert_eq!(
            view.fetch_all().unwrap(),
            data.fetch(&wanted, ObsDim::Unspecified).unwrap()
        );
    }

    #[test]
    fn subsets_nest_and_compose_indices() {
        let v = vec![10, 20, 30, 40, 50];
        let outer = v.subset(&[5, 4, 3, 2], ObsDim::Unspecified).unwrap();
        let inner = outer.subset(&[1, 3], ObsDim::Unspecified).unwrap();

        assert_eq!(inner.n_obs(ObsDim::Unspecified).unwrap(), 2);
        assert_eq!(inner.fetch_all().unwrap(), vec![50, 30]);
    }

    #[test]
    fn pinned_dim_drives_the_underlying_fetch() {
        let data = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let rows = data.subset(&[2], ObsDim::First).unwrap();

        assert_eq!(rows.n_obs(ObsDim::Unspecified).unwrap(), 1);
        assert_eq!(
            rows.fetch(&[1], ObsDim::Unspecified).unwrap(),
            array![[4.0, 5.0, 6.0]]
        );
    }

    #[test]
    fn subset_of_group_preserves_pairing() {
        let x = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
        let y = vec![0, 1, 0, 1];
        let group = (x, y);
        let view = group.subset(&[3, 1], ObsDim::Unspecified).unwrap();

        let (xs, ys) = view.fetch_all().unwrap();
        assert_eq!(xs, array![[3.0, 1.0], [7.0, 5.0]]);
        assert_eq!(ys, vec![0, 0]);
    }

    #[test]
    fn subset_of_misaligned_group_fails_at_construction() {
        let group = (vec![1, 2, 3], vec![1, 2]);
        assert_eq!(
            group.subset(&[1], ObsDim::Unspecified).unwrap_err(),
            ObsError::InconsistentLength { counts: vec![3, 2] }
        );
    }

    #[test]
    fn subset_fetch_targets_maps_indices() {
        let group = (vec![1.0, 2.0, 3.0], vec![10, 20, 30]);
        let view = group.subset(&[3, 2], ObsDim::Unspecified).unwrap();
        assert_eq!(
            view.fetch_targets(&[1], ObsDim::Unspecified).unwrap(),
            vec![30]
        );
    }

    #[test]
    fn fetch_into_through_subset() {
        let data = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let view = data.subset(&[3, 1], ObsDim::Unspecified).unwrap();

        let mut buf = ndarray::Array2::<f64>::zeros((2, 1));
        view.fetch_into(&mut buf, &[2], ObsDim::Unspecified).unwrap();
        assert_eq!(buf, array![[1.0], [4.0]]);
    }
}
