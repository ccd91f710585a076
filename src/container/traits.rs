//! Core traits for indexed observation access.

use crate::dim::ObsDim;
use crate::error::ObsError;
use crate::subset::Subset;

/// Uniform access to an indexed collection of observations.
///
/// Two operations are required: [`n_obs`](Self::n_obs) and
/// [`fetch`](Self::fetch). Everything else has a provided default, so a
/// minimal out-of-core or remote-backed container implements exactly the two
/// and participates in subsetting, buffered fetching, and group linking for
/// free.
///
/// # Observation Indices
///
/// Indices are 1-based: the valid universe is `1..=n_obs`. Query index sets
/// may repeat indices and come in any order. Index 0 and indices above
/// `n_obs` fail with [`ObsError::IndexOutOfRange`].
///
/// # Determinism
///
/// `n_obs` must be deterministic for a given `(container, dim)` pair for the
/// container's lifetime, and `fetch` with the same index set must return
/// equal results absent external mutation. This layer never copies, mutates,
/// or takes ownership of the underlying storage.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use obskit::{ObsContainer, ObsDim};
///
/// let table = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// assert_eq!(table.n_obs(ObsDim::Unspecified)?, 3);
///
/// let picked = table.fetch(&[3, 1], ObsDim::Unspecified)?;
/// assert_eq!(picked, array![[3.0, 1.0], [6.0, 4.0]]);
/// # Ok::<(), obskit::ObsError>(())
/// ```
pub trait ObsContainer {
    /// Owned result of a [`fetch`](Self::fetch).
    ///
    /// No structural constraint is imposed beyond being addressable by the
    /// same kind of indices again when re-wrapped as a container.
    type Obs;

    /// Number of observations along the resolved observation axis.
    fn n_obs(&self, dim: ObsDim) -> Result<usize, ObsError>;

    /// The observations at `indices`, in query order.
    fn fetch(&self, indices: &[usize], dim: ObsDim) -> Result<Self::Obs, ObsError>;

    /// Every observation in the container's native bulk form.
    ///
    /// The provided default materializes all indices through
    /// [`fetch`](Self::fetch). Array and slice containers override it with a
    /// copy of the whole value, so for them bulk access is the identity on
    /// the stored data.
    fn fetch_all(&self) -> Result<Self::Obs, ObsError> {
        let n = self.n_obs(ObsDim::Unspecified)?;
        let indices: Vec<usize> = (1..=n).collect();
        self.fetch(&indices, ObsDim::Unspecified)
    }

    /// Fetch into a caller-supplied, pre-shaped buffer.
    ///
    /// The buffer is treated as exclusively owned for the duration of the
    /// call. The provided default falls back to [`fetch`](Self::fetch) and
    /// replaces `buf` wholesale; in-place implementations (arrays) validate
    /// the buffer shape first and fail with [`ObsError::ShapeMismatch`] when
    /// it is incompatible with what `fetch` would have returned.
    ///
    /// ```
    /// use ndarray::{array, Array2};
    /// use obskit::{ObsContainer, ObsDim};
    ///
    /// let data = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    /// let mut buf = Array2::<f64>::zeros((2, 2));
    /// data.fetch_into(&mut buf, &[1, 3], ObsDim::Unspecified)?;
    /// assert_eq!(buf, array![[1.0, 3.0], [4.0, 6.0]]);
    /// # Ok::<(), obskit::ObsError>(())
    /// ```
    fn fetch_into(
        &self,
        buf: &mut Self::Obs,
        indices: &[usize],
        dim: ObsDim,
    ) -> Result<(), ObsError> {
        *buf = self.fetch(indices, dim)?;
        Ok(())
    }

    /// A lazy view of exactly `indices`, without copying underlying data.
    ///
    /// Index validation happens here, so a bad index set fails at
    /// construction rather than on first fetch. See [`Subset`].
    fn subset(&self, indices: &[usize], dim: ObsDim) -> Result<Subset<&Self>, ObsError>
    where
        Self: Sized,
    {
        Subset::new(self, indices.to_vec(), dim)
    }
}

/// Containers that separate features from supervised targets internally.
///
/// For linked tuples the convention is that the **last** element holds the
/// targets, so `fetch_targets` on `(x, y)` returns `y`'s observations.
pub trait LabeledContainer: ObsContainer {
    /// Owned result of a [`fetch_targets`](Self::fetch_targets).
    type Targets;

    /// The target values associated with `indices`, in query order.
    fn fetch_targets(&self, indices: &[usize], dim: ObsDim) -> Result<Self::Targets, ObsError>;
}

impl<C: ObsContainer + ?Sized> ObsContainer for &C {
    type Obs = C::Obs;

    fn n_obs(&self, dim: ObsDim) -> Result<usize, ObsError> {
        (**self).n_obs(dim)
    }

    fn fetch(&self, indices: &[usize], dim: ObsDim) -> Result<Self::Obs, ObsError> {
        (**self).fetch(indices, dim)
    }

    fn fetch_all(&self) -> Result<Self::Obs, ObsError> {
        (**self).fetch_all()
    }

    fn fetch_into(
        &self,
        buf: &mut Self::Obs,
        indices: &[usize],
        dim: ObsDim,
    ) -> Result<(), ObsError> {
        (**self).fetch_into(buf, indices, dim)
    }
}

impl<C: LabeledContainer + ?Sized> LabeledContainer for &C {
    type Targets = C::Targets;

    fn fetch_targets(&self, indices: &[usize], dim: ObsDim) -> Result<Self::Targets, ObsError> {
        (**self).fetch_targets(indices, dim)
    }
}
