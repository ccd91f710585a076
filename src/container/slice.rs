//! `ObsContainer` conformance for slices and vectors.
//!
//! Rank-1 containers: the whole value is the observation axis, so any `dim`
//! short of an axis the value does not have resolves to it.

use crate::container::{to_zero_based, ObsContainer};
use crate::dim::ObsDim;
use crate::error::ObsError;

impl<T: Clone> ObsContainer for [T] {
    type Obs = Vec<T>;

    fn n_obs(&self, dim: ObsDim) -> Result<usize, ObsError> {
        dim.resolve(1)?;
        Ok(self.len())
    }

    fn fetch(&self, indices: &[usize], dim: ObsDim) -> Result<Self::Obs, ObsError> {
        dim.resolve(1)?;
        let picked = to_zero_based(indices, self.len())?;
        Ok(picked.into_iter().map(|i| self[i].clone()).collect())
    }

    fn fetch_all(&self) -> Result<Self::Obs, ObsError> {
        Ok(self.to_vec())
    }
}

impl<T: Clone> ObsContainer for Vec<T> {
    type Obs = Vec<T>;

    fn n_obs(&self, dim: ObsDim) -> Result<usize, ObsError> {
        self.as_slice().n_obs(dim)
    }

    fn fetch(&self, indices: &[usize], dim: ObsDim) -> Result<Self::Obs, ObsError> {
        self.as_slice().fetch(indices, dim)
    }

    fn fetch_all(&self) -> Result<Self::Obs, ObsError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_counts_and_fetches() {
        let v = vec![10, 20, 30, 40];
        assert_eq!(v.n_obs(ObsDim::Unspecified).unwrap(), 4);
        assert_eq!(v.fetch(&[4, 2], ObsDim::Unspecified).unwrap(), vec![40, 20]);
    }

    #[test]
    fn slice_is_a_container_too() {
        let v = [1.0, 2.0, 3.0];
        let s: &[f64] = &v;
        assert_eq!(s.n_obs(ObsDim::First).unwrap(), 3);
        assert_eq!(s.fetch(&[1, 1], ObsDim::First).unwrap(), vec![1.0, 1.0]);
    }

    #[test]
    fn first_and_last_both_mean_the_whole_value() {
        let v = vec!['a', 'b', 'c'];
        assert_eq!(v.n_obs(ObsDim::First).unwrap(), 3);
        assert_eq!(v.n_obs(ObsDim::Last).unwrap(), 3);
        assert_eq!(v.n_obs(ObsDim::Axis(1)).unwrap(), 3);
    }

    #[test]
    fn axis_two_does_not_exist() {
        let v = vec![1, 2, 3];
        assert!(matches!(
            v.n_obs(ObsDim::Axis(2)),
            Err(ObsError::InvalidDimension { axis: 2, ndim: 1 })
        ));
    }

    #[test]
    fn out_of_range_is_not_clamped() {
        let v = vec![1, 2, 3];
        assert_eq!(
            v.fetch(&[0], ObsDim::Unspecified),
            Err(ObsError::IndexOutOfRange { index: 0, len: 3 })
        );
        assert_eq!(
            v.fetch(&[4], ObsDim::Unspecified),
            Err(ObsError::IndexOutOfRange { index: 4, len: 3 })
        );
    }

    #[test]
    fn fetch_all_clones_the_whole_vector() {
        let v = vec![5, 6];
        assert_eq!(v.fetch_all().unwrap(), v);
    }
}
