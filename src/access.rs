//! Free-function access surface.
//!
//! Thin wrappers over the [`ObsContainer`] methods that accept any
//! [`ObsDim`] shorthand (`ObsDim` itself, or a 1-based axis number).
//! Shorthands are normalized here and nowhere else; the trait and the
//! resolver only ever see `ObsDim`.

use crate::container::{LabeledContainer, ObsContainer};
use crate::dim::ObsDim;
use crate::error::ObsError;
use crate::subset::Subset;

/// Number of observations in `container` along the resolved axis.
///
/// ```
/// use ndarray::array;
/// use obskit::{n_obs, ObsDim};
///
/// let table = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
/// assert_eq!(n_obs(&table, ObsDim::Unspecified)?, 3);
/// assert_eq!(n_obs(&table, 1)?, 2); // integer shorthand for Axis(1)
/// # Ok::<(), obskit::ObsError>(())
/// ```
pub fn n_obs<C>(container: &C, dim: impl Into<ObsDim>) -> Result<usize, ObsError>
where
    C: ObsContainer + ?Sized,
{
    container.n_obs(dim.into())
}

/// The observations of `container` at `indices`, in query order.
pub fn fetch<C>(
    container: &C,
    indices: &[usize],
    dim: impl Into<ObsDim>,
) -> Result<C::Obs, ObsError>
where
    C: ObsContainer + ?Sized,
{
    container.fetch(indices, dim.into())
}

/// Every observation of `container` in its native bulk form.
pub fn fetch_all<C>(container: &C) -> Result<C::Obs, ObsError>
where
    C: ObsContainer + ?Sized,
{
    container.fetch_all()
}

/// Fetch into a caller-supplied, pre-shaped buffer.
pub fn fetch_into<C>(
    container: &C,
    buf: &mut C::Obs,
    indices: &[usize],
    dim: impl Into<ObsDim>,
) -> Result<(), ObsError>
where
    C: ObsContainer + ?Sized,
{
    container.fetch_into(buf, indices, dim.into())
}

/// The target values of `container` at `indices`.
pub fn fetch_targets<C>(
    container: &C,
    indices: &[usize],
    dim: impl Into<ObsDim>,
) -> Result<C::Targets, ObsError>
where
    C: LabeledContainer + ?Sized,
{
    container.fetch_targets(indices, dim.into())
}

/// A lazy view of exactly `indices` into `container`.
pub fn subset<'a, C>(
    container: &'a C,
    indices: &[usize],
    dim: impl Into<ObsDim>,
) -> Result<Subset<&'a C>, ObsError>
where
    C: ObsContainer,
{
    container.subset(indices, dim.into())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::container::ObsContainer;

    #[test]
    fn shorthand_and_typed_dims_agree() {
        let table = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

        assert_eq!(
            fetch(&table, &[2], 2).unwrap(),
            table.fetch(&[2], ObsDim::Axis(2)).unwrap()
        );
        assert_eq!(
            fetch(&table, &[2], "first".parse::<ObsDim>().unwrap()).unwrap(),
            table.fetch(&[2], ObsDim::First).unwrap()
        );
    }

    #[test]
    fn functions_cover_the_contract() {
        let x = vec![1, 2, 3];
        let y = vec![10, 20, 30];
        let group = (x, y);

        assert_eq!(n_obs(&group, ObsDim::Unspecified).unwrap(), 3);
        assert_eq!(
            fetch(&group, &[3], ObsDim::Unspecified).unwrap(),
            (vec![3], vec![30])
        );
        assert_eq!(
            fetch_targets(&group, &[1, 2], ObsDim::Unspecified).unwrap(),
            vec![10, 20]
        );
        assert_eq!(fetch_all(&group).unwrap(), (vec![1, 2, 3], vec![10, 20, 30]));

        let view = subset(&group, &[2], ObsDim::Unspecified).unwrap();
        assert_eq!(n_obs(&view, ObsDim::Unspecified).unwrap(), 1);

        let mut buf = (Vec::new(), Vec::new());
        fetch_into(&group, &mut buf, &[2], ObsDim::Unspecified).unwrap();
        assert_eq!(buf, (vec![2], vec![20]));
    }
}
