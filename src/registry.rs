//! Type-erased container dispatch.
//!
//! The trait path resolves the container contract at compile time. When the
//! concrete type is only known at runtime — plugin-provided sources, groups
//! of unknown arity, values carried as `dyn Any` — dispatch goes through a
//! caller-owned [`ContainerRegistry`] instead: a table mapping concrete
//! types to erased `n_obs`/`fetch` entry points.
//!
//! Using a value whose type was never registered fails with
//! [`ObsError::UnsupportedContainer`]; this is the runtime rendition of the
//! structural contract check. The registry is plain data owned by the
//! caller — the crate keeps no process-wide state.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::container::ObsContainer;
use crate::dim::ObsDim;
use crate::error::ObsError;

/// A container value with its concrete type erased.
///
/// Tags the boxed value with its type name so contract violations can be
/// reported by name rather than by opaque type id.
pub struct AnyValue {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl AnyValue {
    /// Erase `value`.
    pub fn new<T: 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The erased value's type name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the value as `T`, if that is its concrete type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    /// Recover the value as `T`, if that is its concrete type.
    pub fn downcast<T: 'static>(self) -> Option<T> {
        self.value.downcast().ok().map(|boxed| *boxed)
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyValue").field(&self.type_name).finish()
    }
}

type CountFn = Box<dyn Fn(&dyn Any, ObsDim) -> Result<usize, ObsError> + Send + Sync>;
type FetchFn = Box<dyn Fn(&dyn Any, &[usize], ObsDim) -> Result<AnyValue, ObsError> + Send + Sync>;

struct Entry {
    n_obs: CountFn,
    fetch: FetchFn,
}

/// Runtime dispatch table from concrete container types to the contract
/// operations.
#[derive(Default)]
pub struct ContainerRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl ContainerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `C`, making values of that type usable through the erased
    /// operations. Re-registering a type replaces its entry.
    pub fn register<C>(&mut self)
    where
        C: ObsContainer + 'static,
        C::Obs: 'static,
    {
        trace!("registering container type {}", std::any::type_name::<C>());
        self.entries.insert(
            TypeId::of::<C>(),
            Entry {
                n_obs: Box::new(|value, dim| {
                    // Entries are keyed by the value's TypeId, so the
                    // downcast cannot fail.
                    let container = value.downcast_ref::<C>().expect("entry keyed by TypeId");
                    container.n_obs(dim)
                }),
                fetch: Box::new(|value, indices, dim| {
                    let container = value.downcast_ref::<C>().expect("entry keyed by TypeId");
                    container.fetch(indices, dim).map(AnyValue::new)
                }),
            },
        );
    }

    /// Whether `C` has been registered.
    pub fn contains<C: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<C>())
    }

    fn entry(&self, value: &AnyValue) -> Result<&Entry, ObsError> {
        self.entries
            .get(&value.value.as_ref().type_id())
            .ok_or_else(|| ObsError::UnsupportedContainer {
                type_name: value.type_name.to_string(),
            })
    }

    /// Observation count of an erased value.
    pub fn n_obs(&self, value: &AnyValue, dim: ObsDim) -> Result<usize, ObsError> {
        (self.entry(value)?.n_obs)(value.value.as_ref(), dim)
    }

    /// Fetch from an erased value; the result is erased in turn.
    pub fn fetch(
        &self,
        value: &AnyValue,
        indices: &[usize],
        dim: ObsDim,
    ) -> Result<AnyValue, ObsError> {
        (self.entry(value)?.fetch)(value.value.as_ref(), indices, dim)
    }

    /// Observation count of an erased group, with the same linking
    /// semantics as tuple groups: all elements must agree, and a dim that
    /// does not resolve for an element is ignored for that element.
    ///
    /// An empty group has zero observations.
    pub fn group_n_obs(&self, group: &[AnyValue], dim: ObsDim) -> Result<usize, ObsError> {
        let counts = group
            .iter()
            .map(|value| self.n_obs_lenient(value, dim))
            .collect::<Result<Vec<_>, _>>()?;
        if counts.windows(2).any(|pair| pair[0] != pair[1]) {
            return Err(ObsError::InconsistentLength { counts });
        }
        Ok(counts.first().copied().unwrap_or(0))
    }

    /// Fetch the same index set from every element of an erased group,
    /// preserving order. Aborts on the first element failure.
    pub fn group_fetch(
        &self,
        group: &[AnyValue],
        indices: &[usize],
        dim: ObsDim,
    ) -> Result<Vec<AnyValue>, ObsError> {
        self.group_n_obs(group, dim)?;
        group
            .iter()
            .map(|value| self.fetch_lenient(value, indices, dim))
            .collect()
    }

    fn n_obs_lenient(&self, value: &AnyValue, dim: ObsDim) -> Result<usize, ObsError> {
        match self.n_obs(value, dim) {
            Err(ObsError::InvalidDimension { .. }) if dim != ObsDim::Unspecified => {
                self.n_obs(value, ObsDim::Unspecified)
            }
            other => other,
        }
    }

    fn fetch_lenient(
        &self,
        value: &AnyValue,
        indices: &[usize],
        dim: ObsDim,
    ) -> Result<AnyValue, ObsError> {
        match self.fetch(value, indices, dim) {
            Err(ObsError::InvalidDimension { .. }) if dim != ObsDim::Unspecified => {
                self.fetch(value, indices, ObsDim::Unspecified)
            }
            other => other,
        }
    }
}

impl fmt::Debug for ContainerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerRegistry")
            .field("registered", &self.entries.len())
            .finish()
    }
}
