use std::collections::HashMap;
use std::ops::Index;

use log::debug;
use nalgebra::DMatrix;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::LatticeError;
use crate::interfaces::{Cartesian, SubId};
use crate::Result;

/// A site of the unit cell together with its onsite energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sublattice {
    pub name: String,
    /// Position relative to the unit-cell origin
    pub position: Cartesian,
    /// Onsite energy matrix, one row/column per orbital
    pub energy: DMatrix<Complex64>,
    /// Dense identifier, unique per registered name
    pub unique_id: SubId,
    /// Identifier of the sublattice this one was aliased from (own id if not an alias)
    pub alias_id: SubId,
}

impl Sublattice {
    pub fn num_orbitals(&self) -> usize {
        self.energy.ncols()
    }

    pub fn is_alias(&self) -> bool {
        self.unique_id != self.alias_id
    }
}

/// Append-only sublattice storage: records in id order plus a name index.
///
/// Only serializable: every record must come through the checked registration path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SublatticeRegistry {
    entries: Vec<Sublattice>,
    ids: HashMap<String, SubId>,
}

impl SublatticeRegistry {
    /// Largest number of sublattices a registry can hold
    pub const CAPACITY: usize = SubId::MAX as usize + 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a new name and return the identifier it will receive.
    ///
    /// Nothing is stored; [`SublatticeRegistry::insert`] completes the registration.
    pub fn register_sublattice(&self, name: &str) -> Result<SubId> {
        if name.is_empty() {
            return Err(LatticeError::BlankName {
                entity: "Sublattice",
            });
        }

        let unique_id = SubId::try_from(self.entries.len()).map_err(|_| {
            LatticeError::TooManySublattices {
                max: Self::CAPACITY,
            }
        })?;

        if self.ids.contains_key(name) {
            return Err(LatticeError::DuplicateSublattice(name.to_string()));
        }

        Ok(unique_id)
    }

    /// Store a sublattice whose name was validated by [`SublatticeRegistry::register_sublattice`]
    pub(crate) fn insert(&mut self, sublattice: Sublattice) {
        debug_assert_eq!(sublattice.unique_id as usize, self.entries.len());
        debug!(
            "Registered sublattice '{}' with id {} (alias of {}, {} orbitals)",
            sublattice.name,
            sublattice.unique_id,
            sublattice.alias_id,
            sublattice.num_orbitals()
        );
        self.ids.insert(sublattice.name.clone(), sublattice.unique_id);
        self.entries.push(sublattice);
    }

    pub fn get(&self, name: &str) -> Result<&Sublattice> {
        self.ids
            .get(name)
            .map(|&id| &self.entries[id as usize])
            .ok_or_else(|| LatticeError::UnknownSublattice(name.to_string()))
    }

    /// Look up by identifier; ids are dense so this indexes directly
    pub fn get_by_id(&self, id: SubId) -> Result<&Sublattice> {
        self.entries
            .get(id as usize)
            .ok_or(LatticeError::UnknownSublatticeId(id as usize))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in id order
    pub fn iter(&self) -> std::slice::Iter<'_, Sublattice> {
        self.entries.iter()
    }

    pub fn name_map(&self) -> HashMap<String, SubId> {
        self.ids.clone()
    }
}

impl Index<SubId> for SublatticeRegistry {
    type Output = Sublattice;

    fn index(&self, id: SubId) -> &Self::Output {
        &self.entries[id as usize]
    }
}
