use std::collections::HashMap;
use std::ops::Index;

use log::{debug, trace};
use nalgebra::DMatrix;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::ANONYMOUS_HOPPING_PREFIX;
use crate::error::LatticeError;
use crate::interfaces::{HopId, Index3D, SubId};
use crate::Result;

/// One directed bond: `from` in the reference cell to `to` in the cell at `relative_index`.
///
/// The reverse bond is implied and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HoppingTerm {
    pub relative_index: Index3D,
    pub from: SubId,
    pub to: SubId,
}

impl HoppingTerm {
    pub fn new(relative_index: Index3D, from: SubId, to: SubId) -> Self {
        Self {
            relative_index,
            from,
            to,
        }
    }

    /// The same physical bond seen from the other end
    pub fn conjugate(&self) -> Self {
        Self {
            relative_index: -self.relative_index,
            from: self.to,
            to: self.from,
        }
    }

    /// Check if `other` describes the same physical bond, in either direction
    pub fn is_same_bond(&self, other: &HoppingTerm) -> bool {
        self == other || *self == other.conjugate()
    }
}

/// A named hopping energy and all bonds that use it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoppingFamily {
    pub name: String,
    /// Rows follow the orbitals of the source sublattice, columns those of the destination
    pub energy: DMatrix<Complex64>,
    pub family_id: HopId,
    pub terms: Vec<HoppingTerm>,
}

/// Append-only hopping family storage: families in id order plus a name index.
///
/// Only serializable, like [`crate::lattice::SublatticeRegistry`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct HoppingRegistry {
    families: Vec<HoppingFamily>,
    ids: HashMap<String, HopId>,
}

impl HoppingRegistry {
    /// Largest number of hopping families a registry can hold
    pub const CAPACITY: usize = HopId::MAX as usize + 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named energy matrix with an empty term list and return its id
    pub fn register(&mut self, name: &str, energy: DMatrix<Complex64>) -> Result<HopId> {
        if name.is_empty() {
            return Err(LatticeError::BlankName { entity: "Hopping" });
        }

        let family_id = HopId::try_from(self.families.len()).map_err(|_| {
            LatticeError::TooManyHoppings {
                max: Self::CAPACITY,
            }
        })?;

        if self.ids.contains_key(name) {
            return Err(LatticeError::DuplicateHopping(name.to_string()));
        }

        debug!(
            "Registered hopping '{}' with id {} ({}x{})",
            name,
            family_id,
            energy.nrows(),
            energy.ncols()
        );
        self.ids.insert(name.to_string(), family_id);
        self.families.push(HoppingFamily {
            name: name.to_string(),
            energy,
            family_id,
            terms: Vec::new(),
        });
        Ok(family_id)
    }

    pub fn get(&self, name: &str) -> Result<&HoppingFamily> {
        self.ids
            .get(name)
            .map(|&id| &self.families[id as usize])
            .ok_or_else(|| LatticeError::UnknownHopping(name.to_string()))
    }

    /// Look up by identifier; ids are dense so this indexes directly
    pub fn get_by_id(&self, id: HopId) -> Result<&HoppingFamily> {
        self.families
            .get(id as usize)
            .ok_or(LatticeError::UnknownHoppingId(id as usize))
    }

    /// First family (in id order) whose energy matrix is bit-identical to `energy`
    pub fn find_by_energy(&self, energy: &DMatrix<Complex64>) -> Option<&HoppingFamily> {
        self.families.iter().find(|family| family.energy == *energy)
    }

    /// Name given to the next family registered without one
    pub fn next_anonymous_name(&self) -> String {
        format!("{}{}", ANONYMOUS_HOPPING_PREFIX, self.families.len())
    }

    /// Check every family for `candidate` or its conjugate
    pub fn contains_bond(&self, candidate: &HoppingTerm) -> bool {
        self.families
            .iter()
            .flat_map(|family| family.terms.iter())
            .any(|existing| candidate.is_same_bond(existing))
    }

    pub(crate) fn push_term(&mut self, family_id: HopId, term: HoppingTerm) {
        let family = &mut self.families[family_id as usize];
        trace!(
            "Added hopping {:?} {} -> {} to '{}'",
            term.relative_index.as_slice(),
            term.from,
            term.to,
            family.name
        );
        family.terms.push(term);
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Iterate in id order
    pub fn iter(&self) -> std::slice::Iter<'_, HoppingFamily> {
        self.families.iter()
    }

    /// Total number of stored terms over all families
    pub fn num_terms(&self) -> usize {
        self.families.iter().map(|family| family.terms.len()).sum()
    }

    pub fn name_map(&self) -> HashMap<String, HopId> {
        self.ids.clone()
    }
}

impl Index<HopId> for HoppingRegistry {
    type Output = HoppingFamily;

    fn index(&self, id: HopId) -> &Self::Output {
        &self.families[id as usize]
    }
}
