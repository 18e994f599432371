use std::ops::Index;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::interfaces::{Cartesian, HopId, Index3D, SubId};
use crate::lattice::lattice_hoppings::HoppingRegistry;
use crate::lattice::lattice_sublattices::SublatticeRegistry;

/// One neighbor of a site, as seen from that site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompiledHopping {
    /// Unit cell of the neighbor relative to the site's own cell
    pub relative_index: Index3D,
    /// Sublattice id of the neighbor
    pub sublattice: SubId,
    /// Hopping family providing the energy
    pub family: HopId,
    /// The energy enters as the conjugate transpose of the family matrix
    pub is_conjugate: bool,
}

/// A sublattice site with every bond incident to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub position: Cartesian,
    pub alias: SubId,
    pub hoppings: Vec<CompiledHopping>,
}

/// Site table indexed by sublattice id, ready for Hamiltonian assembly.
///
/// Every stored bond `(d, A -> B)` appears twice: as `(d, B)` on site `A` and as the
/// conjugate `(-d, A)` on site `B`. The structure owns plain data only and has no link back
/// to the lattice it was compiled from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizedLatticeStructure {
    sites: Vec<Site>,
}

impl OptimizedLatticeStructure {
    pub fn compile(sublattices: &SublatticeRegistry, hoppings: &HoppingRegistry) -> Self {
        let mut sites: Vec<Site> = sublattices
            .iter()
            .map(|sublattice| Site {
                position: sublattice.position,
                alias: sublattice.alias_id,
                hoppings: Vec::new(),
            })
            .collect();

        for family in hoppings.iter() {
            for term in &family.terms {
                sites[term.from as usize].hoppings.push(CompiledHopping {
                    relative_index: term.relative_index,
                    sublattice: term.to,
                    family: family.family_id,
                    is_conjugate: false,
                });
                sites[term.to as usize].hoppings.push(CompiledHopping {
                    relative_index: -term.relative_index,
                    sublattice: term.from,
                    family: family.family_id,
                    is_conjugate: true,
                });
            }
        }

        debug!(
            "Compiled lattice structure: {} sites, {} hopping terms",
            sites.len(),
            hoppings.num_terms()
        );
        OptimizedLatticeStructure { sites }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn get(&self, id: SubId) -> Option<&Site> {
        self.sites.get(id as usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.sites.iter()
    }

    /// Total number of compiled entries (twice the number of stored bonds)
    pub fn num_hoppings(&self) -> usize {
        self.sites.iter().map(|site| site.hoppings.len()).sum()
    }
}

impl Index<SubId> for OptimizedLatticeStructure {
    type Output = Site;

    fn index(&self, id: SubId) -> &Self::Output {
        &self.sites[id as usize]
    }
}

impl<'a> IntoIterator for &'a OptimizedLatticeStructure {
    type Item = &'a Site;
    type IntoIter = std::slice::Iter<'a, Site>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}
