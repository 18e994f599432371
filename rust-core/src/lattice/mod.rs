//! Lattice module: tight-binding lattice definition, registries, validation and compilation.
//!
//! Quick reference
//! - Model: [`Lattice`] (primitive vectors, offset, sublattices, hoppings)
//! - Energies: [`Energy`] (scalar, diagonal or full matrix onsite/hopping energies)
//! - Registries: [`SublatticeRegistry`], [`HoppingRegistry`] with [`Sublattice`],
//!   [`HoppingFamily`], [`HoppingTerm`]
//! - Compilation: [`OptimizedLatticeStructure`], [`Site`], [`CompiledHopping`]
//! - Construction: [`linear_chain`], [`square_lattice`], [`graphene_monolayer`],
//!   [`simple_cubic_lattice`], [`square_supercell`]
//!
//! See submodules for full details: [`lattice_model`], [`lattice_sublattices`],
//! [`lattice_hoppings`], [`lattice_validations`], [`optimized_structure`],
//! [`lattice_construction`].

// ======================== MODULE DECLARATIONS ========================
pub mod lattice_construction;
pub mod lattice_energies;
pub mod lattice_hoppings;
pub mod lattice_model;
pub mod lattice_sublattices;
pub mod lattice_validations;
pub mod optimized_structure;

mod _tests_lattice_model;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
#[doc(inline)]
pub use lattice_model::Lattice;

#[doc(inline)]
pub use lattice_energies::Energy;

pub use lattice_sublattices::{Sublattice, SublatticeRegistry};

pub use lattice_hoppings::{HoppingFamily, HoppingRegistry, HoppingTerm};

pub use optimized_structure::{CompiledHopping, OptimizedLatticeStructure, Site};

pub use lattice_validations::{is_hermitian, is_upper_triangular, validate_onsite_energy};

// ======================== PRESET LATTICES ========================
pub use lattice_construction::{
    graphene_monolayer, linear_chain, simple_cubic_lattice, square_lattice, square_supercell,
};

/// A convenience prelude for importing common lattice items.
pub mod prelude {
    #[doc(no_inline)]
    pub use super::{Energy, Lattice, OptimizedLatticeStructure};
    #[doc(no_inline)]
    pub use crate::interfaces::{Cartesian, Index3D};
}
