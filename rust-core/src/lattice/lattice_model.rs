use std::collections::HashMap;
use std::f64::consts::PI;

use log::debug;
use nalgebra::{DMatrix, DVector, Vector3};
use num_complex::Complex64;
use serde::Serialize;

use crate::config::{BASE_VECTOR_TOLERANCE, DEFAULT_MIN_NEIGHBORS, MAX_OFFSET_FRACTION};
use crate::error::LatticeError;
use crate::interfaces::{Cartesian, HopId, Index3D, SubId};
use crate::lattice::lattice_energies::{diagonal_is_zero, is_real, Energy};
use crate::lattice::lattice_hoppings::{HoppingFamily, HoppingRegistry, HoppingTerm};
use crate::lattice::lattice_sublattices::{Sublattice, SublatticeRegistry};
use crate::lattice::lattice_validations::{validate_hopping_shape, validate_onsite_energy};
use crate::lattice::optimized_structure::OptimizedLatticeStructure;
use crate::Result;

/// A tight-binding lattice: primitive vectors, sublattices and hopping families.
///
/// Sublattices and hoppings are append-only. Derived variants ([`Lattice::with_offset`],
/// [`Lattice::with_min_neighbors`]) are independent copies. The lattice can be serialized
/// for inspection but not deserialized, since registry invariants are only enforced by the
/// builder methods.
#[derive(Debug, Clone, Serialize)]
pub struct Lattice {
    vectors: Vec<Cartesian>,
    offset: Cartesian,
    min_neighbors: usize,
    sublattices: SublatticeRegistry,
    hoppings: HoppingRegistry,
}

impl Lattice {
    /// Construct a lattice from 1, 2 or 3 primitive vectors.
    ///
    /// The number of vectors sets the dimensionality. Vectors must be nonzero and linearly
    /// independent; the independence check works on unit vectors, so it does not depend on
    /// the length unit.
    pub fn new(vectors: &[Cartesian]) -> Result<Self> {
        if vectors.is_empty() || vectors.len() > 3 {
            return Err(LatticeError::InvalidVectorCount(vectors.len()));
        }

        if let Some(i) = vectors.iter().position(|v| *v == Cartesian::zeros()) {
            return Err(LatticeError::ZeroVector(i));
        }

        // Gram determinant of the normalized vectors lies in [0, 1] and vanishes for
        // linearly dependent vectors, in any dimension
        let units = vectors.iter().map(|v| v.normalize()).collect::<Vec<_>>();
        let basis = column_matrix(&units);
        if (basis.transpose() * &basis).determinant() < BASE_VECTOR_TOLERANCE {
            return Err(LatticeError::SingularLatticeVectors);
        }

        Ok(Lattice {
            vectors: vectors.to_vec(),
            offset: Cartesian::zeros(),
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            sublattices: SublatticeRegistry::new(),
            hoppings: HoppingRegistry::new(),
        })
    }

    /// Construct from three vectors, dropping `a2` and `a3` when they are zero
    pub fn from_vectors(a1: Cartesian, a2: Cartesian, a3: Cartesian) -> Result<Self> {
        let mut vectors = vec![a1];
        vectors.extend([a2, a3].into_iter().filter(|v| *v != Cartesian::zeros()));
        Self::new(&vectors)
    }

    // ======================== ACCESSORS ========================

    /// Number of spatial dimensions (= number of primitive vectors)
    pub fn ndim(&self) -> usize {
        self.vectors.len()
    }

    pub fn vectors(&self) -> &[Cartesian] {
        &self.vectors
    }

    pub fn offset(&self) -> Cartesian {
        self.offset
    }

    pub fn min_neighbors(&self) -> usize {
        self.min_neighbors
    }

    /// Number of sublattices, aliases included
    pub fn nsub(&self) -> usize {
        self.sublattices.len()
    }

    /// Number of hopping families
    pub fn nhop(&self) -> usize {
        self.hoppings.len()
    }

    pub fn sublattice_registry(&self) -> &SublatticeRegistry {
        &self.sublattices
    }

    pub fn hopping_registry(&self) -> &HoppingRegistry {
        &self.hoppings
    }

    /// Sublattices in id order
    pub fn sublattices(&self) -> impl Iterator<Item = &Sublattice> {
        self.sublattices.iter()
    }

    /// Hopping families in id order
    pub fn hopping_families(&self) -> impl Iterator<Item = &HoppingFamily> {
        self.hoppings.iter()
    }

    /// Sublattice name to id
    pub fn sub_name_map(&self) -> HashMap<String, SubId> {
        self.sublattices.name_map()
    }

    /// Hopping family name to id
    pub fn hop_name_map(&self) -> HashMap<String, HopId> {
        self.hoppings.name_map()
    }

    // ======================== SUBLATTICES ========================

    /// Add a sublattice at `position` with the given onsite energy and return its id.
    ///
    /// A scalar energy describes a single orbital and a real vector gives one orbital per
    /// entry. A matrix must be square with a real diagonal, and either upper triangular or
    /// Hermitian.
    pub fn add_sublattice(
        &mut self,
        name: &str,
        position: Cartesian,
        onsite_energy: impl Into<Energy>,
    ) -> Result<SubId> {
        let energy = onsite_energy.into().into_matrix();
        validate_onsite_energy(name, &energy)?;

        let unique_id = self.sublattices.register_sublattice(name)?;
        self.sublattices.insert(Sublattice {
            name: name.to_string(),
            position,
            energy,
            unique_id,
            alias_id: unique_id,
        });
        Ok(unique_id)
    }

    /// Add a sublattice at a new position that shares the orbitals and onsite energy of
    /// `original_name`. Returns the id of the alias.
    pub fn add_alias(
        &mut self,
        alias_name: &str,
        original_name: &str,
        position: Cartesian,
    ) -> Result<SubId> {
        let original = self.sublattices.get(original_name)?;
        let energy = original.energy.clone();
        let alias_id = original.alias_id;

        let unique_id = self.sublattices.register_sublattice(alias_name)?;
        self.sublattices.insert(Sublattice {
            name: alias_name.to_string(),
            position,
            energy,
            unique_id,
            alias_id,
        });
        Ok(unique_id)
    }

    pub fn sublattice(&self, name: &str) -> Result<&Sublattice> {
        self.sublattices.get(name)
    }

    pub fn sublattice_by_id(&self, id: SubId) -> Result<&Sublattice> {
        self.sublattices.get_by_id(id)
    }

    // ======================== HOPPINGS ========================

    /// Register a named hopping energy and return its family id
    pub fn register_hopping_energy(
        &mut self,
        name: &str,
        energy: impl Into<Energy>,
    ) -> Result<HopId> {
        self.hoppings.register(name, energy.into().into_matrix())
    }

    /// Add a hopping from `from_sub` in the reference cell to `to_sub` in the cell at
    /// `relative_index`, using the registered family `family_name`.
    ///
    /// Each bond is stored once: adding a bond that already exists, in this or the reverse
    /// direction, fails.
    pub fn add_hopping(
        &mut self,
        relative_index: Index3D,
        from_sub: &str,
        to_sub: &str,
        family_name: &str,
    ) -> Result<()> {
        if from_sub == to_sub && relative_index == Index3D::zeros() {
            return Err(LatticeError::OnsiteHopping {
                sublattice: from_sub.to_string(),
            });
        }

        let family = self.hoppings.get(family_name)?;
        let family_id = family.family_id;
        let term =
            self.checked_term(relative_index, from_sub, to_sub, family_name, &family.energy)?;
        self.hoppings.push_term(family_id, term);
        Ok(())
    }

    /// Add a hopping given by its energy instead of a family name.
    ///
    /// An existing family with a bit-identical energy matrix is reused; otherwise an anonymous
    /// family is registered. Returns the family id that holds the new term.
    pub fn add_hopping_energy(
        &mut self,
        relative_index: Index3D,
        from_sub: &str,
        to_sub: &str,
        energy: impl Into<Energy>,
    ) -> Result<HopId> {
        let energy = energy.into().into_matrix();
        if let Some(family) = self.hoppings.find_by_energy(&energy) {
            let (family_id, name) = (family.family_id, family.name.clone());
            self.add_hopping(relative_index, from_sub, to_sub, &name)?;
            return Ok(family_id);
        }

        if from_sub == to_sub && relative_index == Index3D::zeros() {
            return Err(LatticeError::OnsiteHopping {
                sublattice: from_sub.to_string(),
            });
        }

        // The anonymous family only appears once the term is known to be valid
        let name = self.hoppings.next_anonymous_name();
        let term = self.checked_term(relative_index, from_sub, to_sub, &name, &energy)?;
        let family_id = self.hoppings.register(&name, energy)?;
        self.hoppings.push_term(family_id, term);
        Ok(family_id)
    }

    /// Resolve names, check the matrix shape and reject duplicate bonds
    fn checked_term(
        &self,
        relative_index: Index3D,
        from_sub: &str,
        to_sub: &str,
        family_name: &str,
        energy: &DMatrix<Complex64>,
    ) -> Result<HoppingTerm> {
        let from = self.sublattices.get(from_sub)?;
        let to = self.sublattices.get(to_sub)?;
        validate_hopping_shape(from, to, family_name, energy)?;

        let term = HoppingTerm::new(relative_index, from.unique_id, to.unique_id);
        if self.hoppings.contains_bond(&term) {
            return Err(LatticeError::DuplicateHoppingTerm {
                relative_index: [relative_index.x, relative_index.y, relative_index.z],
                from: from_sub.to_string(),
                to: to_sub.to_string(),
            });
        }
        Ok(term)
    }

    pub fn hopping_family(&self, name: &str) -> Result<&HoppingFamily> {
        self.hoppings.get(name)
    }

    pub fn hopping_family_by_id(&self, id: HopId) -> Result<&HoppingFamily> {
        self.hoppings.get_by_id(id)
    }

    // ======================== GEOMETRY ========================

    /// Shift the lattice origin.
    ///
    /// Fails if the shift exceeds [`MAX_OFFSET_FRACTION`] of any primitive vector, since a
    /// larger shift makes it ambiguous which unit cell a boundary site belongs to.
    pub fn set_offset(&mut self, position: Cartesian) -> Result<()> {
        let fractional = self.translate_coordinates(position);
        if fractional.iter().any(|v| v.abs() > MAX_OFFSET_FRACTION) {
            return Err(LatticeError::OffsetOutOfRange {
                fractional: [fractional.x, fractional.y, fractional.z],
                limit: MAX_OFFSET_FRACTION,
            });
        }
        debug!("Lattice offset set to {:?}", position.as_slice());
        self.offset = position;
        Ok(())
    }

    /// Copy of this lattice with a different offset
    pub fn with_offset(&self, position: Cartesian) -> Result<Lattice> {
        let mut lattice = self.clone();
        lattice.set_offset(position)?;
        Ok(lattice)
    }

    pub fn set_min_neighbors(&mut self, number: usize) {
        self.min_neighbors = number;
    }

    /// Copy of this lattice with a different minimum neighbor hint
    pub fn with_min_neighbors(&self, number: usize) -> Lattice {
        let mut lattice = self.clone();
        lattice.set_min_neighbors(number);
        lattice
    }

    /// Position of a unit cell, or of a sublattice inside it when `sublattice_name` is not empty.
    ///
    /// Components of `index` beyond the lattice dimensionality are ignored.
    pub fn calc_position(&self, index: Index3D, sublattice_name: &str) -> Result<Cartesian> {
        let mut position = self.offset;
        for (i, vector) in self.vectors.iter().enumerate() {
            position += vector * index[i] as f64;
        }
        if !sublattice_name.is_empty() {
            position += self.sublattices.get(sublattice_name)?.position;
        }
        Ok(position)
    }

    /// Convert a cartesian position to fractional lattice coordinates.
    ///
    /// Solves the `ndim x ndim` system formed by the first `ndim` components of the primitive
    /// vectors and of `position`; components beyond the dimensionality are zero.
    ///
    /// When that truncated matrix is singular (e.g. a chain along y) the full vectors are
    /// used instead, solving `A v = p` in the least-squares sense.
    pub fn translate_coordinates(&self, position: Cartesian) -> Vector3<f64> {
        let n = self.ndim();
        let truncated = DMatrix::from_fn(n, n, |row, col| self.vectors[col][row]);
        let scale: f64 = truncated.column_iter().map(|column| column.norm()).product();

        let solution = if truncated.determinant().abs() > BASE_VECTOR_TOLERANCE * scale {
            truncated.lu().solve(&DVector::from_fn(n, |row, _| position[row]))
        } else {
            let basis = column_matrix(&self.vectors);
            let rhs = basis.transpose() * DVector::from_column_slice(position.as_slice());
            (basis.transpose() * &basis).lu().solve(&rhs)
        };

        let mut fractional = Vector3::zeros();
        if let Some(solution) = solution {
            for (i, value) in solution.iter().enumerate() {
                fractional[i] = *value;
            }
        }
        fractional
    }

    /// Reciprocal vectors `b_i` with `a_i . b_j = 2π δ_ij`, lying in the span of the
    /// primitive vectors
    pub fn reciprocal_vectors(&self) -> Vec<Cartesian> {
        let basis = column_matrix(&self.vectors);
        let gram = basis.transpose() * &basis;
        let inverse = match gram.try_inverse() {
            Some(inverse) => inverse,
            None => return Vec::new(),
        };

        let reciprocal = (2.0 * PI) * (&basis * inverse);
        reciprocal
            .column_iter()
            .map(|column| Cartesian::new(column[0], column[1], column[2]))
            .collect()
    }

    // ======================== INTROSPECTION ========================

    /// Check if any sublattice has a nonzero onsite diagonal
    pub fn has_onsite_energy(&self) -> bool {
        self.sublattices.iter().any(|s| !diagonal_is_zero(&s.energy))
    }

    /// Check if any sublattice has more than one orbital
    pub fn has_multiple_orbitals(&self) -> bool {
        self.sublattices.iter().any(|s| s.num_orbitals() != 1)
    }

    /// Check if any hopping energy has a nonzero imaginary part
    pub fn has_complex_hoppings(&self) -> bool {
        self.hoppings.iter().any(|h| !is_real(&h.energy))
    }

    // ======================== COMPILATION ========================

    /// Compile the registries into the id-indexed site structure used by solvers
    pub fn optimized_structure(&self) -> OptimizedLatticeStructure {
        OptimizedLatticeStructure::compile(&self.sublattices, &self.hoppings)
    }

    /// Upper bound on the nonzero entries per Hamiltonian row, for preallocation.
    ///
    /// For each site this counts the off-diagonal onsite slots plus the orbital columns of
    /// every incident hopping, and returns the maximum over sites.
    pub fn max_hoppings(&self) -> usize {
        self.optimized_structure()
            .iter()
            .map(|site| {
                let onsite = self.sublattices[site.alias].num_orbitals().saturating_sub(1);
                site.hoppings.iter().fold(onsite, |n, hopping| {
                    n + self.hoppings[hopping.family].energy.ncols()
                })
            })
            .max()
            .unwrap_or(0)
    }
}

/// 3 x n matrix with the given vectors as columns
fn column_matrix(vectors: &[Cartesian]) -> DMatrix<f64> {
    DMatrix::from_fn(3, vectors.len(), |row, col| vectors[col][row])
}
