use crate::interfaces::{Cartesian, Index3D};
use crate::lattice::Lattice;
use crate::Result;

// Standard lattice construction utilities for common tight-binding models.
// All of them use a single nearest-neighbor hopping family named "t".

/// Create a 1D chain along x with lattice parameter `a` and hopping `t`
pub fn linear_chain(a: f64, t: f64) -> Result<Lattice> {
    let mut lattice = Lattice::new(&[Cartesian::new(a, 0.0, 0.0)])?;
    lattice.add_sublattice("A", Cartesian::zeros(), 0.0)?;
    lattice.register_hopping_energy("t", t)?;
    lattice.add_hopping(Index3D::new(1, 0, 0), "A", "A", "t")?;
    Ok(lattice)
}

/// Create a square lattice with given lattice parameter and hopping
pub fn square_lattice(a: f64, t: f64) -> Result<Lattice> {
    let mut lattice = Lattice::new(&[Cartesian::new(a, 0.0, 0.0), Cartesian::new(0.0, a, 0.0)])?;
    lattice.add_sublattice("A", Cartesian::zeros(), 0.0)?;
    lattice.register_hopping_energy("t", t)?;
    lattice.add_hopping(Index3D::new(1, 0, 0), "A", "A", "t")?;
    lattice.add_hopping(Index3D::new(0, 1, 0), "A", "A", "t")?;
    Ok(lattice)
}

/// Create monolayer graphene: a hexagonal lattice with parameter `a` and two sublattices
/// `A` and `B` at carbon-carbon distance `a / sqrt(3)`
pub fn graphene_monolayer(a: f64, t: f64) -> Result<Lattice> {
    let a_cc = a / 3.0_f64.sqrt();
    let mut lattice = Lattice::new(&[
        Cartesian::new(a / 2.0, a * 3.0_f64.sqrt() / 2.0, 0.0),
        Cartesian::new(-a / 2.0, a * 3.0_f64.sqrt() / 2.0, 0.0),
    ])?;
    lattice.add_sublattice("A", Cartesian::new(0.0, -a_cc / 2.0, 0.0), 0.0)?;
    lattice.add_sublattice("B", Cartesian::new(0.0, a_cc / 2.0, 0.0), 0.0)?;
    lattice.register_hopping_energy("t", t)?;
    // Three nearest neighbors of A, all on sublattice B
    lattice.add_hopping(Index3D::new(0, 0, 0), "A", "B", "t")?;
    lattice.add_hopping(Index3D::new(-1, 0, 0), "A", "B", "t")?;
    lattice.add_hopping(Index3D::new(0, -1, 0), "A", "B", "t")?;
    Ok(lattice)
}

/// Create a simple cubic lattice with given lattice parameter and hopping
pub fn simple_cubic_lattice(a: f64, t: f64) -> Result<Lattice> {
    let mut lattice = Lattice::new(&[
        Cartesian::new(a, 0.0, 0.0),
        Cartesian::new(0.0, a, 0.0),
        Cartesian::new(0.0, 0.0, a),
    ])?;
    lattice.add_sublattice("A", Cartesian::zeros(), 0.0)?;
    lattice.register_hopping_energy("t", t)?;
    lattice.add_hopping(Index3D::new(1, 0, 0), "A", "A", "t")?;
    lattice.add_hopping(Index3D::new(0, 1, 0), "A", "A", "t")?;
    lattice.add_hopping(Index3D::new(0, 0, 1), "A", "A", "t")?;
    Ok(lattice)
}

/// Create an `n1 x n2` supercell of a square lattice, one sublattice per site.
///
/// Sites are named `A{i}_{j}` and all share the onsite energy of `A0_0` through aliases.
/// Used to stress the registries and the compiler with many sublattices.
pub fn square_supercell(a: f64, t: f64, n1: usize, n2: usize) -> Result<Lattice> {
    let (s1, s2) = (n1 as i32, n2 as i32);
    let mut lattice = Lattice::new(&[
        Cartesian::new(a * n1 as f64, 0.0, 0.0),
        Cartesian::new(0.0, a * n2 as f64, 0.0),
    ])?;

    let name = |i: i32, j: i32| format!("A{}_{}", i, j);
    for i in 0..s1 {
        for j in 0..s2 {
            let position = Cartesian::new(a * i as f64, a * j as f64, 0.0);
            if i == 0 && j == 0 {
                lattice.add_sublattice(&name(i, j), position, 0.0)?;
            } else {
                lattice.add_alias(&name(i, j), &name(0, 0), position)?;
            }
        }
    }

    lattice.register_hopping_energy("t", t)?;
    for i in 0..s1 {
        for j in 0..s2 {
            // Neighbors at +x and +y, wrapping into the next supercell at the boundary
            let x_neighbor = ((i + 1) % s1, j, (i + 1) / s1, 0);
            let y_neighbor = (i, (j + 1) % s2, 0, (j + 1) / s2);
            for (ni, nj, ci, cj) in [x_neighbor, y_neighbor] {
                lattice.add_hopping(Index3D::new(ci, cj, 0), &name(i, j), &name(ni, nj), "t")?;
            }
        }
    }
    Ok(lattice)
}
