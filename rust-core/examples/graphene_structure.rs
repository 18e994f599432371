//! Example building graphene by hand and inspecting the compiled structure
//!
//! This example shows the full workflow: primitive vectors, sublattices, a named
//! hopping family, hopping terms, and the id-indexed site table handed to a solver.
use tb_lattice::interfaces::{Cartesian, Index3D};
use tb_lattice::lattice::Lattice;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Building a Graphene Lattice ===\n");

    let a = 0.24595; // nm
    let a_cc = 0.142; // nm
    let t = -2.8; // eV

    // Example 1: Primitive vectors and sublattices
    println!("1. Primitive vectors and sublattices:");
    let mut lattice = Lattice::new(&[
        Cartesian::new(a / 2.0, a / 2.0 * 3.0_f64.sqrt(), 0.0),
        Cartesian::new(-a / 2.0, a / 2.0 * 3.0_f64.sqrt(), 0.0),
    ])?;
    let id_a = lattice.add_sublattice("A", Cartesian::new(0.0, -a_cc / 2.0, 0.0), 0.0)?;
    let id_b = lattice.add_sublattice("B", Cartesian::new(0.0, a_cc / 2.0, 0.0), 0.0)?;
    println!("   A -> id {}, B -> id {}", id_a, id_b);
    println!("   Reciprocal vectors: {:?}\n", lattice.reciprocal_vectors());

    // Example 2: Hoppings (each bond is given once, in one direction)
    println!("2. Hoppings:");
    lattice.register_hopping_energy("t", t)?;
    lattice.add_hopping(Index3D::new(0, 0, 0), "A", "B", "t")?;
    lattice.add_hopping(Index3D::new(-1, 0, 0), "A", "B", "t")?;
    lattice.add_hopping(Index3D::new(0, -1, 0), "A", "B", "t")?;
    println!("   {} terms in family 't'", lattice.hopping_family("t")?.terms.len());

    // The reverse bond is already implied
    if let Err(err) = lattice.add_hopping(Index3D::new(0, 0, 0), "B", "A", "t") {
        println!("   Rejected reverse bond: {}\n", err);
    }

    // Example 3: Compiled structure
    println!("3. Compiled structure:");
    let structure = lattice.optimized_structure();
    for (id, site) in structure.iter().enumerate() {
        println!("   site {} at {:?}", id, site.position.as_slice());
        for hopping in &site.hoppings {
            println!(
                "      -> sublattice {} in cell {:?} (conjugate: {})",
                hopping.sublattice,
                hopping.relative_index.as_slice(),
                hopping.is_conjugate
            );
        }
    }
    println!("   max hoppings per row: {}\n", lattice.max_hoppings());

    // Example 4: Derived lattice with a shifted origin
    println!("4. Shifted copy:");
    let shifted = lattice.with_offset(Cartesian::new(0.0, a_cc / 2.0, 0.0))?;
    println!("   original offset: {:?}", lattice.offset().as_slice());
    println!("   shifted offset:  {:?}", shifted.offset().as_slice());

    Ok(())
}
