//! Tight-binding lattice model library
//!
//! This library describes crystal lattices for tight-binding simulations: primitive vectors,
//! sublattice sites with their onsite energy matrices, and hopping terms addressed by name and
//! relative unit-cell index. A built [`Lattice`](lattice::Lattice) compiles into an
//! [`OptimizedLatticeStructure`](lattice::OptimizedLatticeStructure), the id-indexed site table
//! that a Hamiltonian solver consumes.

pub mod config;
pub mod error;
pub mod interfaces;
pub mod lattice;

pub use error::{ErrorKind, LatticeError};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
