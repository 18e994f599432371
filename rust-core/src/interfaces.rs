// Definitions that are used throughout all modules

use nalgebra::Vector3;

/// Position in cartesian coordinates
pub type Cartesian = Vector3<f64>;

/// Relative unit-cell index; components beyond the lattice dimensionality are ignored
pub type Index3D = Vector3<i32>;

/// Dense sublattice identifier, assigned in registration order starting at 0
pub type SubId = u8;

/// Dense hopping family identifier, assigned in registration order starting at 0
pub type HopId = u8;
