// Constants

// Tolerances
pub const BASE_VECTOR_TOLERANCE: f64 = 1e-10; // Unit-vector Gram determinant floor
pub const ZERO_TOLERANCE: f64 = 1e-12; // For "is zero" checks on energy matrices

// Offsets
// Largest origin shift, in fractions of a primitive vector
pub const MAX_OFFSET_FRACTION: f64 = 0.55;

// Defaults
pub const DEFAULT_MIN_NEIGHBORS: usize = 1;
pub const ANONYMOUS_HOPPING_PREFIX: &str = "__anonymous__";
