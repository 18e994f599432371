//! Error types for lattice construction and compilation

use thiserror::Error;

/// Broad category of a [`LatticeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Matrix shape or structure does not fit the declared orbitals
    Shape,
    /// Blank, duplicate or unknown name / identifier
    Naming,
    /// A registry ran out of identifiers
    Capacity,
    /// Well-formed input that does not describe a valid model
    Semantic,
    /// Invalid primitive vectors
    Geometry,
}

/// Errors raised while building or querying a [`Lattice`](crate::lattice::Lattice)
///
/// A call that fails leaves the lattice exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    /// Onsite energy given as a non-square matrix
    #[error("The onsite energy of sublattice '{name}' must be a real vector or a square matrix, got ({rows}, {cols})")]
    NonSquareOnsite {
        name: String,
        rows: usize,
        cols: usize,
    },

    /// Onsite energy with a complex main diagonal
    #[error("The main diagonal of the onsite energy of sublattice '{name}' must be real")]
    ComplexOnsiteDiagonal { name: String },

    /// Onsite energy that is neither upper triangular nor Hermitian
    #[error("The onsite energy matrix of sublattice '{name}' must be upper triangular or Hermitian")]
    NonHermitianOnsite { name: String },

    /// Hopping matrix shape does not match the orbitals of the two sublattices
    #[error("Hopping size mismatch: from '{from}' ({from_orbitals}) to '{to}' ({to_orbitals}) with matrix '{family}' ({rows}, {cols})")]
    HoppingSizeMismatch {
        from: String,
        from_orbitals: usize,
        to: String,
        to_orbitals: usize,
        family: String,
        rows: usize,
        cols: usize,
    },

    /// Empty sublattice or hopping name
    #[error("{entity} name can't be blank")]
    BlankName { entity: &'static str },

    #[error("Sublattice '{0}' already exists")]
    DuplicateSublattice(String),

    #[error("Hopping '{0}' already exists")]
    DuplicateHopping(String),

    #[error("There is no sublattice named '{0}'")]
    UnknownSublattice(String),

    #[error("There is no sublattice with ID = {0}")]
    UnknownSublatticeId(usize),

    #[error("There is no hopping named '{0}'")]
    UnknownHopping(String),

    #[error("There is no hopping with ID = {0}")]
    UnknownHoppingId(usize),

    #[error("Exceeded maximum number of unique sublattices: {max}")]
    TooManySublattices { max: usize },

    #[error("Exceeded maximum number of unique hoppings energies: {max}")]
    TooManyHoppings { max: usize },

    /// Same-sublattice hopping inside the same unit cell
    #[error("Hoppings from/to the same sublattice '{sublattice}' must have a non-zero relative index in at least one direction. Don't define onsite energy here.")]
    OnsiteHopping { sublattice: String },

    /// Hopping already registered, directly or as its conjugate
    #[error("The hopping {relative_index:?} from '{from}' to '{to}' already exists")]
    DuplicateHoppingTerm {
        relative_index: [i32; 3],
        from: String,
        to: String,
    },

    /// Origin shift larger than allowed in fractional coordinates
    #[error("Lattice origin must not be moved by more than {limit} of a primitive lattice vector, got fractional offset {fractional:?}")]
    OffsetOutOfRange { fractional: [f64; 3], limit: f64 },

    #[error("A lattice needs 1, 2 or 3 primitive vectors, got {0}")]
    InvalidVectorCount(usize),

    #[error("Primitive vector a{} is zero", .0 + 1)]
    ZeroVector(usize),

    #[error("Primitive vectors are linearly dependent")]
    SingularLatticeVectors,
}

impl LatticeError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        use LatticeError::*;
        match self {
            NonSquareOnsite { .. }
            | ComplexOnsiteDiagonal { .. }
            | NonHermitianOnsite { .. }
            | HoppingSizeMismatch { .. } => ErrorKind::Shape,
            BlankName { .. }
            | DuplicateSublattice(_)
            | DuplicateHopping(_)
            | UnknownSublattice(_)
            | UnknownSublatticeId(_)
            | UnknownHopping(_)
            | UnknownHoppingId(_) => ErrorKind::Naming,
            TooManySublattices { .. } | TooManyHoppings { .. } => ErrorKind::Capacity,
            OnsiteHopping { .. } | DuplicateHoppingTerm { .. } | OffsetOutOfRange { .. } => {
                ErrorKind::Semantic
            }
            InvalidVectorCount(_) | ZeroVector(_) | SingularLatticeVectors => ErrorKind::Geometry,
        }
    }
}
