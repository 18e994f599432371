use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::config::ZERO_TOLERANCE;
use crate::error::LatticeError;
use crate::lattice::lattice_sublattices::Sublattice;
use crate::Result;

/// Check if every entry below the main diagonal is negligible.
///
/// Entries are compared against the largest magnitude found on or above the diagonal,
/// so an all-zero matrix counts as upper triangular.
pub fn is_upper_triangular(matrix: &DMatrix<Complex64>) -> bool {
    let mut max_upper = 0.0_f64;
    for col in 0..matrix.ncols() {
        for row in 0..matrix.nrows().min(col + 1) {
            max_upper = max_upper.max(matrix[(row, col)].norm());
        }
    }

    let threshold = max_upper * ZERO_TOLERANCE;
    (0..matrix.ncols()).all(|col| {
        ((col + 1)..matrix.nrows()).all(|row| matrix[(row, col)].norm() <= threshold)
    })
}

/// Check if the matrix is exactly equal to its conjugate transpose
pub fn is_hermitian(matrix: &DMatrix<Complex64>) -> bool {
    matrix.is_square() && *matrix == matrix.adjoint()
}

/// Validate the structure of an onsite energy matrix.
///
/// The matrix must be square, its main diagonal must be real and it must be either
/// upper triangular (the lower half follows from Hermiticity) or fully Hermitian.
pub fn validate_onsite_energy(name: &str, energy: &DMatrix<Complex64>) -> Result<()> {
    if !energy.is_square() {
        return Err(LatticeError::NonSquareOnsite {
            name: name.to_string(),
            rows: energy.nrows(),
            cols: energy.ncols(),
        });
    }

    if !energy.diagonal().iter().all(|v| v.im.abs() <= ZERO_TOLERANCE) {
        return Err(LatticeError::ComplexOnsiteDiagonal {
            name: name.to_string(),
        });
    }

    if !is_upper_triangular(energy) && !is_hermitian(energy) {
        return Err(LatticeError::NonHermitianOnsite {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Validate that a hopping matrix connects the orbitals of `from` to the orbitals of `to`
pub fn validate_hopping_shape(
    from: &Sublattice,
    to: &Sublattice,
    family_name: &str,
    energy: &DMatrix<Complex64>,
) -> Result<()> {
    if from.num_orbitals() != energy.nrows() || to.num_orbitals() != energy.ncols() {
        return Err(LatticeError::HoppingSizeMismatch {
            from: from.name.clone(),
            from_orbitals: from.num_orbitals(),
            to: to.name.clone(),
            to_orbitals: to.num_orbitals(),
            family: family_name.to_string(),
            rows: energy.nrows(),
            cols: energy.ncols(),
        });
    }
    Ok(())
}
