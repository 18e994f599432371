use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::ZERO_TOLERANCE;

/// Energy term accepted by sublattice and hopping registration.
///
/// Every variant is normalized to a complex matrix by [`Energy::into_matrix`]:
/// scalars become 1x1 matrices and a real vector becomes a diagonal matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Energy {
    Real(f64),
    Complex(Complex64),
    /// One real energy per orbital
    Diagonal(DVector<f64>),
    Matrix(DMatrix<Complex64>),
}

impl Energy {
    pub fn into_matrix(self) -> DMatrix<Complex64> {
        match self {
            Energy::Real(value) => DMatrix::from_element(1, 1, Complex64::new(value, 0.0)),
            Energy::Complex(value) => DMatrix::from_element(1, 1, value),
            Energy::Diagonal(values) => {
                DMatrix::from_diagonal(&values.map(|v| Complex64::new(v, 0.0)))
            }
            Energy::Matrix(matrix) => matrix,
        }
    }
}

impl From<f64> for Energy {
    fn from(value: f64) -> Self {
        Energy::Real(value)
    }
}

impl From<Complex64> for Energy {
    fn from(value: Complex64) -> Self {
        Energy::Complex(value)
    }
}

impl From<DVector<f64>> for Energy {
    fn from(values: DVector<f64>) -> Self {
        Energy::Diagonal(values)
    }
}

impl From<Vec<f64>> for Energy {
    fn from(values: Vec<f64>) -> Self {
        Energy::Diagonal(DVector::from_vec(values))
    }
}

impl From<DMatrix<Complex64>> for Energy {
    fn from(matrix: DMatrix<Complex64>) -> Self {
        Energy::Matrix(matrix)
    }
}

impl From<DMatrix<f64>> for Energy {
    fn from(matrix: DMatrix<f64>) -> Self {
        Energy::Matrix(matrix.map(|v| Complex64::new(v, 0.0)))
    }
}

/// Check if every element is zero up to [`ZERO_TOLERANCE`]
pub fn is_zero<'a>(values: impl IntoIterator<Item = &'a f64>) -> bool {
    values.into_iter().all(|v| v.abs() <= ZERO_TOLERANCE)
}

/// Check if the main diagonal has no nonzero entry
pub fn diagonal_is_zero(matrix: &DMatrix<Complex64>) -> bool {
    matrix.diagonal().iter().all(|v| v.norm() <= ZERO_TOLERANCE)
}

/// Check if no element has a nonzero imaginary part
pub fn is_real(matrix: &DMatrix<Complex64>) -> bool {
    is_zero(matrix.iter().map(|v| &v.im))
}
