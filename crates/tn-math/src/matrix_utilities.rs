//! Symmetric eigen-decomposition and the symmetric matrix square root.

use nalgebra::{DMatrix, DVector};
use tn_core::{Real, Result};

/// Eigenvalue decomposition of a symmetric real matrix.
///
/// Returns `(eigenvalues, eigenvectors)` where each column of the
/// eigenvectors matrix is the eigenvector for the corresponding eigenvalue.
pub fn symmetric_eigen(m: &DMatrix<Real>) -> Result<(DVector<Real>, DMatrix<Real>)> {
    tn_core::ensure!(
        m.nrows() == m.ncols(),
        "matrix must be square, got {}×{}",
        m.nrows(),
        m.ncols()
    );
    let eigen = m.clone().symmetric_eigen();
    Ok((eigen.eigenvalues, eigen.eigenvectors))
}

/// The unique symmetric positive-semidefinite square root of a symmetric
/// PSD matrix.
///
/// Factors `M = Q·Λ·Qᵀ` and returns `S = Q·√Λ·Qᵀ`, which satisfies
/// `S·S = M` and `S = Sᵀ`. Eigenvalues that come out negative from
/// floating-point noise on a near-singular input are clamped to zero
/// before the square root, so the result stays real. An indefinite input
/// (genuinely negative eigenvalues) yields the square root of its nearest
/// PSD projection rather than an error.
pub fn symmetric_sqrt(m: &DMatrix<Real>) -> Result<DMatrix<Real>> {
    let (eigenvalues, eigenvectors) = symmetric_eigen(m)?;
    let sqrt_diag = DMatrix::from_diagonal(
        &eigenvalues.map(|ev| if ev > 0.0 { ev.sqrt() } else { 0.0 }),
    );
    Ok(&eigenvectors * sqrt_diag * eigenvectors.transpose())
}
