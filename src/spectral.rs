//! Spectral decomposition of a similarity graph.
//!
//! The clusterer does not build graphs or compute eigendecompositions; it
//! consumes them. [`SpectralDecomposition`] is the boundary type: one
//! eigenvector row per point, one eigenvalue per column, index-aligned.
//!
//! Eigendata is complex. A symmetric graph operator yields purely real
//! eigenpairs (use [`SpectralDecomposition::from_real`]), but non-symmetric
//! operators such as a random-walk Laplacian normalization can produce
//! complex pairs, and raising a negative or complex eigenvalue to a
//! fractional diffusion time is only well-defined in the complex plane.
//! Downstream geometry uses the real part only.

use num_complex::Complex32;

use crate::error::{Error, Result};

/// Eigendecomposition of a similarity graph over a fixed point set.
///
/// Row `i` of the eigenvector matrix holds the spectral coordinates of point
/// `i`; entry `l` of the eigenvalue vector belongs to column `l`. Column
/// order is whatever the producing decomposition chose (typically descending
/// eigenvalue magnitude); this type preserves it as-is.
#[derive(Clone, Debug)]
pub struct SpectralDecomposition {
    eigenvectors: Vec<Vec<Complex32>>,
    eigenvalues: Vec<Complex32>,
}

impl SpectralDecomposition {
    /// Create a decomposition from an n×m eigenvector matrix (row per point)
    /// and its length-m eigenvalue vector.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if there are no points.
    /// - [`Error::DimensionMismatch`] if any eigenvector row's width differs
    ///   from the number of eigenvalues.
    pub fn new(eigenvectors: Vec<Vec<Complex32>>, eigenvalues: Vec<Complex32>) -> Result<Self> {
        if eigenvectors.is_empty() {
            return Err(Error::EmptyInput);
        }

        let m = eigenvalues.len();
        for row in &eigenvectors {
            if row.len() != m {
                return Err(Error::DimensionMismatch {
                    expected: m,
                    found: row.len(),
                });
            }
        }

        Ok(Self {
            eigenvectors,
            eigenvalues,
        })
    }

    /// Create a decomposition from purely real eigendata.
    ///
    /// This is the common case: a symmetric similarity operator has a real
    /// spectrum. The data is widened to complex with zero imaginary parts.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SpectralDecomposition::new`].
    pub fn from_real(eigenvectors: Vec<Vec<f32>>, eigenvalues: Vec<f32>) -> Result<Self> {
        let eigenvectors = eigenvectors
            .into_iter()
            .map(|row| row.into_iter().map(|v| Complex32::new(v, 0.0)).collect())
            .collect();
        let eigenvalues = eigenvalues
            .into_iter()
            .map(|v| Complex32::new(v, 0.0))
            .collect();
        Self::new(eigenvectors, eigenvalues)
    }

    /// Number of points (rows).
    pub fn n_points(&self) -> usize {
        self.eigenvectors.len()
    }

    /// Number of spectral components (columns).
    pub fn n_components(&self) -> usize {
        self.eigenvalues.len()
    }

    /// The eigenvector matrix, one row per point.
    pub fn eigenvectors(&self) -> &[Vec<Complex32>] {
        &self.eigenvectors
    }

    /// The eigenvalue vector, index-aligned with eigenvector columns.
    pub fn eigenvalues(&self) -> &[Complex32] {
        &self.eigenvalues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_real_shapes() {
        let graph = SpectralDecomposition::from_real(
            vec![vec![1.0, 0.5], vec![1.0, -0.5], vec![1.0, 0.0]],
            vec![1.0, 0.9],
        )
        .unwrap();

        assert_eq!(graph.n_points(), 3);
        assert_eq!(graph.n_components(), 2);
        assert_eq!(graph.eigenvectors()[1][1], Complex32::new(-0.5, 0.0));
        assert_eq!(graph.eigenvalues()[0], Complex32::new(1.0, 0.0));
    }

    #[test]
    fn test_empty_rejected() {
        let result = SpectralDecomposition::from_real(vec![], vec![1.0]);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = SpectralDecomposition::from_real(
            vec![vec![1.0, 0.5], vec![1.0]],
            vec![1.0, 0.9],
        );
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_row_width_must_match_eigenvalue_count() {
        let result =
            SpectralDecomposition::from_real(vec![vec![1.0, 0.5], vec![1.0, -0.5]], vec![1.0]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_zero_components_allowed() {
        // Degenerate but representable: no spectral information at all.
        let graph = SpectralDecomposition::from_real(vec![vec![], vec![]], vec![]).unwrap();
        assert_eq!(graph.n_points(), 2);
        assert_eq!(graph.n_components(), 0);
    }
}
