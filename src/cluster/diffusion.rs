//! Diffusion maps and diffusion distances.
//!
//! A diffusion map embeds graph vertices using the spectrum of a diffusion
//! operator: coordinate `l` of point `i` is `eigenvector[i][l] *
//! eigenvalue[l]^t`, where `t` is the diffusion time. Larger `t` attenuates
//! the higher-order (smaller-eigenvalue) components, so Euclidean distance
//! in the embedded space (the *diffusion distance*) reflects connectivity
//! at that time scale rather than raw ambient distance (Coifman & Lafon,
//! 2006).
//!
//! Eigenvalues are exponentiated in the complex plane, so a negative or
//! complex eigenvalue under a fractional `t` yields its complex principal
//! power rather than NaN. Distances are taken over the real parts of the
//! embedded coordinates; imaginary parts never contribute.

use num_complex::Complex32;

use crate::spectral::SpectralDecomposition;

/// Embed the decomposition at diffusion time `t`.
///
/// Returns an n×m coordinate matrix, one row per point: eigenvector column
/// `l` scaled by `eigenvalue[l]^t`. The exponent is applied as a complex
/// principal power and is deliberately unvalidated: negative, fractional,
/// and zero `t` all produce whatever the exponentiation defines.
pub fn diffusion_map(graph: &SpectralDecomposition, t: f32) -> Vec<Vec<Complex32>> {
    let scales: Vec<Complex32> = graph.eigenvalues().iter().map(|l| l.powf(t)).collect();

    graph
        .eigenvectors()
        .iter()
        .map(|row| row.iter().zip(&scales).map(|(v, s)| v * s).collect())
        .collect()
}

/// Pairwise Euclidean distances between the real parts of diffusion
/// coordinates.
///
/// Returns a flat row-major n×n matrix (entry `(i, j)` at `i * n + j`).
/// Each unordered pair is computed once and mirrored, so the matrix is
/// exactly symmetric with an exactly zero diagonal.
pub fn diffusion_distances(map: &[Vec<Complex32>]) -> Vec<f32> {
    let n = map.len();
    let mut dists = vec![0.0f32; n * n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = real_euclidean(&map[i], &map[j]);
            dists[i * n + j] = d;
            dists[j * n + i] = d;
        }
    }

    dists
}

#[inline]
fn real_euclidean(a: &[Complex32], b: &[Complex32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x.re - y.re;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::SpectralDecomposition;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_time_scales_columns_by_eigenvalue() {
        let graph = SpectralDecomposition::from_real(
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![1.0, 0.5],
        )
        .unwrap();

        let map = diffusion_map(&graph, 1.0);

        assert_abs_diff_eq!(map[0][0].re, 1.0);
        assert_abs_diff_eq!(map[0][1].re, 1.0);
        assert_abs_diff_eq!(map[1][0].re, 3.0);
        assert_abs_diff_eq!(map[1][1].re, 2.0);
    }

    #[test]
    fn test_zero_time_leaves_eigenvectors_unscaled() {
        let graph = SpectralDecomposition::from_real(
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
            vec![0.7, 0.2],
        )
        .unwrap();

        let map = diffusion_map(&graph, 0.0);

        assert_abs_diff_eq!(map[0][1].re, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(map[1][0].re, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_eigenvalue_fractional_time_goes_complex() {
        // (-4)^0.5 is the principal complex root 2i: the real part collapses
        // to ~0 and the magnitude moves to the imaginary axis.
        let graph =
            SpectralDecomposition::from_real(vec![vec![1.0], vec![2.0]], vec![-4.0]).unwrap();

        let map = diffusion_map(&graph, 0.5);

        assert_abs_diff_eq!(map[0][0].re, 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(map[0][0].im, 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(map[1][0].im, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_distances_symmetric_zero_diagonal() {
        let graph = SpectralDecomposition::from_real(
            vec![vec![0.0, 0.0], vec![3.0, 4.0], vec![-1.0, 1.0]],
            vec![1.0, 1.0],
        )
        .unwrap();
        let map = diffusion_map(&graph, 1.0);

        let n = map.len();
        let dists = diffusion_distances(&map);

        for i in 0..n {
            assert_eq!(dists[i * n + i], 0.0);
            for j in 0..n {
                assert_eq!(dists[i * n + j], dists[j * n + i]);
            }
        }
        assert_abs_diff_eq!(dists[1], 5.0);
    }

    #[test]
    fn test_imaginary_parts_do_not_contribute() {
        let map = vec![
            vec![Complex32::new(1.0, 100.0)],
            vec![Complex32::new(1.0, -50.0)],
        ];

        let dists = diffusion_distances(&map);
        assert_eq!(dists[1], 0.0);
    }
}
