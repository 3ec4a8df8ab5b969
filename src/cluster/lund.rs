//! LUND: Learning by Unsupervised Nonlinear Diffusion.
//!
//! # The Algorithm (Maggioni & Murphy, 2019)
//!
//! LUND is a density-based clustering algorithm that measures proximity with
//! diffusion distances instead of ambient distances. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary, nonlinear shape
//! - Can estimate the number of clusters from the data
//! - Separates cluster cores by how well diffusion on the similarity graph
//!   mixes between them
//!
//! ## Core Concepts
//!
//! - **Diffusion distance**: Euclidean distance between points embedded by
//!   the graph's eigenvectors scaled with `eigenvalue^t` (see
//!   [`super::diffusion`]).
//! - **Mode score**: `Dt(x) = rho_t(x) * p(x)`, where `p` is a density
//!   estimate and `rho_t(x)` is the diffusion distance from `x` to its
//!   nearest point of strictly higher density (for the globally densest
//!   points: to the farthest point instead). High-density points far from
//!   any denser point are cluster modes, the same intuition as
//!   density-peak clustering (Rodriguez & Laio, 2014), in diffusion
//!   geometry.
//! - **Knee heuristic**: modes separate from non-modes by a steep drop in
//!   the ranked scores; the position of the largest consecutive-score ratio
//!   doubles as the cluster count.
//!
//! ## Algorithm Steps
//!
//! 1. Embed the spectral decomposition at diffusion time `t` and compute
//!    all pairwise diffusion distances.
//! 2. Score every point and rank by score, descending.
//! 3. Resolve the cluster count K (supplied, or from the knee heuristic).
//! 4. Seed the top K-1 ranked points as labeled modes, then sweep the
//!    remaining points in order of decreasing density, attaching each to the
//!    label of its nearest at-least-as-dense labeled neighbor.
//!
//! ## Complexity
//!
//! - **Time**: O(n²·m) for the distance matrix, O(n²) for the propagation
//!   sweep, O(n log n) for the sorts.
//! - **Space**: O(n²) for the distance matrix.
//!
//! ## When to Use
//!
//! - A similarity-graph decomposition of the data already exists (or is
//!   cheap to produce) and clusters are non-convex
//! - Cluster cores are density peaks but ambient Euclidean geometry is
//!   misleading (manifold-shaped data)
//!
//! ## Limitations
//!
//! - Consumes a spectral decomposition and a density estimate; it does not
//!   build either (graph construction and KDE are the caller's concern)
//! - Dense O(n²) working set bounds the practical dataset size
//!
//! ## References
//!
//! Maggioni, M., Murphy, J. M. (2019). "Learning by Unsupervised Nonlinear
//! Diffusion." Journal of Machine Learning Research, 20(160).
//!
//! Rodriguez, A., Laio, A. (2014). "Clustering by fast search and find of
//! density peaks." Science, 344(6191).

use log::{debug, trace};

use super::diffusion::{diffusion_distances, diffusion_map};
use super::util::{argmax, argsort_desc};
use crate::error::{Error, Result};
use crate::spectral::SpectralDecomposition;

/// LUND clustering algorithm.
#[derive(Debug, Clone)]
pub struct Lund {
    /// Diffusion time: exponent applied to the eigenvalues.
    diffusion_time: f32,
    /// Cluster count, if known. `None` engages the knee heuristic.
    n_clusters: Option<usize>,
}

impl Lund {
    /// Create a new LUND clusterer.
    ///
    /// # Arguments
    ///
    /// * `diffusion_time` - Exponent `t` applied to the eigenvalues when
    ///   embedding. Larger values suppress higher-order spectral components;
    ///   the value is passed through to the embedding unvalidated.
    pub fn new(diffusion_time: f32) -> Self {
        Self {
            diffusion_time,
            n_clusters: None,
        }
    }

    /// Set the diffusion time.
    pub fn with_diffusion_time(mut self, diffusion_time: f32) -> Self {
        self.diffusion_time = diffusion_time;
        self
    }

    /// Supply the number of clusters instead of inferring it.
    ///
    /// Must be in `[1, n]` for a dataset of `n` points; `fit_predict`
    /// rejects anything else.
    pub fn with_n_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = Some(n_clusters);
        self
    }

    /// Cluster the points of `graph` using the pointwise `density` estimate.
    ///
    /// `density` must be index-aligned with the decomposition's rows. The
    /// call is a pure function of its inputs: identical inputs produce
    /// identical output, and no state survives the call.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `density` is not one entry per
    ///   point.
    /// - [`Error::InvalidClusterCount`] if a supplied cluster count is
    ///   outside `[1, n]`.
    /// - [`Error::PropagationStalled`] if some point has no labeled
    ///   candidate of greater-or-equal density (possible when score ties
    ///   push every globally-densest point out of the mode set).
    pub fn fit_predict(&self, graph: &SpectralDecomposition, density: &[f32]) -> Result<LundFit> {
        let n = graph.n_points();
        if density.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: density.len(),
            });
        }
        if let Some(k) = self.n_clusters {
            if k < 1 || k > n {
                return Err(Error::InvalidClusterCount {
                    requested: k,
                    n_items: n,
                });
            }
        }

        let map = diffusion_map(graph, self.diffusion_time);
        let dists = diffusion_distances(&map);

        let scores = mode_scores(&dists, density);
        let ranking = argsort_desc(&scores);

        let n_clusters = match self.n_clusters {
            Some(k) => k,
            None => infer_cluster_count(&scores, &ranking),
        };
        debug!(
            "clustering {n} points at diffusion time {}: {n_clusters} clusters",
            self.diffusion_time
        );

        let labels = propagate_labels(&dists, density, &ranking, n_clusters)?;

        Ok(LundFit {
            labels,
            n_clusters,
            scores,
        })
    }
}

/// Result of a LUND fit.
#[derive(Clone, Debug, PartialEq)]
pub struct LundFit {
    /// Cluster label per point.
    ///
    /// For `n_clusters > 1` labels are 0-based cluster ids; for the
    /// degenerate single-cluster case every entry is the literal value `1`.
    pub labels: Vec<usize>,

    /// The resolved number of clusters (supplied or inferred).
    pub n_clusters: usize,

    /// Mode score `Dt` per point, exposed so callers can inspect the
    /// ranking behind the knee heuristic or pick a cluster count manually.
    pub scores: Vec<f32>,
}

/// Mode score per point: `rt[i] * density[i]`.
///
/// `rt[i]` is the diffusion distance from `i` to its nearest strictly
/// denser point. Points tied at the global maximum density have no denser
/// point, so each of them takes its distance to the farthest point instead.
fn mode_scores(dists: &[f32], density: &[f32]) -> Vec<f32> {
    let n = density.len();
    let max_density = density.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    (0..n)
        .map(|i| {
            let row = &dists[i * n..(i + 1) * n];
            let rt = if density[i] < max_density {
                // Nearest strictly denser point. The set is non-empty: some
                // point attains the maximum density.
                row.iter()
                    .zip(density)
                    .filter(|&(_, &p)| p > density[i])
                    .map(|(&d, _)| d)
                    .fold(f32::INFINITY, f32::min)
            } else {
                // Farthest point from a global density maximum.
                row.iter().copied().fold(0.0, f32::max)
            };
            rt * density[i]
        })
        .collect()
}

/// Knee heuristic: the position of the largest ratio between consecutive
/// ranked scores is used as the cluster count.
///
/// Degenerate ratios are preserved: a zero score yields an infinite ratio,
/// and 0/0 yields NaN, which outranks everything under IEEE total ordering.
/// An empty ratio sequence (n < 3) and a knee at position 0 both resolve to
/// a single cluster: position 0 would name a cluster count of zero, which
/// leaves no modes to seed.
fn infer_cluster_count(scores: &[f32], ranking: &[usize]) -> usize {
    let n = scores.len();
    if n < 3 {
        return 1;
    }

    let ratios: Vec<f32> = (0..n - 2)
        .map(|k| scores[ranking[k]] / scores[ranking[k + 1]])
        .collect();

    match argmax(&ratios) {
        None | Some(0) => 1,
        Some(knee) => knee,
    }
}

/// Seed the top `n_clusters - 1` ranked points as modes and attach every
/// other point to the label of its nearest labeled neighbor among points of
/// greater-or-equal density, sweeping in order of decreasing density.
///
/// Unlabeled points are `None`; mode id 0 is an ordinary cluster id.
/// Equidistant candidates resolve to the lowest index.
fn propagate_labels(
    dists: &[f32],
    density: &[f32],
    ranking: &[usize],
    n_clusters: usize,
) -> Result<Vec<usize>> {
    let n = density.len();

    if n_clusters == 1 {
        // Degenerate single-cluster case: the label is the value 1 for
        // every point, not a 0-based id.
        return Ok(vec![1; n]);
    }

    let mut labels: Vec<Option<usize>> = vec![None; n];
    for (id, &mode) in ranking[..n_clusters - 1].iter().enumerate() {
        labels[mode] = Some(id);
    }
    trace!("seeded {} modes by score rank", n_clusters - 1);

    for &i in &argsort_desc(density) {
        if labels[i].is_some() {
            continue;
        }

        let mut nearest: Option<usize> = None;
        for j in 0..n {
            if labels[j].is_none() || density[j] < density[i] {
                continue;
            }
            match nearest {
                Some(b) if dists[i * n + j] >= dists[i * n + b] => {}
                _ => nearest = Some(j),
            }
        }

        match nearest {
            Some(j) => labels[i] = labels[j],
            None => {
                return Err(Error::PropagationStalled {
                    point: i,
                    density: density[i],
                })
            }
        }
    }

    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            label.ok_or(Error::PropagationStalled {
                point: i,
                density: density[i],
            })
        })
        .collect()
}
