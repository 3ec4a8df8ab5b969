//! Diffusion-geometry clustering.
//!
//! This module implements LUND (Learning by Unsupervised Nonlinear
//! Diffusion) as a single-pass batch computation over dense matrices, in
//! four stages:
//!
//! 1. **Diffusion map**: eigenvectors scaled by `eigenvalue^t`
//!    ([`diffusion_map`]).
//! 2. **Diffusion distances**: all pairwise Euclidean distances in the
//!    embedded space ([`diffusion_distances`]).
//! 3. **Mode detection**: a per-point score combining density with a local
//!    diffusion-distance statistic; the ranked scores drive cluster-count
//!    selection.
//! 4. **Label propagation**: top-ranked points seed the clusters, and
//!    every other point joins its nearest denser labeled neighbor.
//!
//! The stages feed strictly forward; there is no iteration and no
//! randomness, so a fit is a pure function of its inputs.
//!
//! ## Usage
//!
//! ```rust
//! use lund::{Lund, SpectralDecomposition};
//!
//! // Trivial one-component decomposition: diffusion coordinates at t = 1
//! // are the 1-D positions themselves.
//! let graph = SpectralDecomposition::from_real(
//!     vec![vec![0.0], vec![1.0], vec![2.0], vec![10.0], vec![11.0], vec![12.0]],
//!     vec![1.0],
//! )
//! .unwrap();
//! let density = [1.0, 5.0, 1.0, 1.0, 4.0, 1.0];
//!
//! let fit = Lund::new(1.0)
//!     .with_n_clusters(3)
//!     .fit_predict(&graph, &density)
//!     .unwrap();
//!
//! assert_eq!(fit.labels, vec![0, 0, 0, 1, 1, 1]);
//! ```

mod diffusion;
mod lund;
mod util;

pub use diffusion::{diffusion_distances, diffusion_map};
pub use lund::{Lund, LundFit};
