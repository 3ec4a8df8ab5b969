//! Diffusion-based density clustering.
//!
//! `lund` implements Learning by Unsupervised Nonlinear Diffusion (Maggioni
//! & Murphy, 2019): cluster modes are density peaks that sit far from any
//! denser point *in diffusion distance*, and every remaining point follows
//! its nearest denser labeled neighbor.
//!
//! The crate clusters; it does not build graphs, eigendecompose, or
//! estimate density. Callers bring a [`SpectralDecomposition`] (eigenvector
//! matrix + eigenvalue vector of a similarity graph) and a per-point
//! density vector, and get back one label per point, the resolved cluster
//! count, and the mode scores; see [`cluster::Lund`].

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod spectral;

pub use cluster::{diffusion_distances, diffusion_map, Lund, LundFit};
pub use error::{Error, Result};
pub use spectral::SpectralDecomposition;
