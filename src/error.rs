use thiserror::Error;

/// Errors returned by the clustering algorithm in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input contains no points.
    #[error("empty input")]
    EmptyInput,

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Index-aligned inputs disagree on their shape.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Label propagation reached a point with no labeled candidate of
    /// greater-or-equal density.
    #[error("label propagation stalled at point {point} (density {density}): no labeled candidate of greater-or-equal density")]
    PropagationStalled {
        /// Index of the point that could not be labeled.
        point: usize,
        /// Density of that point.
        density: f32,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
