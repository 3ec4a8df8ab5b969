//! LUND on a simple 1-D dataset.

use lund::{Lund, SpectralDecomposition};

fn main() {
    // Three well-separated blobs on a line.
    #[rustfmt::skip]
    let positions: Vec<f32> = vec![
        // Blob A (near 0)
        0.0, 0.2, 0.4, 0.6, 0.8,
        // Blob B (near 5)
        5.0, 5.2, 5.4, 5.6, 5.8,
        // Blob C (near 10)
        10.0, 10.2, 10.4, 10.6, 10.8,
    ];

    // Naive Gaussian kernel density estimate. Density estimation is the
    // caller's concern; the library only consumes the vector.
    let density: Vec<f32> = positions
        .iter()
        .map(|&x| {
            positions
                .iter()
                .map(|&y| (-(x - y) * (x - y) / 0.5).exp())
                .sum()
        })
        .collect();

    // Identity embedding: a single component with eigenvalue 1, so the
    // diffusion coordinates at t = 1 are the positions themselves.
    let graph = SpectralDecomposition::from_real(
        positions.iter().map(|&x| vec![x]).collect(),
        vec![1.0],
    )
    .unwrap();

    // --- Supplied cluster count ---
    let fit = Lund::new(1.0)
        .with_n_clusters(4)
        .fit_predict(&graph, &density)
        .unwrap();
    println!("=== LUND (k = 4) ===");
    for (i, label) in fit.labels.iter().enumerate() {
        println!(
            "  point {:2} at {:5.1} (density {:5.2}, score {:6.2}) => cluster {}",
            i, positions[i], density[i], fit.scores[i], label
        );
    }

    // --- Inferred cluster count ---
    let fit = Lund::new(1.0).fit_predict(&graph, &density).unwrap();
    println!("\n=== LUND (inferred k = {}) ===", fit.n_clusters);
    for (i, label) in fit.labels.iter().enumerate() {
        println!("  point {:2} at {:5.1} => cluster {}", i, positions[i], label);
    }
}
