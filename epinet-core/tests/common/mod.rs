use epinet_core::{Network, NetworkBuilder};

/// Builds a seeded network of `size` nodes with freshly drawn values.
#[must_use]
pub fn seeded_network(size: usize, seed: u64) -> Network {
    NetworkBuilder::new()
        .with_size(size)
        .with_rng_seed(seed)
        .build()
}

/// Mean and population standard deviation of `samples`.
#[must_use]
pub fn moments(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
