//! Builder utilities for configuring [`Network`] instances.
//!
//! Collects the initial node count and generator seed so callers can create
//! reproducible networks in a single expression.

use crate::{
    network::Network,
    random::{DEFAULT_RNG_SEED, SeededRng},
};

/// Configures and constructs [`Network`] instances backed by [`SeededRng`].
///
/// # Examples
/// ```
/// use epinet_core::NetworkBuilder;
///
/// let network = NetworkBuilder::new()
///     .with_size(16)
///     .with_rng_seed(9)
///     .build();
/// assert_eq!(network.size(), 16);
/// assert_eq!(network.source().seed(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    size: usize,
    rng_seed: u64,
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self {
            size: 0,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

impl NetworkBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::{DEFAULT_RNG_SEED, NetworkBuilder};
    ///
    /// let builder = NetworkBuilder::new();
    /// assert_eq!(builder.size(), 0);
    /// assert_eq!(builder.rng_seed(), DEFAULT_RNG_SEED);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes the network starts with.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Seeds the generator so value draws and link generation are reproducible.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Returns the configured generator seed.
    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// Constructs the network, drawing initial values when `size > 0`.
    #[must_use]
    pub fn build(self) -> Network {
        let mut network = Network::with_source(SeededRng::new(self.rng_seed));
        if self.size > 0 {
            network.resize(self.size);
        }
        network
    }
}
