//! Randomised link generation with Poisson-distributed degree targets.

use tracing::{Span, field, instrument, trace};

use crate::{
    error::{NetworkError, Result},
    random::RandomSource,
};

use super::Network;

impl<R: RandomSource> Network<R> {
    /// Replaces every link with a fresh random link set and returns the
    /// number of links created.
    ///
    /// Each node draws a target from Poisson(`mean_degree`). Nodes are then
    /// visited in ascending index order; each visit shuffles all node indices
    /// afresh and walks the permutation attempting [`Network::add_link`] until
    /// the node has made `target` new links or the permutation runs out.
    /// Targets bound the links a node initiates, so realised degrees differ
    /// from the draws: links made by earlier nodes count toward later ones.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidMeanDegree`] when `mean_degree` is
    /// negative or non-finite, and [`NetworkError::Distribution`] when the
    /// random source rejects it. Links are left untouched on error.
    ///
    /// # Examples
    /// ```
    /// use epinet_core::{Network, SeededRng};
    ///
    /// let mut network = Network::with_source(SeededRng::new(3));
    /// network.resize(50);
    /// let created = network.random_connect(4.0)?;
    /// assert_eq!(created, network.link_count());
    /// network.invariants().check_all().expect("random links stay well formed");
    ///
    /// assert_eq!(network.random_connect(0.0)?, 0);
    /// assert_eq!(network.link_count(), 0);
    /// # Ok::<(), epinet_core::NetworkError>(())
    /// ```
    #[instrument(
        name = "network.random_connect",
        err,
        skip(self),
        fields(nodes = self.size(), links = field::Empty),
    )]
    pub fn random_connect(&mut self, mean_degree: f64) -> Result<usize> {
        if !mean_degree.is_finite() || mean_degree < 0.0 {
            return Err(NetworkError::InvalidMeanDegree { mean: mean_degree });
        }

        let size = self.size();
        let mut targets = vec![0_u64; size];
        self.rng.fill_poisson(&mut targets, mean_degree)?;
        self.clear_links();

        let mut candidates: Vec<usize> = (0..size).collect();
        let mut created = 0_usize;
        for (node, &draw) in targets.iter().enumerate() {
            // Targets beyond the node count cannot be met anyway.
            let target = usize::try_from(draw).unwrap_or(usize::MAX);
            self.rng.shuffle(&mut candidates);
            let made = self.connect_node(node, target, &candidates);
            if made < target {
                trace!(node, target, made, "degree target not reached");
            }
            created += made;
        }

        Span::current().record("links", created);
        Ok(created)
    }

    fn connect_node(&mut self, node: usize, target: usize, candidates: &[usize]) -> usize {
        let mut made = 0;
        for &candidate in candidates {
            if made >= target {
                break;
            }
            if self.add_link(node, candidate) {
                made += 1;
            }
        }
        made
    }
}
