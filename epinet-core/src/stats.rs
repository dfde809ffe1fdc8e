//! Degree distribution summaries.

/// Summary of the degrees observed across a network's nodes.
///
/// # Examples
/// ```
/// use epinet_core::DegreeStats;
///
/// let stats = DegreeStats::from_degrees([0, 2, 2, 1]);
/// assert_eq!(stats.nodes(), 4);
/// assert_eq!(stats.min(), 0);
/// assert_eq!(stats.max(), 2);
/// assert_eq!(stats.total(), 5);
/// assert_eq!(stats.histogram(), &[1, 1, 2]);
/// assert!((stats.mean() - 1.25).abs() < f64::EPSILON);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeStats {
    nodes: usize,
    total: usize,
    min: usize,
    max: usize,
    histogram: Vec<usize>,
}

impl DegreeStats {
    /// Builds a summary from per-node degrees.
    #[must_use]
    pub fn from_degrees(degrees: impl IntoIterator<Item = usize>) -> Self {
        let mut stats = Self {
            min: usize::MAX,
            ..Self::default()
        };
        for degree in degrees {
            stats.nodes += 1;
            stats.total += degree;
            stats.min = stats.min.min(degree);
            stats.max = stats.max.max(degree);
            if stats.histogram.len() <= degree {
                stats.histogram.resize(degree + 1, 0);
            }
            stats.histogram[degree] += 1;
        }
        if stats.nodes == 0 {
            stats.min = 0;
        }
        stats
    }

    /// Number of nodes summarised.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Sum of all degrees; twice the number of links between summarised nodes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Smallest degree, or zero for an empty network.
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest degree, or zero for an empty network.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    /// Mean degree, or zero for an empty network.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.nodes == 0 {
            return 0.0;
        }
        self.total as f64 / self.nodes as f64
    }

    /// Node counts indexed by degree: `histogram()[k]` nodes have degree `k`.
    #[must_use]
    pub fn histogram(&self) -> &[usize] {
        &self.histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn empty_input_yields_zeroed_summary() {
        let stats = DegreeStats::from_degrees(std::iter::empty());
        assert_eq!(stats, DegreeStats::default());
        assert_eq!(stats.mean(), 0.0);
        assert!(stats.histogram().is_empty());
    }

    #[rstest]
    #[case(vec![3], 3, 3)]
    #[case(vec![4, 1, 7], 1, 7)]
    #[case(vec![0, 0], 0, 0)]
    fn tracks_extremes(#[case] degrees: Vec<usize>, #[case] min: usize, #[case] max: usize) {
        let stats = DegreeStats::from_degrees(degrees.iter().copied());
        assert_eq!(stats.min(), min);
        assert_eq!(stats.max(), max);
        assert_eq!(stats.histogram().len(), max + 1);
        assert_eq!(stats.histogram().iter().sum::<usize>(), degrees.len());
    }
}
