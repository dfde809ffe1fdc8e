//! Shared test utilities for `epinet-core`.

use epinet_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{error::Result, random::RandomSource};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `EPINET_PBT_CASES`
/// interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSource`] with scripted draws, used to pin down exact linking
/// behaviour.
///
/// Normal draws count upwards from zero across calls, Poisson draws replay
/// `targets` (missing positions read as zero), and shuffles leave the order
/// untouched while counting invocations.
#[derive(Clone, Debug, Default)]
pub(crate) struct ScriptedSource {
    targets: Vec<u64>,
    next_value: f64,
    shuffles: usize,
}

impl ScriptedSource {
    #[must_use]
    pub(crate) fn with_targets(targets: Vec<u64>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    /// Number of shuffles requested so far.
    #[must_use]
    pub(crate) fn shuffles(&self) -> usize {
        self.shuffles
    }
}

impl RandomSource for ScriptedSource {
    fn fill_normal(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.next_value;
            self.next_value += 1.0;
        }
    }

    fn fill_poisson(&mut self, out: &mut [u64], _mean: f64) -> Result<()> {
        for (index, slot) in out.iter_mut().enumerate() {
            *slot = self.targets.get(index).copied().unwrap_or(0);
        }
        Ok(())
    }

    fn shuffle(&mut self, _items: &mut [usize]) {
        self.shuffles += 1;
    }
}
