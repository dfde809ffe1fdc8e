//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites build their proptest configuration from [`ProptestRunProfile`] so a
//! single pair of environment variables scales every property run.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const EPINET_PBT_CASES_ENV_KEY: &str = "EPINET_PBT_CASES";
/// Environment variable toggling proptest process forking.
pub const EPINET_PBT_FORK_ENV_KEY: &str = "EPINET_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile, falling back to the supplied defaults for unset or
    /// malformed variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use epinet_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(EPINET_PBT_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(EPINET_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Option<T>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|| {
        tracing::warn!(env = key, raw = %raw, "ignoring malformed property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&cases| cases > 0)
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(1))]
    #[case(" 250 ", Some(250))]
    #[case("0", None)]
    #[case("-3", None)]
    #[case("many", None)]
    fn parses_case_counts(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_cases(raw), expected);
    }

    #[rstest]
    #[case("TRUE", Some(true))]
    #[case("on", Some(true))]
    #[case("0", Some(false))]
    #[case("No", Some(false))]
    #[case("maybe", None)]
    #[case("", None)]
    fn parses_switches(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_switch(raw), expected);
    }
}
