//! Symmetry invariant for the link relation.
//!
//! Every entry `origin -> target` must be matched by `target -> origin`, so
//! degree and neighbour queries agree from both endpoints.
use tracing::{Level, debug, trace};

use super::{EvaluationMode, LinkContext, NetworkInvariantViolation};

pub(super) fn check_symmetry(
    ctx: LinkContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    if tracing::enabled!(Level::TRACE) {
        trace!(entries = ctx.entries().count(), "checking link symmetry");
    }
    for (origin, target) in ctx.entries() {
        if ctx.contains(target, origin) {
            continue;
        }
        debug!(origin, target, "missing backlink");
        mode.record(NetworkInvariantViolation::MissingBacklink { origin, target })?;
    }
    Ok(())
}
