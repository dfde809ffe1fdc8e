use super::{EvaluationMode, LinkContext, NetworkInvariantViolation};

pub(super) fn check_endpoints(
    ctx: LinkContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    // Each link is reported once, from its lower endpoint.
    for (origin, target) in ctx.entries().filter(|&(origin, target)| origin < target) {
        if target >= ctx.size {
            mode.record(NetworkInvariantViolation::DanglingLink {
                origin,
                target,
                size: ctx.size,
            })?;
        }
    }
    Ok(())
}
