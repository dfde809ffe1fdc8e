use super::{EvaluationMode, LinkContext, NetworkInvariantViolation};

pub(super) fn check_self_links(
    ctx: LinkContext<'_>,
    mode: &mut EvaluationMode<'_>,
) -> Result<(), NetworkInvariantViolation> {
    for (origin, target) in ctx.entries() {
        if origin == target {
            mode.record(NetworkInvariantViolation::SelfLink { node: origin })?;
        }
    }
    Ok(())
}
