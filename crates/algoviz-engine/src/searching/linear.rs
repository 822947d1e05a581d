#![forbid(unsafe_code)]

use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

/// Scan left to right; the earliest match wins.
pub(super) fn search(
    ctx: &mut StepContext<'_>,
    values: &[i64],
    target: i64,
) -> Flow<Option<usize>> {
    for (i, &value) in values.iter().enumerate() {
        ctx.checkpoint()?;
        ctx.compared();
        ctx.highlight(&[i], HighlightRole::Comparing);
        ctx.pause(600)?;

        if value == target {
            ctx.highlight(&[i], HighlightRole::Found);
            return Ok(Some(i));
        }
    }

    ctx.clear_highlights();
    Ok(None)
}
