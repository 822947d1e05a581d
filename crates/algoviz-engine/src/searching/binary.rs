#![forbid(unsafe_code)]

use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

/// Midpoint bisection over inclusive bounds. `values` must be ascending.
pub(super) fn search(
    ctx: &mut StepContext<'_>,
    values: &[i64],
    target: i64,
) -> Flow<Option<usize>> {
    let Some(mut high) = values.len().checked_sub(1) else {
        ctx.clear_highlights();
        return Ok(None);
    };
    let mut low = 0;

    while low <= high {
        ctx.checkpoint()?;
        let mid = low + (high - low) / 2;
        ctx.compared();

        ctx.highlight_range(low..=high, HighlightRole::Comparing);
        ctx.pause(500)?;
        ctx.highlight(&[mid], HighlightRole::Swapping);
        ctx.pause(800)?;

        if values[mid] == target {
            ctx.highlight(&[mid], HighlightRole::Found);
            return Ok(Some(mid));
        }
        if values[mid] < target {
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }

        ctx.clear_highlights();
        ctx.pause(300)?;
    }

    ctx.clear_highlights();
    Ok(None)
}
