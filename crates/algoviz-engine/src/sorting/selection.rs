#![forbid(unsafe_code)]

//! Selection sort with a running minimum per pass.

use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

pub(super) fn sort(ctx: &mut StepContext<'_>, values: &mut [i64]) -> Flow {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        ctx.checkpoint()?;
        let mut min = i;
        ctx.highlight(&[min], HighlightRole::Comparing);
        ctx.pause(300)?;

        for j in i + 1..n {
            ctx.checkpoint()?;
            ctx.compared();
            ctx.highlight(&[min, j], HighlightRole::Comparing);
            ctx.pause(200)?;

            if values[j] < values[min] {
                ctx.clear_highlights();
                min = j;
                ctx.highlight(&[min], HighlightRole::Comparing);
                ctx.pause(200)?;
            }
        }

        // Skip the no-op highlight/mutate cycle when the pass start is
        // already the minimum.
        if min != i {
            ctx.highlight(&[i, min], HighlightRole::Swapping);
            ctx.pause(500)?;

            values.swap(i, min);
            ctx.relocated();
            ctx.publish(values);
            ctx.pause(300)?;
        }

        ctx.highlight(&[i], HighlightRole::Sorted);
        ctx.pause(200)?;
    }
    Ok(())
}
