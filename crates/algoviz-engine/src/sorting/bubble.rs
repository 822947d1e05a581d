#![forbid(unsafe_code)]

//! Bubble sort: adjacent-pair comparisons, one fewer pair per pass.

use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

pub(super) fn sort(ctx: &mut StepContext<'_>, values: &mut [i64]) -> Flow {
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        ctx.checkpoint()?;
        for j in 0..n - pass - 1 {
            ctx.checkpoint()?;
            ctx.highlight(&[j, j + 1], HighlightRole::Comparing);
            ctx.compared();
            ctx.pause(500)?;

            if values[j] > values[j + 1] {
                ctx.highlight(&[j, j + 1], HighlightRole::Swapping);
                ctx.pause(300)?;

                values.swap(j, j + 1);
                ctx.relocated();
                ctx.publish(values);
                ctx.pause(300)?;
            }

            ctx.clear_highlights();
        }
        // The largest unsettled value has bubbled to the end of this pass.
        ctx.highlight(&[n - pass - 1], HighlightRole::Sorted);
    }
    Ok(())
}
