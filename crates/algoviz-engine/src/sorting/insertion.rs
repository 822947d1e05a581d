#![forbid(unsafe_code)]

//! Insertion sort.
//!
//! The key walks left by adjacent swaps while its left neighbour exceeds it,
//! stopping at the first non-exceeding neighbour or the left boundary. Each
//! step keeps the buffer a permutation, so a stop mid-shift loses nothing.

use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

pub(super) fn sort(ctx: &mut StepContext<'_>, values: &mut [i64]) -> Flow {
    for i in 1..values.len() {
        ctx.checkpoint()?;
        ctx.highlight(&[i], HighlightRole::Comparing);
        ctx.pause(500)?;

        let mut j = i;
        while j > 0 {
            ctx.checkpoint()?;
            ctx.compared();
            ctx.highlight(&[j - 1, j], HighlightRole::Comparing);
            ctx.pause(300)?;

            if values[j - 1] <= values[j] {
                break;
            }
            ctx.highlight(&[j - 1, j], HighlightRole::Swapping);
            values.swap(j - 1, j);
            ctx.relocated();
            ctx.publish(values);
            ctx.pause(300)?;
            j -= 1;
        }

        ctx.publish(values);
        ctx.highlight_range(0..=i, HighlightRole::Sorted);
        ctx.pause(200)?;
    }
    Ok(())
}

/// Insertion-sort `values[left..=right]` without per-pair highlights.
///
/// Tim sort's run phase.
pub(super) fn sort_range(
    ctx: &mut StepContext<'_>,
    values: &mut [i64],
    left: usize,
    right: usize,
) -> Flow {
    for i in left + 1..=right {
        ctx.checkpoint()?;
        ctx.highlight(&[i], HighlightRole::Comparing);
        ctx.pause(200)?;

        let mut j = i;
        while j > left {
            ctx.checkpoint()?;
            ctx.compared();
            if values[j - 1] <= values[j] {
                break;
            }
            values.swap(j - 1, j);
            ctx.relocated();
            ctx.publish(values);
            ctx.pause(100)?;
            j -= 1;
        }

        ctx.publish(values);
    }

    ctx.highlight_range(left..=right, HighlightRole::Sorted);
    ctx.pause(200)
}
