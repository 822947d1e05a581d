#![forbid(unsafe_code)]

//! Interpolation search over ascending input.
//!
//! The probe is placed by linear interpolation between the values at the
//! current bounds. The loop runs only while the target lies within
//! `[values[low], values[high]]`. When both bounds hold the same value the
//! probe is `low`; a miss there ends the search.

use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

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

    while low <= high && values[low] <= target && target <= values[high] {
        ctx.checkpoint()?;

        if low == high {
            ctx.compared();
            ctx.highlight(&[low], HighlightRole::Comparing);
            ctx.pause(600)?;
            if values[low] == target {
                ctx.highlight(&[low], HighlightRole::Found);
                return Ok(Some(low));
            }
            break;
        }

        let pos = probe(values, low, high, target);
        ctx.compared();
        ctx.highlight_range(low..=high, HighlightRole::Comparing);
        ctx.pause(500)?;
        ctx.highlight(&[pos], HighlightRole::Swapping);
        ctx.pause(800)?;

        if values[pos] == target {
            ctx.highlight(&[pos], HighlightRole::Found);
            return Ok(Some(pos));
        }
        if values[pos] < target {
            low = pos + 1;
        } else if pos == 0 {
            break;
        } else {
            high = pos - 1;
        }

        ctx.clear_highlights();
        ctx.pause(300)?;
    }

    ctx.clear_highlights();
    Ok(None)
}

/// Interpolated probe in `[low, high]`. Requires `values[low] <= target <= values[high]`.
fn probe(values: &[i64], low: usize, high: usize, target: i64) -> usize {
    let span = i128::from(values[high]) - i128::from(values[low]);
    if span <= 0 {
        return low;
    }
    let offset = (i128::from(target) - i128::from(values[low])) * (high - low) as i128 / span;
    let offset = usize::try_from(offset.clamp(0, (high - low) as i128)).unwrap_or(0);
    low + offset
}
