#![forbid(unsafe_code)]

//! Top-down merge sort and the stable merge shared with Tim sort.

use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

pub(super) fn sort(ctx: &mut StepContext<'_>, values: &mut [i64]) -> Flow {
    match values.len() {
        0 | 1 => Ok(()),
        n => split(ctx, values, 0, n - 1),
    }
}

fn split(ctx: &mut StepContext<'_>, values: &mut [i64], left: usize, right: usize) -> Flow {
    if left >= right {
        return Ok(());
    }
    ctx.checkpoint()?;

    let mid = left + (right - left) / 2;
    ctx.highlight_range(left..=right, HighlightRole::Comparing);
    ctx.pause(400)?;

    split(ctx, values, left, mid)?;
    split(ctx, values, mid + 1, right)?;
    merge_runs(ctx, values, left, mid, right)
}

/// Read positions into the two copied runs and the next write slot.
struct Cursor {
    left: usize,
    right: usize,
    out: usize,
}

/// Merge the sorted runs `values[left..=mid]` and `values[mid + 1..=right]`.
///
/// Ties take from the left run, so the merge is stable. If the run is
/// stopped part-way, the unplaced elements are written back before
/// returning so the range still holds exactly its original values.
pub(super) fn merge_runs(
    ctx: &mut StepContext<'_>,
    values: &mut [i64],
    left: usize,
    mid: usize,
    right: usize,
) -> Flow {
    ctx.checkpoint()?;

    let lo = values[left..=mid].to_vec();
    let hi = values[mid + 1..=right].to_vec();
    let mut cursor = Cursor {
        left: 0,
        right: 0,
        out: left,
    };

    let flow = interleave(ctx, values, &lo, &hi, &mut cursor, left, mid);
    if flow.is_err() {
        let rest = lo[cursor.left..].iter().chain(&hi[cursor.right..]);
        for (slot, &value) in values[cursor.out..=right].iter_mut().zip(rest) {
            *slot = value;
        }
        ctx.publish(values);
        return flow;
    }

    ctx.highlight_range(left..=right, HighlightRole::Sorted);
    ctx.pause(300)
}

fn interleave(
    ctx: &mut StepContext<'_>,
    values: &mut [i64],
    lo: &[i64],
    hi: &[i64],
    cursor: &mut Cursor,
    left: usize,
    mid: usize,
) -> Flow {
    while cursor.left < lo.len() && cursor.right < hi.len() {
        ctx.checkpoint()?;
        ctx.compared();
        ctx.highlight(
            &[left + cursor.left, mid + 1 + cursor.right],
            HighlightRole::Comparing,
        );
        ctx.pause(300)?;

        let value = if lo[cursor.left] <= hi[cursor.right] {
            cursor.left += 1;
            lo[cursor.left - 1]
        } else {
            cursor.right += 1;
            hi[cursor.right - 1]
        };
        place(ctx, values, cursor, value);
        ctx.pause(200)?;
    }

    // Drain whichever run is left; at most one of these loops runs.
    while cursor.left < lo.len() {
        ctx.checkpoint()?;
        cursor.left += 1;
        place(ctx, values, cursor, lo[cursor.left - 1]);
        ctx.pause(150)?;
    }
    while cursor.right < hi.len() {
        ctx.checkpoint()?;
        cursor.right += 1;
        place(ctx, values, cursor, hi[cursor.right - 1]);
        ctx.pause(150)?;
    }
    Ok(())
}

fn place(ctx: &mut StepContext<'_>, values: &mut [i64], cursor: &mut Cursor, value: i64) {
    let slot = cursor.out;
    cursor.out += 1;
    if values[slot] != value {
        values[slot] = value;
        ctx.relocated();
    }
    ctx.highlight(&[slot], HighlightRole::Swapping);
    ctx.publish(values);
}
