#![forbid(unsafe_code)]

//! Quick sort with a Lomuto partition around the last element.

use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

pub(super) fn sort(ctx: &mut StepContext<'_>, values: &mut [i64]) -> Flow {
    match values.len() {
        0 | 1 => Ok(()),
        n => descend(ctx, values, 0, n - 1),
    }
}

fn descend(ctx: &mut StepContext<'_>, values: &mut [i64], low: usize, high: usize) -> Flow {
    if low >= high {
        return Ok(());
    }
    ctx.checkpoint()?;
    ctx.highlight_range(low..=high, HighlightRole::Comparing);
    ctx.pause(400)?;

    let pivot = partition(ctx, values, low, high)?;
    if pivot > low {
        descend(ctx, values, low, pivot - 1)?;
    }
    descend(ctx, values, pivot + 1, high)
}

/// Partition `values[low..=high]` and return the pivot's final index.
fn partition(
    ctx: &mut StepContext<'_>,
    values: &mut [i64],
    low: usize,
    high: usize,
) -> Flow<usize> {
    let pivot = values[high];
    // Everything left of `boundary` is strictly less than the pivot.
    let mut boundary = low;

    ctx.highlight(&[high], HighlightRole::Found);
    ctx.pause(500)?;

    for j in low..high {
        ctx.checkpoint()?;
        ctx.compared();
        ctx.highlight(&[j, high], HighlightRole::Comparing);
        ctx.pause(300)?;

        if values[j] < pivot {
            if boundary != j {
                ctx.highlight(&[boundary, j], HighlightRole::Swapping);
                ctx.pause(300)?;

                values.swap(boundary, j);
                ctx.relocated();
                ctx.publish(values);
                ctx.pause(200)?;
            }
            boundary += 1;
        }
    }

    ctx.highlight(&[boundary, high], HighlightRole::Swapping);
    ctx.pause(300)?;

    if boundary != high {
        values.swap(boundary, high);
        ctx.relocated();
    }
    ctx.publish(values);
    ctx.highlight(&[boundary], HighlightRole::Sorted);
    ctx.pause(400)?;

    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use crate::Sorter;
    use algoviz_core::{HighlightRole, Immediate, NullSink, RecordingSink};

    #[test]
    fn pivot_lands_in_final_position() {
        let mut sorter = Sorter::new(RecordingSink::new(), Immediate);
        let mut values = vec![4, 1, 3];
        sorter.quick_sort(&mut values);
        assert_eq!(values, [1, 3, 4]);
        // First partition pivots on 3, which settles at index 1.
        assert_eq!(sorter.sink().highlights(HighlightRole::Found)[0], &[2]);
        assert_eq!(sorter.sink().highlights(HighlightRole::Sorted)[0], &[1]);
    }

    #[test]
    fn sorted_input_relocates_nothing() {
        let mut sorter = Sorter::new(NullSink, Immediate);
        let mut values = vec![1, 2, 3, 4, 5];
        let report = sorter.quick_sort(&mut values);
        assert!(report.completed());
        assert_eq!(report.stats.swaps, 0);
        assert_eq!(report.stats.comparisons, 10);
    }

    #[test]
    fn duplicates_are_handled() {
        let mut sorter = Sorter::new(NullSink, Immediate);
        let mut values = vec![2, 2, 1, 2, 1];
        sorter.quick_sort(&mut values);
        assert_eq!(values, [1, 1, 2, 2, 2]);
    }
}
