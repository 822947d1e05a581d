#![forbid(unsafe_code)]

//! Run-and-merge hybrid: insertion-sort fixed-length runs, then merge
//! neighbouring runs with doubling width. No galloping.

use crate::step::{Flow, StepContext};

use super::{insertion, merge};

pub(super) fn sort(ctx: &mut StepContext<'_>, values: &mut [i64], min_run: usize) -> Flow {
    let n = values.len();
    if n == 0 {
        return Ok(());
    }
    let min_run = min_run.max(1);

    let mut start = 0;
    while start < n {
        ctx.checkpoint()?;
        let end = (start + min_run - 1).min(n - 1);
        insertion::sort_range(ctx, values, start, end)?;
        start += min_run;
    }

    let mut width = min_run;
    while width < n {
        ctx.checkpoint()?;
        let mut left = 0;
        while left < n {
            ctx.checkpoint()?;
            let mid = left + width - 1;
            let right = left.saturating_add(2 * width - 1).min(n - 1);
            if mid < right {
                merge::merge_runs(ctx, values, left, mid, right)?;
            }
            left = left.saturating_add(2 * width);
        }
        width *= 2;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::Sorter;
    use algoviz_core::{HighlightRole, Immediate, NullSink, PacingConfig, RecordingSink};

    #[test]
    fn short_input_is_a_single_run() {
        let mut sorter = Sorter::new(RecordingSink::new(), Immediate);
        let mut values = vec![9, 7, 8];
        let report = sorter.tim_sort(&mut values);
        assert_eq!(values, [7, 8, 9]);
        // One run, no merge: the only range tag before the final one covers it all.
        let sorted = sorter.sink().highlights(HighlightRole::Sorted);
        assert_eq!(sorted, vec![&[0, 1, 2][..], &[0, 1, 2][..]]);
        assert_eq!(report.stats.comparisons, 3);
    }

    #[test]
    fn merges_runs_of_configured_length() {
        let config = PacingConfig {
            min_run: 2,
            ..PacingConfig::default()
        };
        let mut sorter = Sorter::new(RecordingSink::new(), Immediate).with_config(&config);
        let mut values = vec![8, 7, 6, 5, 4, 3, 2];
        sorter.tim_sort(&mut values);
        assert_eq!(values, [2, 3, 4, 5, 6, 7, 8]);

        let sorted = sorter.sink().highlights(HighlightRole::Sorted);
        // Runs [0,1] [2,3] [4,5] [6] then merges of width 2 and 4.
        assert_eq!(sorted[0], &[0, 1]);
        assert_eq!(sorted[3], &[6]);
        assert_eq!(sorted[4], &[0, 1, 2, 3]);
        assert_eq!(sorted[5], &[4, 5, 6]);
        assert_eq!(sorted[6], &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn long_input_crosses_the_default_run_length() {
        let mut sorter = Sorter::new(NullSink, Immediate);
        let mut values: Vec<i64> = (0..50).rev().collect();
        let report = sorter.tim_sort(&mut values);
        assert!(report.completed());
        assert_eq!(values, (0..50).collect::<Vec<_>>());
    }
}
