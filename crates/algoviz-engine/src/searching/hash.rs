#![forbid(unsafe_code)]

//! Hash-table search: index every value, then look the target up once.
//!
//! Building the index counts no comparisons; the lookup counts one. The
//! index is rebuilt on every call and dropped when the call returns.

use ahash::AHashMap;
use algoviz_core::HighlightRole;

use crate::step::{Flow, StepContext};

pub(super) fn search(
    ctx: &mut StepContext<'_>,
    values: &[i64],
    target: i64,
) -> Flow<Option<usize>> {
    let mut index: AHashMap<i64, Vec<usize>> = AHashMap::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        ctx.checkpoint()?;
        ctx.highlight(&[i], HighlightRole::Comparing);
        ctx.pause(300)?;

        index.entry(value).or_default().push(i);
        ctx.record_hash_operations(index.len());

        ctx.highlight(&[i], HighlightRole::Swapping);
        ctx.pause(200)?;
    }

    ctx.clear_highlights();
    ctx.pause(500)?;

    ctx.compared();
    let Some(positions) = index.get(&target) else {
        ctx.pause(300)?;
        ctx.clear_highlights();
        return Ok(None);
    };

    for &position in positions {
        ctx.checkpoint()?;
        ctx.highlight(&[position], HighlightRole::Found);
        ctx.pause(400)?;
    }
    ctx.highlight(positions, HighlightRole::Found);

    Ok(positions.first().copied())
}
