#![forbid(unsafe_code)]

//! Property-based invariant tests for the searching engine.
//!
//! 1. On ascending input with a target present exactly once, all four
//!    searches return the same index.
//! 2. On ascending input with an absent target, all four return `NotFound`.
//! 3. Binary and interpolation search reject non-ascending input before the
//!    first probe: no comparison is counted and the sink sees nothing.
//! 4. Linear and hash search return the earliest index of the target.

use std::collections::BTreeSet;

use algoviz_core::{
    EngineError, Immediate, NullSink, RecordingSink, RunPhase, SearchAlgorithm,
};
use algoviz_engine::{SearchOutcome, Searcher, is_ascending};
use proptest::prelude::*;

fn unique_sorted() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(-500i64..500, 1..=50)
        .prop_map(|set: BTreeSet<i64>| set.into_iter().collect())
}

fn unsorted() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100i64..100, 2..=50).prop_filter("must not be ascending", |v| {
        !is_ascending(v)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn all_searches_agree_on_present_targets(
        values in unique_sorted(),
        pick in any::<prop::sample::Index>(),
    ) {
        let expected = pick.index(values.len());
        let target = values[expected];
        for algorithm in SearchAlgorithm::ALL {
            let mut searcher = Searcher::new(NullSink, Immediate);
            let report = searcher.run(algorithm, &values, target).unwrap();
            prop_assert_eq!(report.outcome, SearchOutcome::Found(expected), "{}", algorithm);
            prop_assert!(report.stats.comparisons >= 1);
        }
    }

    #[test]
    fn absent_targets_are_never_found(values in unique_sorted(), target in -600i64..600) {
        prop_assume!(!values.contains(&target));
        for algorithm in SearchAlgorithm::ALL {
            let mut searcher = Searcher::new(NullSink, Immediate);
            let report = searcher.run(algorithm, &values, target).unwrap();
            prop_assert_eq!(report.outcome, SearchOutcome::NotFound, "{}", algorithm);
            prop_assert_eq!(report.phase, RunPhase::Completed);
        }
    }

    #[test]
    fn order_dependent_searches_reject_unsorted(values in unsorted(), target in -100i64..100) {
        for algorithm in SearchAlgorithm::ALL.into_iter().filter(|a| a.requires_sorted()) {
            let mut searcher = Searcher::new(RecordingSink::new(), Immediate);
            let err = searcher.run(algorithm, &values, target).unwrap_err();
            prop_assert_eq!(err, EngineError::Unsorted { algorithm });
            prop_assert_eq!(searcher.phase(), RunPhase::RejectedPrecondition);
            prop_assert_eq!(searcher.stats().comparisons, 0);
            prop_assert!(searcher.sink().events().is_empty());
        }
    }

    #[test]
    fn order_free_searches_return_first_occurrence(
        values in prop::collection::vec(0i64..10, 1..=50),
        target in 0i64..10,
    ) {
        let expected = values.iter().position(|&v| v == target);
        for algorithm in [SearchAlgorithm::Linear, SearchAlgorithm::Hash] {
            let mut searcher = Searcher::new(NullSink, Immediate);
            let report = searcher.run(algorithm, &values, target).unwrap();
            prop_assert_eq!(report.index(), expected, "{}", algorithm);
        }
    }
}

#[test]
fn binary_search_scenario() {
    let mut searcher = Searcher::new(NullSink, Immediate);
    let report = searcher.binary_search(&[1, 3, 5, 7, 9, 11], 7).unwrap();
    assert_eq!(report.outcome, SearchOutcome::Found(3));
}

#[test]
fn unsorted_binary_search_is_rejected() {
    let mut searcher = Searcher::new(NullSink, Immediate);
    let err = searcher.binary_search(&[3, 1, 2], 1).unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(searcher.phase(), RunPhase::RejectedPrecondition);
    assert_eq!(searcher.stats().comparisons, 0);
}
