#![forbid(unsafe_code)]

//! Player lifecycle: start, busy guard, stop, join, reset.

use std::time::{Duration, Instant};

use algoviz_core::{
    BarChart, EngineError, HighlightRole, PacingConfig, RunPhase, RunStats, SearchAlgorithm,
    SinkEvent, SortAlgorithm, VisualSink,
};
use algoviz_engine::SearchOutcome;
use algoviz_runtime::{Job, JobReport, Player};

fn sort_job(algorithm: SortAlgorithm, values: Vec<i64>) -> Job {
    Job::Sort { algorithm, values }
}

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}

fn wait_until(mut ready: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !ready() {
        assert!(Instant::now() < deadline, "timed out waiting");
        std::thread::sleep(Duration::from_millis(2));
    }
}

#[test]
fn instant_sort_replays_onto_a_bar_chart() {
    let input = vec![7, 3, 9, 1, 4];
    let mut player = Player::instant();
    player
        .start(sort_job(SortAlgorithm::Quick, input.clone()))
        .unwrap();

    let Some(Ok(JobReport::Sorted { report, values })) = player.join() else {
        panic!("expected a sort report");
    };
    assert_eq!(report.phase, RunPhase::Completed);
    assert_eq!(values, [1, 3, 4, 7, 9]);

    let mut chart = BarChart::new(&input);
    for event in player.drain_events() {
        event.apply_to(&mut chart);
    }
    assert_eq!(chart.values(), &[1, 3, 4, 7, 9]);
    assert_eq!(chart.indices_with(HighlightRole::Sorted), vec![0, 1, 2, 3, 4]);
}

#[test]
fn second_start_while_playing_is_refused() {
    let mut player = Player::new(PacingConfig::default());
    let input: Vec<i64> = (0..20).rev().collect();
    player
        .start(sort_job(SortAlgorithm::Bubble, input.clone()))
        .unwrap();
    assert!(player.is_busy());

    let second = player.start(sort_job(SortAlgorithm::Merge, vec![2, 1]));
    assert_eq!(second, Err(EngineError::Busy));

    player.stop();
    let Some(Ok(JobReport::Sorted { report, values })) = player.join() else {
        panic!("expected a sort report");
    };
    assert_eq!(report.phase, RunPhase::Cancelled);
    assert_eq!(sorted(&values), sorted(&input));
    assert!(!player.is_busy());
}

#[test]
fn stop_right_after_start_cancels() {
    let mut player = Player::new(PacingConfig::default());
    player
        .start(sort_job(SortAlgorithm::Insertion, (0..10).rev().collect()))
        .unwrap();
    player.stop();

    let report = player.join().unwrap().unwrap();
    assert_eq!(report.phase(), RunPhase::Cancelled);
}

#[test]
fn counters_are_readable_while_playing() {
    let mut player = Player::new(PacingConfig::default());
    player
        .start(Job::Search {
            algorithm: SearchAlgorithm::Linear,
            values: vec![1, 2, 3, 4],
            target: 4,
        })
        .unwrap();

    wait_until(|| player.stats().comparisons >= 1);
    assert_eq!(player.phase(), RunPhase::Running);

    player.stop();
    let Some(Ok(JobReport::Searched(report))) = player.join() else {
        panic!("expected a search report");
    };
    assert_eq!(report.outcome, SearchOutcome::Cancelled);
    assert_eq!(player.phase(), RunPhase::Cancelled);
}

#[test]
fn unsorted_search_surfaces_the_precondition_error() {
    let mut player = Player::instant();
    player
        .start(Job::Search {
            algorithm: SearchAlgorithm::Binary,
            values: vec![3, 1, 2],
            target: 1,
        })
        .unwrap();

    let result = player.join().unwrap();
    assert_eq!(
        result,
        Err(EngineError::Unsorted {
            algorithm: SearchAlgorithm::Binary
        })
    );
    assert_eq!(player.phase(), RunPhase::RejectedPrecondition);
    assert_eq!(player.stats().comparisons, 0);
    assert!(player.drain_events().is_empty());
}

#[test]
fn finished_job_is_reaped_by_the_next_start() {
    let mut player = Player::instant();
    player
        .start(sort_job(SortAlgorithm::Selection, vec![2, 1]))
        .unwrap();
    wait_until(|| !player.is_busy());

    player
        .start(Job::Search {
            algorithm: SearchAlgorithm::Hash,
            values: vec![5, 5],
            target: 5,
        })
        .unwrap();
    let Some(Ok(JobReport::Searched(report))) = player.join() else {
        panic!("expected a search report");
    };
    assert_eq!(report.index(), Some(0));
    assert_eq!(report.stats.hash_operations, 1);

    // Only the second job's events are left.
    let events = player.drain_events();
    assert!(
        events
            .iter()
            .all(|event| !matches!(event, SinkEvent::UpdateArray { .. }))
    );
}

#[test]
fn reset_forgets_the_last_job() {
    let mut player = Player::instant();
    player
        .start(sort_job(SortAlgorithm::Tim, vec![3, 2, 1]))
        .unwrap();
    wait_until(|| !player.is_busy());
    assert_ne!(player.stats(), RunStats::default());

    player.reset();
    assert_eq!(player.stats(), RunStats::default());
    assert_eq!(player.phase(), RunPhase::Idle);
    assert!(player.drain_events().is_empty());
    assert!(player.join().is_none());
}

#[test]
fn events_can_be_streamed_with_a_timeout() {
    let mut player = Player::instant();
    player
        .start(sort_job(SortAlgorithm::Bubble, vec![2, 1]))
        .unwrap();

    let mut chart = BarChart::new(&[2, 1]);
    while let Some(event) = player.recv_event_timeout(Duration::from_secs(1)) {
        event.apply_to(&mut chart);
    }
    chart.clear_highlights();
    assert_eq!(chart.values(), &[1, 2]);
    assert!(player.join().unwrap().is_ok());
}
