//! Analysis run timing tests
//!
//! Run under a paused tokio clock so tick timing is exact and the tests
//! finish instantly: 50 ticks at 100ms reach 100%, the workflow advance
//! fires exactly 1500ms later, and cancellation at any point silences
//! the run for good.

use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::Instant;
use tsa_common::events::TreasuryEvent;
use tsa_common::workflow::StageId;
use tsa_ui::analysis::AnalysisRun;

/// Window long enough that any stray timer would have fired; under the
/// paused clock this elapses instantly when nothing is pending.
const QUIET_PERIOD: Duration = Duration::from_secs(60);

async fn expect_quiet(rx: &mut broadcast::Receiver<TreasuryEvent>) {
    let outcome = tokio::time::timeout(QUIET_PERIOD, rx.recv()).await;
    assert!(
        outcome.is_err(),
        "expected no further events, got {:?}",
        outcome
    );
}

#[tokio::test(start_paused = true)]
async fn run_reaches_100_in_exactly_50_ticks() {
    let (tx, mut rx) = broadcast::channel(256);
    let _run = AnalysisRun::spawn(tx.clone());

    match rx.recv().await.unwrap() {
        TreasuryEvent::AnalysisStarted { .. } => {}
        other => panic!("expected AnalysisStarted, got {:?}", other),
    }

    let mut last_percent = 0u8;
    let mut ticks = 0u32;
    loop {
        match rx.recv().await.unwrap() {
            TreasuryEvent::AnalysisProgress { percent, .. } => {
                assert!(percent >= last_percent, "percent regressed");
                assert!(percent <= 100, "percent exceeded 100");
                last_percent = percent;
                ticks += 1;
            }
            TreasuryEvent::AnalysisCompleted { .. } => break,
            other => panic!("unexpected event {:?}", other),
        }
    }

    assert_eq!(ticks, 50);
    assert_eq!(last_percent, 100);
}

#[tokio::test(start_paused = true)]
async fn ticks_are_spaced_one_period_apart() {
    let (tx, mut rx) = broadcast::channel(256);
    let start = Instant::now();
    let _run = AnalysisRun::spawn(tx.clone());

    // Skip AnalysisStarted
    rx.recv().await.unwrap();

    // First increment lands one full period after the run starts
    match rx.recv().await.unwrap() {
        TreasuryEvent::AnalysisProgress { percent, .. } => {
            assert_eq!(percent, 2);
            assert_eq!(start.elapsed(), Duration::from_millis(100));
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn sub_stage_follows_percent_bands() {
    let (tx, mut rx) = broadcast::channel(256);
    let _run = AnalysisRun::spawn(tx.clone());

    rx.recv().await.unwrap(); // AnalysisStarted

    loop {
        match rx.recv().await.unwrap() {
            TreasuryEvent::AnalysisProgress {
                percent, sub_stage, ..
            } => {
                let expected = match percent {
                    0..=19 => Some("upload"),
                    20..=39 => Some("extraction"),
                    40..=59 => Some("categorization"),
                    60..=79 => Some("analysis"),
                    80..=99 => Some("completed"),
                    _ => None,
                };
                assert_eq!(sub_stage.as_deref(), expected, "at percent {}", percent);
            }
            TreasuryEvent::AnalysisCompleted { .. } => break,
            other => panic!("unexpected event {:?}", other),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn workflow_advances_exactly_1500ms_after_completion() {
    let (tx, mut rx) = broadcast::channel(256);
    let run = AnalysisRun::spawn(tx.clone());

    let completed_at = loop {
        if let TreasuryEvent::AnalysisCompleted { .. } = rx.recv().await.unwrap() {
            break Instant::now();
        }
    };
    assert!(run.is_complete());

    match rx.recv().await.unwrap() {
        TreasuryEvent::StageAdvanced { from, to, .. } => {
            assert_eq!(from, StageId::Parsing);
            assert_eq!(to, StageId::Dashboard);
            assert_eq!(completed_at.elapsed(), Duration::from_millis(1500));
        }
        other => panic!("expected StageAdvanced, got {:?}", other),
    }

    // One-shot: nothing fires after the advance
    expect_quiet(&mut rx).await;
}

#[tokio::test(start_paused = true)]
async fn cancel_before_completion_stops_everything() {
    let (tx, mut rx) = broadcast::channel(256);
    let run = AnalysisRun::spawn(tx.clone());

    rx.recv().await.unwrap(); // AnalysisStarted

    // Let a few ticks land, then tear the run down
    for _ in 0..5 {
        match rx.recv().await.unwrap() {
            TreasuryEvent::AnalysisProgress { .. } => {}
            other => panic!("unexpected event {:?}", other),
        }
    }
    run.cancel();

    // No further ticks, no completion, no stage advance
    expect_quiet(&mut rx).await;
    assert!(run.percent() < 100);
}

#[tokio::test(start_paused = true)]
async fn cancel_during_settle_delay_suppresses_the_advance() {
    let (tx, mut rx) = broadcast::channel(256);
    let run = AnalysisRun::spawn(tx.clone());

    loop {
        if let TreasuryEvent::AnalysisCompleted { .. } = rx.recv().await.unwrap() {
            break;
        }
    }

    // Completed but still inside the settle delay
    run.cancel();
    expect_quiet(&mut rx).await;
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_cancels_the_run() {
    let (tx, mut rx) = broadcast::channel(256);
    let run = AnalysisRun::spawn(tx.clone());

    rx.recv().await.unwrap(); // AnalysisStarted
    rx.recv().await.unwrap(); // first tick

    drop(run);
    expect_quiet(&mut rx).await;
}
