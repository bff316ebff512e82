//! Timer-driven analysis run
//!
//! Simulates the statement analysis behind the parsing stage. A run
//! owns one tokio task that advances the percent counter on a fixed
//! tick period, broadcasts a progress event per tick, and - once the
//! counter reaches exactly 100 - schedules a single deferred workflow
//! advance to the dashboard stage after the settle delay.
//!
//! The tick schedule and the deferred advance are both tied to the
//! run's cancellation token: tearing the run down cancels them and
//! nothing observable happens afterward. The simulation has no failure
//! states; a run either completes or is cancelled.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tsa_common::events::TreasuryEvent;
use tsa_common::progress::{advance, current_sub_stage, COMPLETE, SETTLE_DELAY, TICK_PERIOD};
use tsa_common::workflow::StageId;
use uuid::Uuid;

/// Handle to a running (or finished) analysis simulation
pub struct AnalysisRun {
    pub run_id: Uuid,
    percent: Arc<AtomicU8>,
    cancel: CancellationToken,
}

impl AnalysisRun {
    /// Start a new run. The counter starts at 0 and begins ticking
    /// immediately; there is no separate start call.
    pub fn spawn(events: broadcast::Sender<TreasuryEvent>) -> Self {
        let run_id = Uuid::new_v4();
        let percent = Arc::new(AtomicU8::new(0));
        let cancel = CancellationToken::new();

        let _ = events.send(TreasuryEvent::AnalysisStarted {
            run_id,
            timestamp: chrono::Utc::now(),
        });

        tokio::spawn(run_ticker(
            run_id,
            percent.clone(),
            events,
            cancel.clone(),
        ));

        info!(run_id = %run_id, "Analysis run started");
        Self {
            run_id,
            percent,
            cancel,
        }
    }

    /// Current counter value, 0..=100
    pub fn percent(&self) -> u8 {
        self.percent.load(Ordering::Acquire)
    }

    pub fn is_complete(&self) -> bool {
        self.percent() >= COMPLETE
    }

    /// Tear the run down: cancels the pending tick and, if the run
    /// already completed, the deferred stage advance. Idempotent.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for AnalysisRun {
    fn drop(&mut self) {
        // Dropping the handle must not leak a ticking timer
        self.cancel.cancel();
    }
}

async fn run_ticker(
    run_id: Uuid,
    percent: Arc<AtomicU8>,
    events: broadcast::Sender<TreasuryEvent>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // interval fires immediately; consume that so the first increment
    // lands one full period after the run starts
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(run_id = %run_id, "Analysis run cancelled before completion");
                return;
            }
            _ = ticker.tick() => {}
        }

        let next = advance(percent.load(Ordering::Acquire));
        percent.store(next, Ordering::Release);

        let _ = events.send(TreasuryEvent::AnalysisProgress {
            run_id,
            percent: next,
            sub_stage: current_sub_stage(next).map(str::to_string),
            timestamp: chrono::Utc::now(),
        });

        if next >= COMPLETE {
            break;
        }
    }

    // Ticking has stopped for good; announce completion, then hold the
    // settle delay before the one-shot workflow advance
    let _ = events.send(TreasuryEvent::AnalysisCompleted {
        run_id,
        timestamp: chrono::Utc::now(),
    });
    info!(run_id = %run_id, "Analysis run completed");

    tokio::select! {
        _ = cancel.cancelled() => {
            debug!(run_id = %run_id, "Analysis run cancelled during settle delay");
            return;
        }
        _ = tokio::time::sleep(SETTLE_DELAY) => {}
    }

    let _ = events.send(TreasuryEvent::StageAdvanced {
        run_id,
        from: StageId::Parsing,
        to: StageId::Dashboard,
        timestamp: chrono::Utc::now(),
    });
    info!(run_id = %run_id, "Advancing workflow to dashboard");
}
