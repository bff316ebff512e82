//! Analysis progress banding rules
//!
//! The parsing stage simulates statement analysis with a percent counter
//! that advances by a fixed increment on a fixed tick period. Five
//! sub-stages each own a contiguous 20-point band of the counter. The
//! timer lifecycle lives in tsa-ui; everything here is pure arithmetic
//! over a percent value so it can be recomputed fresh at any time.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Percent added per tick
pub const TICK_INCREMENT: u8 = 2;

/// Period between ticks
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Terminal percent value
pub const COMPLETE: u8 = 100;

/// Delay between reaching 100% and advancing to the next workflow stage
pub const SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// Width of each sub-stage band
pub const SUB_STAGE_BAND: u8 = 20;

/// Static display definition for one analysis sub-stage
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubStageDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The five analysis sub-stages, each owning the band
/// `[index * 20, (index + 1) * 20)` of the percent counter
pub const SUB_STAGES: [SubStageDefinition; 5] = [
    SubStageDefinition {
        id: "upload",
        title: "File Upload",
        description: "Securely receiving your bank statement files",
    },
    SubStageDefinition {
        id: "extraction",
        title: "Data Extraction",
        description: "Reading and extracting transaction data",
    },
    SubStageDefinition {
        id: "categorization",
        title: "Transaction Categorization",
        description: "Analyzing and categorizing transactions",
    },
    SubStageDefinition {
        id: "analysis",
        title: "Financial Analysis",
        description: "Calculating metrics and cash flow patterns",
    },
    SubStageDefinition {
        id: "completed",
        title: "Analysis Complete",
        description: "Ready to view insights and recommendations",
    },
];

/// Classification of one sub-stage at a given percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubStageStatus {
    Completed,
    Current,
    Upcoming,
}

/// Advance the percent counter by one tick, clamped at 100
pub fn advance(percent: u8) -> u8 {
    percent.saturating_add(TICK_INCREMENT).min(COMPLETE)
}

/// Classify the sub-stage at `index` for a percent value.
///
/// Completed iff `percent >= (index + 1) * 20`; current iff percent lies
/// inside the sub-stage's own band. Bands are contiguous and
/// non-overlapping, so at most one sub-stage is current. At 100% every
/// sub-stage is completed and none is current.
pub fn sub_stage_status(index: usize, percent: u8) -> SubStageStatus {
    let lower = index as u8 * SUB_STAGE_BAND;
    let upper = lower + SUB_STAGE_BAND;
    if percent >= upper {
        SubStageStatus::Completed
    } else if percent >= lower {
        SubStageStatus::Current
    } else {
        SubStageStatus::Upcoming
    }
}

/// Status of every sub-stage at a percent value, in band order
pub fn sub_stage_states(percent: u8) -> [SubStageStatus; 5] {
    let mut states = [SubStageStatus::Upcoming; 5];
    for (i, slot) in states.iter_mut().enumerate() {
        *slot = sub_stage_status(i, percent);
    }
    states
}

/// Id of the sub-stage whose band contains `percent`, None at 100%
pub fn current_sub_stage(percent: u8) -> Option<&'static str> {
    SUB_STAGES
        .iter()
        .enumerate()
        .find(|(i, _)| sub_stage_status(*i, percent) == SubStageStatus::Current)
        .map(|(_, def)| def.id)
}
