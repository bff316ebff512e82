//! Event types for the TSA event system
//!
//! Broadcast over an in-process channel and forwarded to SSE clients.

use crate::workflow::StageId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// TSA event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TreasuryEvent {
    /// Analysis run constructed, counter at 0
    AnalysisStarted {
        run_id: Uuid,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Counter advanced by one tick
    AnalysisProgress {
        run_id: Uuid,
        percent: u8,
        /// Id of the sub-stage whose band contains `percent`, None at 100%
        sub_stage: Option<String>,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Counter reached 100%; ticking has stopped
    AnalysisCompleted {
        run_id: Uuid,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// One-shot workflow advance after the settle delay
    StageAdvanced {
        run_id: Uuid,
        from: StageId,
        to: StageId,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl TreasuryEvent {
    /// Event type name used as the SSE event field
    pub fn event_type(&self) -> &'static str {
        match self {
            TreasuryEvent::AnalysisStarted { .. } => "AnalysisStarted",
            TreasuryEvent::AnalysisProgress { .. } => "AnalysisProgress",
            TreasuryEvent::AnalysisCompleted { .. } => "AnalysisCompleted",
            TreasuryEvent::StageAdvanced { .. } => "StageAdvanced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = TreasuryEvent::AnalysisProgress {
            run_id: Uuid::new_v4(),
            percent: 42,
            sub_stage: Some("categorization".to_string()),
            timestamp: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "AnalysisProgress");
        assert_eq!(json["percent"], 42);
        assert_eq!(json["sub_stage"], "categorization");
        assert_eq!(event.event_type(), "AnalysisProgress");
    }

    #[test]
    fn stage_advanced_carries_stage_ids() {
        let event = TreasuryEvent::StageAdvanced {
            run_id: Uuid::new_v4(),
            from: StageId::Parsing,
            to: StageId::Dashboard,
            timestamp: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["from"], "parsing");
        assert_eq!(json["to"], "dashboard");
    }
}
