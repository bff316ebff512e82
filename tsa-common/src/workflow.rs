//! Workflow stage table and step router
//!
//! The application walks a relationship manager through five stages in a
//! fixed order. The step router maps a navigation path onto the stage
//! table and derives which stages are completed, current, or upcoming.
//! Resolution is a total pure function over the path: an unrecognized or
//! root path resolves to the first stage, never to an error.

use serde::{Deserialize, Serialize};

/// The five workflow stages, in precedence order.
///
/// Positional order is load-bearing: a stage is completed exactly when
/// its index precedes the current stage's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    /// Upload bank statements
    Upload,
    /// Simulated statement analysis
    Parsing,
    /// Cash position dashboard
    Dashboard,
    /// Product recommendations
    Recommendations,
    /// Report export
    Reports,
}

impl StageId {
    /// All stages in workflow order
    pub const ALL: [StageId; 5] = [
        StageId::Upload,
        StageId::Parsing,
        StageId::Dashboard,
        StageId::Recommendations,
        StageId::Reports,
    ];

    /// Position of this stage in the workflow order
    pub fn index(self) -> usize {
        match self {
            StageId::Upload => 0,
            StageId::Parsing => 1,
            StageId::Dashboard => 2,
            StageId::Recommendations => 3,
            StageId::Reports => 4,
        }
    }

    /// The stage after this one, None for the last stage
    pub fn next(self) -> Option<StageId> {
        StageId::ALL.get(self.index() + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StageId::Upload => "upload",
            StageId::Parsing => "parsing",
            StageId::Dashboard => "dashboard",
            StageId::Recommendations => "recommendations",
            StageId::Reports => "reports",
        }
    }

    /// Navigation path serving this stage's page
    pub fn path(self) -> &'static str {
        match self {
            StageId::Upload => "/upload",
            StageId::Parsing => "/parsing",
            StageId::Dashboard => "/dashboard",
            StageId::Recommendations => "/recommendations",
            StageId::Reports => "/reports",
        }
    }
}

/// Static display definition for one workflow stage
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageDefinition {
    pub id: StageId,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed stage table, defined once
pub const STAGES: [StageDefinition; 5] = [
    StageDefinition {
        id: StageId::Upload,
        title: "Upload",
        description: "Upload bank statements",
    },
    StageDefinition {
        id: StageId::Parsing,
        title: "Analyze",
        description: "Process transaction data",
    },
    StageDefinition {
        id: StageId::Dashboard,
        title: "Review",
        description: "Examine insights",
    },
    StageDefinition {
        id: StageId::Recommendations,
        title: "Recommend",
        description: "Treasury solutions",
    },
    StageDefinition {
        id: StageId::Reports,
        title: "Export",
        description: "Generate reports",
    },
];

/// Classification of one stage relative to the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Current,
    Upcoming,
}

/// Derived workflow position, recomputed on every navigation change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowPosition {
    /// Stage matching the active navigation path
    pub current: StageId,
    /// Stage ids strictly before `current`, in workflow order
    pub completed: Vec<StageId>,
}

/// Map a navigation path to its stage.
///
/// Fixed table; the root path and anything unrecognized resolve to the
/// first stage.
pub fn resolve_stage(path: &str) -> StageId {
    match path {
        "/" | "/upload" => StageId::Upload,
        "/parsing" => StageId::Parsing,
        "/dashboard" => StageId::Dashboard,
        "/recommendations" => StageId::Recommendations,
        "/reports" => StageId::Reports,
        _ => StageId::Upload,
    }
}

/// Resolve the full workflow position for a navigation path.
///
/// `completed` is always a strict prefix of the stage order, truncated
/// immediately before the current stage's index.
pub fn resolve_position(path: &str) -> WorkflowPosition {
    let current = resolve_stage(path);
    let completed = StageId::ALL[..current.index()].to_vec();
    WorkflowPosition { current, completed }
}

/// Classify the stage at `index` relative to the current stage's index.
///
/// Computed fresh from the two indices; there is no per-stage mutable
/// flag that could desynchronize from the position.
pub fn stage_status(index: usize, current_index: usize) -> StageStatus {
    if index < current_index {
        StageStatus::Completed
    } else if index == current_index {
        StageStatus::Current
    } else {
        StageStatus::Upcoming
    }
}

impl WorkflowPosition {
    /// Status of every stage in the table, in workflow order
    pub fn stage_statuses(&self) -> [StageStatus; 5] {
        let current_index = self.current.index();
        let mut statuses = [StageStatus::Upcoming; 5];
        for (i, slot) in statuses.iter_mut().enumerate() {
            *slot = stage_status(i, current_index);
        }
        statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_paths_resolve_exactly() {
        assert_eq!(resolve_stage("/"), StageId::Upload);
        assert_eq!(resolve_stage("/upload"), StageId::Upload);
        assert_eq!(resolve_stage("/parsing"), StageId::Parsing);
        assert_eq!(resolve_stage("/dashboard"), StageId::Dashboard);
        assert_eq!(resolve_stage("/recommendations"), StageId::Recommendations);
        assert_eq!(resolve_stage("/reports"), StageId::Reports);
    }

    #[test]
    fn unrecognized_paths_resolve_to_upload() {
        assert_eq!(resolve_stage(""), StageId::Upload);
        assert_eq!(resolve_stage("/settings"), StageId::Upload);
        assert_eq!(resolve_stage("/parsing/"), StageId::Upload);
        assert_eq!(resolve_stage("parsing"), StageId::Upload);
    }

    #[test]
    fn completed_is_strict_prefix_for_every_stage() {
        for stage in StageId::ALL {
            let position = resolve_position(stage.path());
            assert_eq!(position.current, stage);
            assert_eq!(position.completed, StageId::ALL[..stage.index()].to_vec());
            assert!(!position.completed.contains(&stage));
            for later in &StageId::ALL[stage.index()..] {
                assert!(!position.completed.contains(later));
            }
        }
    }

    #[test]
    fn parsing_position_matches_expected() {
        let position = resolve_position("/parsing");
        assert_eq!(position.current, StageId::Parsing);
        assert_eq!(position.completed, vec![StageId::Upload]);
        assert_eq!(
            position.stage_statuses(),
            [
                StageStatus::Completed,
                StageStatus::Current,
                StageStatus::Upcoming,
                StageStatus::Upcoming,
                StageStatus::Upcoming,
            ]
        );
    }

    #[test]
    fn stage_order_and_next() {
        assert_eq!(StageId::Upload.next(), Some(StageId::Parsing));
        assert_eq!(StageId::Parsing.next(), Some(StageId::Dashboard));
        assert_eq!(StageId::Reports.next(), None);
        for (i, stage) in StageId::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
            assert_eq!(STAGES[i].id, *stage);
        }
    }

    #[test]
    fn stage_id_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StageId::Parsing).unwrap(), "\"parsing\"");
        assert_eq!(
            serde_json::to_string(&StageStatus::Upcoming).unwrap(),
            "\"upcoming\""
        );
    }
}
