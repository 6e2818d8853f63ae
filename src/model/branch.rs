use crate::location::CodeSection;
use crate::model::condition::{ConditionInfo, ConditionPossibility};
use crate::model::ids::{Id, ELSE_SENTINEL_ID};

/// `(evaluation_marker_id, condition_possibilities, conditions,
/// evaluation_section, body_section)`. `evaluation_marker_id ==
/// ELSE_SENTINEL_ID` marks the terminal `else` branch; its `conditions` and
/// `possibilities` are empty (§3).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BranchResult {
    pub evaluation_marker_id: Id,
    pub condition_possibilities: Vec<ConditionPossibility>,
    pub conditions: Vec<ConditionInfo>,
    pub evaluation_section: CodeSection,
    pub body_section: CodeSection,
}

impl BranchResult {
    pub fn is_else_sentinel(&self) -> bool {
        self.evaluation_marker_id == ELSE_SENTINEL_ID
    }
}

/// `(checkpoint_marker_id, kind, evaluation_section, body_section)` where
/// `evaluation_section` covers only the label (`case X:` or `default:`) (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Case {
    pub checkpoint_marker_id: Id,
    pub kind: CaseKind,
    pub evaluation_section: CodeSection,
    pub body_section: CodeSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CaseKind {
    Case = 1,
    Default = 2,
}

impl serde::Serialize for CaseKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}
