use crate::location::CodeSection;
use crate::model::ids::Id;

/// `(evaluation_marker_id, CodeSection)` for one atomic (non-compound,
/// non-parenthesized) boolean sub-expression (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ConditionInfo {
    pub evaluation_marker_id: Id,
    pub code_section: CodeSection,
}

/// `(evaluation_marker_id, bool)` — one atomic outcome (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ConditionResult {
    pub evaluation_marker_id: Id,
    pub result: bool,
}

/// `(decision_result, combination)` — a minimal set of atomic outcomes that
/// forces `decision_result` given short-circuit evaluation order (§3, §4.1).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ConditionPossibility {
    pub decision_result: bool,
    pub combination: Vec<ConditionResult>,
}

impl ConditionPossibility {
    pub fn new(decision_result: bool, combination: Vec<ConditionResult>) -> Self {
        Self { decision_result, combination }
    }
}
