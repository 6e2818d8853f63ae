//! # Model Module
//!
//! Plain record types for every entity a translation unit's CID describes
//! (§3). Every type here is a tagged record with field validation at the
//! constructor boundary; none carries private backing storage or ad-hoc
//! getters/setters the way the Python draft this was distilled from did —
//! in a statically typed language that accessor ceremony collapses to
//! ordinary public fields (§9).
//!
//! Entities are created only by [`crate::extractor::CoverageExtractor`],
//! appended once to [`crate::store::CidStore`], then read out by value
//! (never by mutable alias) by [`crate::marker_plan`] and
//! [`crate::serializer`].
pub mod branch;
pub mod condition;
pub mod document;
pub mod ids;
pub mod markers;

pub use branch::{BranchResult, Case, CaseKind};
pub use condition::{ConditionInfo, ConditionPossibility, ConditionResult};
pub use document::{CidDocument, CodeData, MarkerData};
pub use ids::{Id, ELSE_SENTINEL_ID, FILE_SCOPE_PARENT_ID};
pub use markers::{CheckpointMarker, EvaluationKind, EvaluationMarker};

/// `(id, name, kind, parent_id, first_checkpoint_id, header_section, body_section)`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Function {
    pub id: Id,
    pub name: String,
    pub kind: FunctionKind,
    pub parent_id: i64,
    pub first_checkpoint_id: Id,
    pub header_section: crate::location::CodeSection,
    pub body_section: crate::location::CodeSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FunctionKind {
    Normal = 1,
    Constructor = 2,
    Destructor = 3,
}

impl serde::Serialize for FunctionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// `(id, kind, function_id, checkpoint_id, section)`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Statement {
    pub id: Id,
    pub kind: StatementKind,
    pub function_id: Id,
    pub checkpoint_id: Id,
    pub section: crate::location::CodeSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StatementKind {
    Normal = 1,
    Return = 2,
    Break = 3,
    Continue = 4,
    Goto = 5,
}

impl serde::Serialize for StatementKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// `(id, function_id, branch_results[])`. Non-empty; a trailing `else`
/// appears at most once, at the end (invariant 4).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct IfBranch {
    pub id: Id,
    pub function_id: Id,
    pub branch_results: Vec<BranchResult>,
}

/// `(id, function_id, switch_section, cases[])`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SwitchBranch {
    pub id: Id,
    pub function_id: Id,
    pub switch_section: crate::location::CodeSection,
    pub cases: Vec<Case>,
}

/// `(id, function_id, evaluation_marker_id, evaluation_section,
/// condition_possibilities, conditions, true_section, false_section)`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TernaryExpression {
    pub id: Id,
    pub function_id: Id,
    pub evaluation_marker_id: Id,
    pub evaluation_section: crate::location::CodeSection,
    pub condition_possibilities: Vec<ConditionPossibility>,
    pub conditions: Vec<ConditionInfo>,
    pub true_section: crate::location::CodeSection,
    pub false_section: crate::location::CodeSection,
}

/// `(id, kind, function_id, evaluation_marker_id, evaluation_section,
/// body_section, condition_possibilities, conditions)`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Loop {
    pub id: Id,
    pub kind: LoopKind,
    pub function_id: Id,
    pub evaluation_marker_id: Id,
    pub evaluation_section: crate::location::CodeSection,
    pub body_section: crate::location::CodeSection,
    pub condition_possibilities: Vec<ConditionPossibility>,
    pub conditions: Vec<ConditionInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LoopKind {
    For = 1,
    While = 2,
    DoWhile = 3,
}

impl serde::Serialize for LoopKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}
