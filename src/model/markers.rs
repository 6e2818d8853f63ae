use crate::location::{CodePosition, CodeSection};
use crate::model::ids::Id;

/// `(id, CodePosition)` — a single statement-coverage probe point. At most
/// one checkpoint exists at a given position; positions correspond to the
/// first character of a reachable linear statement sequence (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CheckpointMarker {
    pub id: Id,
    pub code_position: CodePosition,
}

/// `(id, kind, CodeSection)` — a boolean-expression probe wrapping the
/// entire decision's or atomic condition's text span (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct EvaluationMarker {
    pub id: Id,
    pub kind: EvaluationKind,
    pub code_section: CodeSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EvaluationKind {
    Decision = 1,
    Condition = 2,
}

impl serde::Serialize for EvaluationKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}
