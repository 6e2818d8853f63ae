use crate::model::markers::{CheckpointMarker, EvaluationMarker};
use crate::model::{Function, IfBranch, Loop, Statement, SwitchBranch, TernaryExpression};
use serde::Serialize;

/// All markers emitted for a translation unit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkerData {
    pub checkpoint_markers: Vec<CheckpointMarker>,
    pub evaluation_markers: Vec<EvaluationMarker>,
}

/// Every coverage-relevant construct found in a translation unit.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CodeData {
    pub functions: Vec<Function>,
    pub statements: Vec<Statement>,
    pub if_branches: Vec<IfBranch>,
    pub switch_branches: Vec<SwitchBranch>,
    pub ternary_expressions: Vec<TernaryExpression>,
    pub loops: Vec<Loop>,
}

/// Root serialized CID object (§3, §4.4): `(source_path, source_sha256_hex,
/// source_base64, instrumentation_random_hex, cri_path,
/// checkpoint_markers_enabled, evaluation_markers_enabled, marker_data,
/// code_data)`. Field declaration order here is the on-disk key order, which
/// is stable across runs because this is a fixed struct, not an open map.
#[derive(Debug, Clone, Serialize)]
pub struct CidDocument {
    pub source_path: String,
    pub source_sha256_hex: String,
    pub source_base64: String,
    pub instrumentation_random_hex: String,
    pub cri_path: String,
    pub checkpoint_markers_enabled: bool,
    pub evaluation_markers_enabled: bool,
    pub marker_data: MarkerData,
    pub code_data: CodeData,
}
