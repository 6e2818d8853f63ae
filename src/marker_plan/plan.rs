use crate::location::{CodePosition, CodeSection};
use crate::model::markers::EvaluationKind;
use crate::model::document::MarkerData;

/// Type-rank discriminants, matched 1:1 against
/// `original_source/coveron_instrumenter/Instrumenter.py`'s
/// `InstrumenterMarkerType` enum so that a descending `(line, column, rank)`
/// sort reproduces the tie-break order the spec quotes: `COMPOUND_END >
/// EVALUATION_END > CONDITION_START > DECISION_START > CHECKPOINT >
/// COMPOUND_START`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum MarkerRank {
    CompoundStart = 1,
    Checkpoint = 2,
    DecisionStart = 3,
    ConditionStart = 4,
    EvaluationEnd = 5,
    CompoundEnd = 6,
}

/// One text splice: insert `text` at `position` in the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub position: CodePosition,
    pub rank: MarkerRank,
    pub text: String,
}

/// Serializes a marker ID as four big-endian hex bytes (§4.3), e.g.
/// `id = 5` → `"0x00, 0x00, 0x00, 0x05"`.
fn hex_bytes(id: u32) -> String {
    let b = id.to_be_bytes();
    format!("0x{:02X}, 0x{:02X}, 0x{:02X}, 0x{:02X}", b[0], b[1], b[2], b[3])
}

fn checkpoint_text(id: u32, struct_name: &str) -> String {
    format!("___COVERON_SET_CHECKPOINT_MARKER({}, &{});", hex_bytes(id), struct_name)
}

fn evaluation_start_text(id: u32, struct_name: &str) -> String {
    format!("___COVERON_SET_EVALUATION_MARKER({}, &{}, (int) (", hex_bytes(id), struct_name)
}

const EVALUATION_END_TEXT: &str = "))";
const COMPOUND_START_TEXT: &str = "{";
const COMPOUND_END_TEXT: &str = "}";

/// Builds the full, sort-ready insertion plan for one translation unit
/// (§4.3): one insertion per checkpoint, two per evaluation marker
/// (start/end), and a `{`/`}` pair for every section the extractor flagged
/// as a brace-less single-statement body
/// ([`crate::extractor::CoverageExtractor::compound_wraps`]).
pub fn build_plan(marker_data: &MarkerData, compound_wraps: &[CodeSection], struct_name: &str) -> Vec<Insertion> {
    let mut insertions = Vec::new();

    for checkpoint in &marker_data.checkpoint_markers {
        insertions.push(Insertion {
            position: checkpoint.code_position,
            rank: MarkerRank::Checkpoint,
            text: checkpoint_text(checkpoint.id, struct_name),
        });
    }

    for evaluation in &marker_data.evaluation_markers {
        let start_rank = match evaluation.kind {
            EvaluationKind::Decision => MarkerRank::DecisionStart,
            EvaluationKind::Condition => MarkerRank::ConditionStart,
        };
        insertions.push(Insertion {
            position: evaluation.code_section.start,
            rank: start_rank,
            text: evaluation_start_text(evaluation.id, struct_name),
        });
        insertions.push(Insertion {
            position: evaluation.code_section.end,
            rank: MarkerRank::EvaluationEnd,
            text: EVALUATION_END_TEXT.to_string(),
        });
    }

    for section in compound_wraps {
        insertions.push(Insertion { position: section.start, rank: MarkerRank::CompoundStart, text: COMPOUND_START_TEXT.to_string() });
        insertions.push(Insertion { position: section.end, rank: MarkerRank::CompoundEnd, text: COMPOUND_END_TEXT.to_string() });
    }

    insertions.sort_by(|a, b| (b.position, b.rank).cmp(&(a.position, a.rank)));
    insertions
}
