//! # CIDStore
//!
//! In-memory model of markers and code data for one translation unit: a
//! monotonic ID allocator plus deep-copy accessors for read safety (§4.2).
//! Entities are appended once by [`crate::extractor::CoverageExtractor`]
//! and read out by value by [`crate::marker_plan`] and
//! [`crate::serializer`]; nothing downstream can alias the store's internal
//! vectors (§9: "never alias mutable internal vectors outward").
use crate::error::StoreError;
use crate::location::{CodePosition, CodeSection};
use crate::model::markers::{CheckpointMarker, EvaluationKind, EvaluationMarker};
use crate::model::{CodeData, Function, IfBranch, Loop, MarkerData, Statement, SwitchBranch, TernaryExpression};
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub struct CidStore {
    next_id: u32,
    checkpoints_enabled: bool,
    evaluations_enabled: bool,
    marker_data: MarkerData,
    code_data: CodeData,
    source_sha256_hex: String,
    source_base64: String,
    instrumentation_random_hex: String,
}

impl CidStore {
    /// Computes the source SHA-256 (hex, lowercase, 64 chars), a 32-hex-char
    /// instrumentation random derived from 16 bytes of strong randomness,
    /// and archives the source verbatim as base64 (§4.2).
    pub fn new(source: &[u8], checkpoints_enabled: bool, evaluations_enabled: bool) -> Self {
        let source_sha256_hex = source_sha256_hex(source);

        let mut random_bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut random_bytes);
        let instrumentation_random_hex = hex_encode(&random_bytes);

        let source_base64 = base64::engine::general_purpose::STANDARD.encode(source);

        Self {
            next_id: 1,
            checkpoints_enabled,
            evaluations_enabled,
            marker_data: MarkerData::default(),
            code_data: CodeData::default(),
            source_sha256_hex,
            source_base64,
            instrumentation_random_hex,
        }
    }

    /// Monotonic `u32` allocator, starting at 1 (§4.2).
    pub fn new_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_checkpoint(&mut self, id: u32, code_position: CodePosition) -> Result<(), StoreError> {
        if !self.checkpoints_enabled {
            return Err(StoreError::CheckpointMarkersDisabled);
        }
        self.marker_data.checkpoint_markers.push(CheckpointMarker { id, code_position });
        Ok(())
    }

    pub fn add_evaluation(&mut self, id: u32, code_section: CodeSection, kind: EvaluationKind) -> Result<(), StoreError> {
        if !self.evaluations_enabled {
            return Err(StoreError::EvaluationMarkersDisabled);
        }
        self.marker_data.evaluation_markers.push(EvaluationMarker { id, kind, code_section });
        Ok(())
    }

    pub fn add_function(&mut self, function: Function) -> Result<(), StoreError> {
        self.code_data.functions.push(function);
        Ok(())
    }

    pub fn add_statement(&mut self, statement: Statement) -> Result<(), StoreError> {
        self.code_data.statements.push(statement);
        Ok(())
    }

    pub fn add_if_branch(&mut self, if_branch: IfBranch) -> Result<(), StoreError> {
        self.code_data.if_branches.push(if_branch);
        Ok(())
    }

    pub fn add_switch_branch(&mut self, switch_branch: SwitchBranch) -> Result<(), StoreError> {
        self.code_data.switch_branches.push(switch_branch);
        Ok(())
    }

    pub fn add_ternary(&mut self, ternary: TernaryExpression) -> Result<(), StoreError> {
        self.code_data.ternary_expressions.push(ternary);
        Ok(())
    }

    pub fn add_loop(&mut self, loop_data: Loop) -> Result<(), StoreError> {
        self.code_data.loops.push(loop_data);
        Ok(())
    }

    /// Deep copy of the checkpoint markers; mutating the returned vector
    /// never affects the store (§4.2).
    pub fn checkpoint_markers(&self) -> Vec<CheckpointMarker> {
        self.marker_data.checkpoint_markers.clone()
    }

    /// Deep copy of the evaluation markers; mutating the returned vector
    /// never affects the store (§4.2).
    pub fn evaluation_markers(&self) -> Vec<EvaluationMarker> {
        self.marker_data.evaluation_markers.clone()
    }

    pub fn instrumentation_random(&self) -> &str {
        &self.instrumentation_random_hex
    }

    pub fn source_sha256(&self) -> &str {
        &self.source_sha256_hex
    }

    pub fn source_base64(&self) -> &str {
        &self.source_base64
    }

    pub fn checkpoints_enabled(&self) -> bool {
        self.checkpoints_enabled
    }

    pub fn evaluations_enabled(&self) -> bool {
        self.evaluations_enabled
    }

    /// Deep copy of every code-data entity collected so far, for
    /// [`crate::serializer`] to consume.
    pub fn code_data(&self) -> CodeData {
        self.code_data.clone()
    }

    pub fn marker_data(&self) -> MarkerData {
        self.marker_data.clone()
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        write!(out, "{b:02x}").expect("writing to a String never fails");
    }
    out
}

/// SHA-256 of `source`, hex-encoded lowercase (§8 property 1). Exposed
/// standalone so [`crate::driver`] can check a cached CID's hash against
/// the current source without constructing a whole new [`CidStore`].
pub fn source_sha256_hex(source: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source);
    hex_encode(&hasher.finalize())
}
