//! # CoverageExtractor
//!
//! Walks a C/C++ AST, classifies coverage-relevant constructs, allocates
//! IDs, and builds every CID entity for one translation unit (§4.1). This
//! is the largest single component of the pipeline (~45% of the system per
//! the architecture overview).
mod control;
mod evaluation;
mod walker;

use crate::ast::{AstCursor, NodeKind};
use crate::error::ExtractorError;
use crate::location::CodeSection;
use crate::model::ids::FILE_SCOPE_PARENT_ID;
use crate::model::{Function, FunctionKind};
use crate::store::CidStore;

pub use evaluation::compose;

/// Result of walking one compound statement's children: the checkpoint ID
/// that covers the block's first reachable statement, and whether the walk
/// ends by "bubbling" — signalling that the caller must begin a fresh
/// checkpoint-covered region at the next sibling (§4.1, glossary "Bubble").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WalkResult {
    pub first_checkpoint_id: crate::model::ids::Id,
    pub bubbles: bool,
}

/// Extracts coverage entities from one translation unit's AST into a
/// [`CidStore`] (§4.1's contract). Construct one extractor per translation
/// unit; it borrows the store for the duration of extraction.
pub struct CoverageExtractor<'a> {
    store: &'a mut CidStore,
    file_basename: String,
    checkpoints_enabled: bool,
    evaluations_enabled: bool,
    compound_wraps: Vec<CodeSection>,
}

impl<'a> CoverageExtractor<'a> {
    pub fn new(store: &'a mut CidStore, file_basename: impl Into<String>, checkpoints_enabled: bool, evaluations_enabled: bool) -> Self {
        Self { store, file_basename: file_basename.into(), checkpoints_enabled, evaluations_enabled, compound_wraps: Vec::new() }
    }

    /// Sections of single (brace-less) statement bodies that received more
    /// than a checkpoint-free pass-through and therefore need a synthesized
    /// `{`/`}` pair so multiple injected calls remain valid C (§4.3, policy:
    /// "wrap when evaluation/checkpoint injection would otherwise break C
    /// syntax inside a single-statement body").
    pub fn compound_wraps(&self) -> &[CodeSection] {
        &self.compound_wraps
    }

    /// Root traversal (§4.1): iterate direct children of the translation-unit
    /// cursor, skipping any child whose file basename differs from the
    /// primary input (header declarations, system-header decls), and
    /// extract every function declaration with a compound body.
    pub fn extract_translation_unit<C: AstCursor + Clone>(&mut self, tu: &C) -> Result<(), ExtractorError> {
        for child in tu.get_children() {
            if child.file_basename() != self.file_basename {
                continue;
            }
            match child.kind() {
                NodeKind::FunctionDecl | NodeKind::Constructor | NodeKind::Destructor => {
                    if let Some(body) = find_compound_body(&child) {
                        self.extract_function(&child, &body, FILE_SCOPE_PARENT_ID)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Function extraction (§4.1): header section spans the declaration's
    /// start to the body's start; body section is the compound statement's
    /// entire extent; the compound-statement walker supplies
    /// `first_checkpoint_id`.
    fn extract_function<C: AstCursor + Clone>(&mut self, decl: &C, body: &C, parent_id: i64) -> Result<crate::model::ids::Id, ExtractorError> {
        let function_id = self.store.new_id();
        let header_section = CodeSection::new(decl.extent_start(), body.extent_start());
        let body_section = CodeSection::new(body.extent_start(), body.extent_end());
        let kind = match decl.kind() {
            NodeKind::Constructor => FunctionKind::Constructor,
            NodeKind::Destructor => FunctionKind::Destructor,
            _ => FunctionKind::Normal,
        };

        let walk_result = self.walk_sequence(&body.get_children(), function_id, None)?;

        self.store.add_function(Function {
            id: function_id,
            name: decl.displayname(),
            kind,
            parent_id,
            first_checkpoint_id: walk_result.first_checkpoint_id,
            header_section,
            body_section,
        })?;
        Ok(function_id)
    }
}

/// Finds the declaration's compound-statement body, i.e. its last child of
/// kind `CompoundStmt` (parameter declarations precede the body in typical
/// AST child ordering). Returns `None` for a declaration without a body
/// (prototype-only decl, extern decl) — the root traversal simply skips it.
fn find_compound_body<C: AstCursor + Clone>(decl: &C) -> Option<C> {
    decl.get_children().into_iter().rev().find(|child| child.kind() == NodeKind::CompoundStmt)
}
