use crate::ast::{AstCursor, NodeKind};
use crate::error::ExtractorError;
use crate::extractor::{CoverageExtractor, WalkResult};
use crate::location::CodeSection;
use crate::model::ids::Id;
use crate::model::{Statement, StatementKind};

impl<'a> CoverageExtractor<'a> {
    /// The compound-statement walker (§4.1). `seeded` is the checkpoint ID
    /// threaded from an enclosing block (nested compounds, loop/if bodies
    /// reuse it so the inner block starts tied to the outer marker);
    /// `None` means a fresh ID must be allocated on first use.
    pub(crate) fn walk_sequence<C: AstCursor + Clone>(
        &mut self,
        children: &[C],
        function_id: Id,
        seeded: Option<Id>,
    ) -> Result<WalkResult, ExtractorError> {
        let flattened = flatten_labels(children);

        let mut active_checkpoint_id: Id = seeded.unwrap_or(0);
        let mut first_checkpoint_set = false;
        let mut needs_new_checkpoint = false;
        let mut must_bubble = false;
        let mut first_checkpoint_id_out: Id = 0;

        for (child, preceded_by_label) in &flattened {
            if *preceded_by_label {
                needs_new_checkpoint = true;
            }

            if !first_checkpoint_set {
                if self.checkpoints_enabled {
                    if active_checkpoint_id == 0 {
                        active_checkpoint_id = self.store.new_id();
                    }
                    self.store.add_checkpoint(active_checkpoint_id, child.extent_start())?;
                }
                first_checkpoint_set = true;
                first_checkpoint_id_out = active_checkpoint_id;
                needs_new_checkpoint = false;
            } else if needs_new_checkpoint {
                if self.checkpoints_enabled {
                    active_checkpoint_id = self.store.new_id();
                    self.store.add_checkpoint(active_checkpoint_id, child.extent_start())?;
                }
                needs_new_checkpoint = false;
            }

            match child.kind() {
                NodeKind::ReturnStmt | NodeKind::BreakStmt | NodeKind::ContinueStmt | NodeKind::GotoStmt | NodeKind::IndirectGotoStmt => {
                    let kind = match child.kind() {
                        NodeKind::ReturnStmt => StatementKind::Return,
                        NodeKind::BreakStmt => StatementKind::Break,
                        NodeKind::ContinueStmt => StatementKind::Continue,
                        _ => StatementKind::Goto,
                    };
                    let stmt_id = self.store.new_id();
                    let section = CodeSection::new(child.extent_start(), child.extent_end());
                    self.store.add_statement(Statement { id: stmt_id, kind, function_id, checkpoint_id: active_checkpoint_id, section })?;
                    needs_new_checkpoint = true;
                    must_bubble = true;
                }
                NodeKind::CompoundStmt => {
                    let inner = self.walk_sequence(&child.get_children(), function_id, Some(active_checkpoint_id))?;
                    if inner.bubbles {
                        needs_new_checkpoint = true;
                        must_bubble = true;
                    }
                }
                NodeKind::IfStmt => {
                    if self.extract_if(child, function_id)? {
                        needs_new_checkpoint = true;
                        must_bubble = true;
                    }
                }
                NodeKind::SwitchStmt => {
                    if self.extract_switch(child, function_id)? {
                        needs_new_checkpoint = true;
                        must_bubble = true;
                    }
                }
                NodeKind::ForStmt => {
                    if self.extract_for(child, function_id)? {
                        needs_new_checkpoint = true;
                        must_bubble = true;
                    }
                }
                NodeKind::WhileStmt => {
                    if self.extract_while(child, function_id)? {
                        needs_new_checkpoint = true;
                        must_bubble = true;
                    }
                }
                NodeKind::DoStmt => {
                    if self.extract_do_while(child, function_id)? {
                        needs_new_checkpoint = true;
                        must_bubble = true;
                    }
                }
                NodeKind::ConditionalOperator => {
                    self.extract_ternary(child, function_id)?;
                }
                _ => {
                    let stmt_id = self.store.new_id();
                    let section = CodeSection::new(child.extent_start(), child.extent_end());
                    self.store.add_statement(Statement { id: stmt_id, kind: StatementKind::Normal, function_id, checkpoint_id: active_checkpoint_id, section })?;
                    self.scan_for_ternary(child, function_id)?;
                }
            }
        }

        Ok(WalkResult { first_checkpoint_id: first_checkpoint_id_out, bubbles: must_bubble })
    }
}

/// Replaces each `LabelStmt` child with the statement it labels, recording
/// that the replacement was preceded by a label (§4.1: "labels reset the
/// block; a jump target must begin a new checkpoint-covered region"). A
/// label with no labeled statement (the label is the compound's last
/// child) contributes nothing — there is no statement left to checkpoint.
fn flatten_labels<C: AstCursor + Clone>(children: &[C]) -> Vec<(C, bool)> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        if child.kind() == NodeKind::LabelStmt {
            if let Some(inner) = child.get_children().into_iter().next() {
                out.push((inner, true));
            }
        } else {
            out.push((child.clone(), false));
        }
    }
    out
}
