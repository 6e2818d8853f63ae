use crate::ast::{AstCursor, NodeKind};
use crate::error::ExtractorError;
use crate::extractor::CoverageExtractor;
use crate::location::{CodePosition, CodeSection};
use crate::model::ids::{Id, ELSE_SENTINEL_ID};
use crate::model::{BranchResult, Case, CaseKind, IfBranch, Loop, LoopKind, SwitchBranch};

/// Width, in columns, of the `default` keyword — used to give a
/// fixed-width `evaluation_section` to a `default:` label, which (unlike
/// `case N:`) has no expression to bound it (§4.1).
const DEFAULT_KEYWORD_WIDTH: u32 = 7;

impl<'a> CoverageExtractor<'a> {
    /// Extracts an `if`/`else if`/`else` chain into one `IfBranch` (§4.1).
    /// Returns whether the walker must treat the statement following this
    /// `if` as starting a new checkpoint-covered region, which is always
    /// true — control does not fall through an `if` the way it falls
    /// through a label.
    pub(crate) fn extract_if<C: AstCursor + Clone>(&mut self, node: &C, function_id: Id) -> Result<bool, ExtractorError> {
        let id = self.store.new_id();
        let mut branch_results = Vec::new();
        self.extract_if_chain(node, function_id, &mut branch_results)?;
        self.store.add_if_branch(IfBranch { id, function_id, branch_results })?;
        Ok(true)
    }

    /// `if` children are conventionally `(cond=0, then=1, else?=2)`, where an
    /// `else if` appears as the else slot's single child being another
    /// `IfStmt` (§4.1). Recurses on that nested `IfStmt` to flatten the
    /// whole chain into one flat `branch_results` list, terminated by at
    /// most one else-sentinel entry (invariant 4).
    fn extract_if_chain<C: AstCursor + Clone>(&mut self, node: &C, function_id: Id, out: &mut Vec<BranchResult>) -> Result<(), ExtractorError> {
        let children = node.get_children();
        let missing = || ExtractorError::MissingBody { section: CodeSection::new(node.extent_start(), node.extent_end()) };
        let cond = children.first().ok_or_else(missing)?;
        let then_branch = children.get(1).ok_or_else(missing)?;

        let (evaluation_marker_id, conditions, condition_possibilities, evaluation_section) = self.extract_decision(cond)?;
        let body_section = CodeSection::new(then_branch.extent_start(), then_branch.extent_end());
        self.walk_branch_body(then_branch, function_id)?;
        out.push(BranchResult { evaluation_marker_id, condition_possibilities, conditions, evaluation_section, body_section });

        if let Some(else_branch) = children.get(2) {
            let else_children = else_branch.get_children();
            if else_branch.kind() == NodeKind::IfStmt {
                self.extract_if_chain(else_branch, function_id, out)?;
            } else if let Some(nested_if) = else_children.iter().find(|c| c.kind() == NodeKind::IfStmt) {
                self.extract_if_chain(nested_if, function_id, out)?;
            } else {
                let body_section = CodeSection::new(else_branch.extent_start(), else_branch.extent_end());
                self.walk_branch_body(else_branch, function_id)?;
                out.push(BranchResult {
                    evaluation_marker_id: ELSE_SENTINEL_ID,
                    condition_possibilities: Vec::new(),
                    conditions: Vec::new(),
                    evaluation_section: body_section,
                    body_section,
                });
            }
        }
        Ok(())
    }

    /// Walks a branch body's own statement sequence (compound or a single
    /// bare statement) as an independent checkpoint-covered region, seeded
    /// fresh rather than inherited from the enclosing block (§4.1: entering
    /// a branch always starts a new region). Returns the inner walk's result
    /// so callers that care whether the body bubbles (loops, per §4.1) can
    /// observe it; callers that don't (if/else branches, which always force
    /// a fresh checkpoint on their own merge point) simply discard it.
    fn walk_branch_body<C: AstCursor + Clone>(&mut self, body: &C, function_id: Id) -> Result<crate::extractor::WalkResult, ExtractorError> {
        if body.kind() == NodeKind::CompoundStmt {
            self.walk_sequence(&body.get_children(), function_id, None)
        } else {
            self.compound_wraps.push(CodeSection::new(body.extent_start(), body.extent_end()));
            self.walk_sequence(std::slice::from_ref(body), function_id, None)
        }
    }

    /// Switch extraction (§4.1). The cursor abstraction models case/default
    /// labels as flat siblings of the switch body rather than the nested
    /// wrapping libclang itself returns, so cases are recovered by grouping
    /// consecutive label cursors into "label runs": every label in a run
    /// shares the same trailing body and the same `checkpoint_marker_id`,
    /// reproducing fall-through grouping without needing recursive,
    /// innermost-first emission.
    pub(crate) fn extract_switch<C: AstCursor + Clone>(&mut self, node: &C, function_id: Id) -> Result<bool, ExtractorError> {
        let children = node.get_children();
        let cond = children.first().ok_or_else(|| ExtractorError::MissingBody {
            section: CodeSection::new(node.extent_start(), node.extent_end()),
        })?;
        let body = children.get(1).ok_or_else(|| ExtractorError::MissingBody {
            section: CodeSection::new(node.extent_start(), node.extent_end()),
        })?;
        let _ = cond; // switch conditions are not decisions/conditions per §4.1; only checkpoints apply within the body.

        let switch_section = CodeSection::new(node.extent_start(), node.extent_end());
        let id = self.store.new_id();
        let cases = self.walk_switch_body(&body.get_children(), function_id)?;
        self.store.add_switch_branch(SwitchBranch { id, function_id, switch_section, cases })?;
        Ok(true)
    }

    fn walk_switch_body<C: AstCursor + Clone>(&mut self, body_children: &[C], function_id: Id) -> Result<Vec<Case>, ExtractorError> {
        let mut cases = Vec::new();
        let mut i = 0;
        while i < body_children.len() {
            let run_start = i;
            while i < body_children.len() && is_case_label(&body_children[i]) {
                i += 1;
            }
            if i == run_start {
                // Non-label statement with no preceding label in this scan position: part of a
                // previous run's body, already consumed. Skip defensively to avoid looping forever.
                i += 1;
                continue;
            }

            let run = &body_children[run_start..i];
            let body_start = i;
            while i < body_children.len() && !is_case_label(&body_children[i]) {
                i += 1;
            }
            let body_stmts = &body_children[body_start..i];

            let (checkpoint_marker_id, body_section) = if body_stmts.is_empty() {
                let last_label_end = run.last().expect("run is non-empty").extent_end();
                let placeholder = CodeSection::new(last_label_end, CodePosition::new(last_label_end.line, last_label_end.column + 1));
                (ELSE_SENTINEL_ID, placeholder)
            } else {
                let section = CodeSection::new(body_stmts.first().unwrap().extent_start(), body_stmts.last().unwrap().extent_end());
                let checkpoint_id = if self.checkpoints_enabled { self.store.new_id() } else { ELSE_SENTINEL_ID };
                if self.checkpoints_enabled {
                    self.store.add_checkpoint(checkpoint_id, body_stmts.first().unwrap().extent_start())?;
                }
                self.walk_sequence(body_stmts, function_id, Some(checkpoint_id))?;
                (checkpoint_id, section)
            };

            for label in run {
                let (kind, evaluation_section) = match label.kind() {
                    NodeKind::DefaultStmt => {
                        let start = label.extent_start();
                        (CaseKind::Default, CodeSection::new(start, CodePosition::new(start.line, start.column + DEFAULT_KEYWORD_WIDTH)))
                    }
                    _ => {
                        // `[case-start, E-end]`: the case value expression, when exposed as a
                        // child, bounds the section tighter than the label's own extent (which
                        // includes the trailing colon).
                        let end = label.get_children().first().map_or_else(|| label.extent_end(), |value| value.extent_end());
                        (CaseKind::Case, CodeSection::new(label.extent_start(), end))
                    }
                };
                cases.push(Case { checkpoint_marker_id, kind, evaluation_section, body_section });
            }
        }
        Ok(cases)
    }

    /// `for` children are `(init=0, cond=1, step=2, body=3)` (§4.1). A
    /// missing init/cond/step (`for(;;)`) is legal C and is tolerated by
    /// treating the evaluation as always-true with zero conditions.
    pub(crate) fn extract_for<C: AstCursor + Clone>(&mut self, node: &C, function_id: Id) -> Result<bool, ExtractorError> {
        let children = node.get_children();
        let body = children.get(3).ok_or_else(|| ExtractorError::MissingBody {
            section: CodeSection::new(node.extent_start(), node.extent_end()),
        })?;
        let cond = children.get(1);
        self.extract_loop(node, LoopKind::For, cond, body, function_id)
    }

    /// `while` children are `(cond=0, body=1)` (§4.1).
    pub(crate) fn extract_while<C: AstCursor + Clone>(&mut self, node: &C, function_id: Id) -> Result<bool, ExtractorError> {
        let children = node.get_children();
        let missing = || ExtractorError::MissingBody { section: CodeSection::new(node.extent_start(), node.extent_end()) };
        let cond = children.first().ok_or_else(missing)?;
        let body = children.get(1).ok_or_else(missing)?;
        self.extract_loop(node, LoopKind::While, Some(cond), body, function_id)
    }

    /// `do`/`while` children are `(body=0, cond=1)` (§4.1): the body is
    /// walked before the condition is ever evaluated.
    pub(crate) fn extract_do_while<C: AstCursor + Clone>(&mut self, node: &C, function_id: Id) -> Result<bool, ExtractorError> {
        let children = node.get_children();
        let missing = || ExtractorError::MissingBody { section: CodeSection::new(node.extent_start(), node.extent_end()) };
        let body = children.first().ok_or_else(missing)?;
        let cond = children.get(1).ok_or_else(missing)?;
        self.extract_loop(node, LoopKind::DoWhile, Some(cond), body, function_id)
    }

    fn extract_loop<C: AstCursor + Clone>(&mut self, node: &C, kind: LoopKind, cond: Option<&C>, body: &C, function_id: Id) -> Result<bool, ExtractorError> {
        let (evaluation_marker_id, conditions, condition_possibilities, evaluation_section) = match cond {
            Some(cond) => self.extract_decision(cond)?,
            None => {
                let section = CodeSection::new(node.extent_start(), node.extent_end());
                (ELSE_SENTINEL_ID, Vec::new(), Vec::new(), section)
            }
        };
        let body_section = CodeSection::new(body.extent_start(), body.extent_end());
        let body_walk = self.walk_branch_body(body, function_id)?;

        let id = self.store.new_id();
        self.store.add_loop(Loop {
            id,
            kind,
            function_id,
            evaluation_marker_id,
            evaluation_section,
            body_section,
            condition_possibilities,
            conditions,
        })?;
        // §4.1: "if the body walker bubbles a required checkpoint, the loop
        // bubbles it too" — unlike if/else (which always forces a fresh
        // checkpoint at its merge point), a loop that finishes normally
        // falls back to the same reachable region that was active before it
        // (a zero-iteration path reaches the statement after the loop
        // without ever entering the body), so the loop only bubbles when its
        // body explicitly does.
        Ok(body_walk.bubbles)
    }
}

fn is_case_label<C: AstCursor>(cursor: &C) -> bool {
    matches!(cursor.kind(), NodeKind::CaseStmt | NodeKind::DefaultStmt)
}
