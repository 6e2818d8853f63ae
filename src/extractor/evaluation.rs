use crate::ast::{AstCursor, BinaryOpKind, NodeKind};
use crate::error::ExtractorError;
use crate::extractor::CoverageExtractor;
use crate::location::CodeSection;
use crate::model::ids::Id;
use crate::model::markers::EvaluationKind;
use crate::model::{ConditionInfo, ConditionPossibility, ConditionResult};

/// Atomic-condition ceiling (§4.1): the possibility table grows
/// exponentially with condition count, so extraction refuses decisions
/// beyond this size with `ExtractorError::TooManyConditions`.
const MAX_CONDITIONS: usize = 64;

impl<'a> CoverageExtractor<'a> {
    /// Decision-level evaluation extraction (§4.1, outer entry). Recurses
    /// into condition-level extraction on the same cursor, then allocates
    /// one `DECISION` `EvaluationMarker` covering the whole expression span.
    pub(crate) fn extract_decision<C: AstCursor + Clone>(
        &mut self,
        expr: &C,
    ) -> Result<(Id, Vec<ConditionInfo>, Vec<ConditionPossibility>, CodeSection), ExtractorError> {
        let section = CodeSection::new(expr.extent_start(), expr.extent_end());
        if !self.evaluations_enabled {
            return Ok((0, Vec::new(), Vec::new(), section));
        }

        let (conditions, possibilities) = self.extract_condition(expr)?;
        if conditions.len() > MAX_CONDITIONS {
            return Err(ExtractorError::TooManyConditions { section, count: conditions.len() });
        }

        let marker_id = self.store.new_id();
        self.store.add_evaluation(marker_id, section, EvaluationKind::Decision)?;
        Ok((marker_id, conditions, possibilities, section))
    }

    /// Condition-level evaluation extraction (§4.1). Only called once
    /// `evaluations_enabled` has already been confirmed by the caller.
    pub(crate) fn extract_condition<C: AstCursor + Clone>(&mut self, expr: &C) -> Result<(Vec<ConditionInfo>, Vec<ConditionPossibility>), ExtractorError> {
        match expr.kind() {
            NodeKind::ParenExpr => {
                let inner_children = expr.get_children();
                let inner = inner_children.first().ok_or_else(|| ExtractorError::MissingBody {
                    section: CodeSection::new(expr.extent_start(), expr.extent_end()),
                })?;
                self.extract_condition(inner)
            }
            NodeKind::BinaryOperator if matches!(expr.binary_operator(), BinaryOpKind::LogicalAnd | BinaryOpKind::LogicalOr) => {
                let op = expr.binary_operator();
                let operands = expr.get_children();
                let left = operands.first().ok_or_else(|| ExtractorError::MissingBody {
                    section: CodeSection::new(expr.extent_start(), expr.extent_end()),
                })?;
                let right = operands.get(1).ok_or_else(|| ExtractorError::MissingBody {
                    section: CodeSection::new(expr.extent_start(), expr.extent_end()),
                })?;

                let (mut left_conditions, left_possibilities) = self.extract_condition(left)?;
                let (right_conditions, right_possibilities) = self.extract_condition(right)?;
                left_conditions.extend(right_conditions);
                let possibilities = compose(op, &left_possibilities, &right_possibilities);
                Ok((left_conditions, possibilities))
            }
            _ => {
                let section = CodeSection::new(expr.extent_start(), expr.extent_end());
                let marker_id = self.store.new_id();
                self.store.add_evaluation(marker_id, section, EvaluationKind::Condition)?;
                let info = ConditionInfo { evaluation_marker_id: marker_id, code_section: section };
                let possibilities = vec![
                    ConditionPossibility::new(true, vec![ConditionResult { evaluation_marker_id: marker_id, result: true }]),
                    ConditionPossibility::new(false, vec![ConditionResult { evaluation_marker_id: marker_id, result: false }]),
                ];
                Ok((vec![info], possibilities))
            }
        }
    }

    /// Depth-first search for a hidden ternary inside a larger statement's
    /// expression subtree (§4.1: "ternaries often appear as sub-expressions
    /// of larger statements"). A found ternary's own sub-expressions are not
    /// searched again — its condition/true/false spans are handled directly
    /// by `extract_ternary`.
    pub(crate) fn scan_for_ternary<C: AstCursor + Clone>(&mut self, node: &C, function_id: Id) -> Result<(), ExtractorError> {
        if node.kind() == NodeKind::ConditionalOperator {
            return self.extract_ternary(node, function_id);
        }
        for child in node.get_children() {
            self.scan_for_ternary(&child, function_id)?;
        }
        Ok(())
    }

    /// Ternary extraction (§4.1). Child 0 is the decision expression, child
    /// 1 the true expression, child 2 the false expression; the true/false
    /// sections are their spans verbatim.
    pub(crate) fn extract_ternary<C: AstCursor + Clone>(&mut self, node: &C, function_id: Id) -> Result<(), ExtractorError> {
        let children = node.get_children();
        let missing = || ExtractorError::MissingBody { section: CodeSection::new(node.extent_start(), node.extent_end()) };
        let cond = children.first().ok_or_else(missing)?;
        let true_expr = children.get(1).ok_or_else(missing)?;
        let false_expr = children.get(2).ok_or_else(missing)?;

        let (evaluation_marker_id, conditions, condition_possibilities, evaluation_section) = self.extract_decision(cond)?;
        let true_section = CodeSection::new(true_expr.extent_start(), true_expr.extent_end());
        let false_section = CodeSection::new(false_expr.extent_start(), false_expr.extent_end());

        let id = self.store.new_id();
        self.store.add_ternary(crate::model::TernaryExpression {
            id,
            function_id,
            evaluation_marker_id,
            evaluation_section,
            condition_possibilities,
            conditions,
            true_section,
            false_section,
        })?;
        Ok(())
    }
}

/// The load-bearing MC/DC truth-table compose rule (§4.1, §9): given the
/// possibility tables for a short-circuit binary operator's left and right
/// operands, builds the possibility table for the combined expression.
///
/// For AND: a true-left possibility composes with every right possibility
/// (conjoining their combinations, taking the right's decision result); a
/// false-left possibility is copied verbatim, since short-circuit
/// evaluation never touches the right side. For OR the roles invert:
/// true-left possibilities copy verbatim, false-left possibilities compose.
pub fn compose(op: BinaryOpKind, left: &[ConditionPossibility], right: &[ConditionPossibility]) -> Vec<ConditionPossibility> {
    let short_circuits_on = match op {
        BinaryOpKind::LogicalAnd => false,
        BinaryOpKind::LogicalOr => true,
        BinaryOpKind::Other => unreachable!("compose is only called for logical AND/OR"),
    };

    let mut out = Vec::new();
    for left_possibility in left {
        if left_possibility.decision_result == short_circuits_on {
            out.push(left_possibility.clone());
        } else {
            for right_possibility in right {
                let mut combination = left_possibility.combination.clone();
                combination.extend(right_possibility.combination.clone());
                out.push(ConditionPossibility::new(right_possibility.decision_result, combination));
            }
        }
    }
    out
}
