//! # AST Module
//!
//! The only thing [`crate::extractor::CoverageExtractor`] needs from a
//! concrete C/C++ parser binding: a small cursor/location/extent surface
//! (§6, §9). A concrete adapter binds `ASTCursor` to whichever parser the
//! embedding application provides — libclang via FFI is the obvious choice;
//! Tree-sitter is acceptable for the subset handled here but loses some
//! precision on evaluation spans. No adapter ships in this crate: the
//! extractor is parser-agnostic by construction, and tests exercise it
//! against the in-memory [`crate::fixtures::TestCursor`] fixture.
use crate::location::CodePosition;

/// Discriminant for the syntactic kinds the extractor dispatches on. Mirrors
/// libclang's `CXCursorKind` surface, trimmed to the constructs §4.1 names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    TranslationUnit,
    FunctionDecl,
    Constructor,
    Destructor,
    CompoundStmt,
    LabelStmt,
    ReturnStmt,
    BreakStmt,
    ContinueStmt,
    GotoStmt,
    IndirectGotoStmt,
    IfStmt,
    SwitchStmt,
    CaseStmt,
    DefaultStmt,
    ConditionalOperator,
    ForStmt,
    WhileStmt,
    DoStmt,
    ParenExpr,
    BinaryOperator,
    /// Anything not named above: declarations, opaque expressions,
    /// coroutines, lambdas with captures, template instantiations — handled
    /// as an opaque NORMAL statement per the Non-goals in §1.
    Other,
}

/// Discriminant for `BinaryOperator` cursors, restricted to what the
/// evaluation extractor cares about (§4.1: short-circuit AND/OR vs.
/// everything else, which is treated as atomic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOpKind {
    LogicalAnd,
    LogicalOr,
    Other,
}

/// The cursor surface the extractor is written against (§6, §9). A
/// `file_basename` accessor stands in for `location.file.name`'s file-name
/// component, since that is the only part of the path the root traversal
/// actually compares (§4.1: "Ignore any child whose source location's file
/// basename does not equal the primary input file basename").
pub trait AstCursor: Sized {
    fn kind(&self) -> NodeKind;
    fn displayname(&self) -> String;
    fn file_basename(&self) -> String;
    /// `location.{line,column}` — a cursor's nominal position (e.g. a
    /// function declaration's name, not its `extent.start`).
    fn location(&self) -> CodePosition;
    /// `extent.start.{line,column}`.
    fn extent_start(&self) -> CodePosition;
    /// `extent.end.{line,column}`.
    fn extent_end(&self) -> CodePosition;
    fn get_children(&self) -> Vec<Self>;
    /// Populated only when `kind() == NodeKind::BinaryOperator`.
    fn binary_operator(&self) -> BinaryOpKind;
}
