//! # Fixtures
//!
//! An in-memory [`crate::ast::AstCursor`] implementation standing in for a
//! concrete libclang/Tree-sitter adapter (§6, §9: "no adapter ships in this
//! crate"). This crate's own unit tests and benchmarks build small trees of
//! [`TestCursor`] by hand to drive [`crate::extractor::CoverageExtractor`]
//! without a real C/C++ parser.
use crate::ast::{AstCursor, BinaryOpKind, NodeKind};
use crate::location::CodePosition;

/// A hand-built node in a fixture AST. Mirrors exactly the surface
/// [`AstCursor`] exposes; nothing else.
#[derive(Debug, Clone)]
pub struct TestCursor {
    pub kind: NodeKind,
    pub displayname: String,
    pub file_basename: String,
    pub location: CodePosition,
    pub extent_start: CodePosition,
    pub extent_end: CodePosition,
    pub children: Vec<TestCursor>,
    pub binary_operator: BinaryOpKind,
}

impl TestCursor {
    pub fn new(kind: NodeKind, extent_start: CodePosition, extent_end: CodePosition) -> Self {
        Self {
            kind,
            displayname: String::new(),
            file_basename: "test.c".to_string(),
            location: extent_start,
            extent_start,
            extent_end,
            children: Vec::new(),
            binary_operator: BinaryOpKind::Other,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<TestCursor>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.displayname = name.into();
        self
    }

    #[must_use]
    pub fn with_binary_operator(mut self, op: BinaryOpKind) -> Self {
        self.binary_operator = op;
        self
    }

    #[must_use]
    pub fn with_file_basename(mut self, name: impl Into<String>) -> Self {
        self.file_basename = name.into();
        self
    }
}

impl AstCursor for TestCursor {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn displayname(&self) -> String {
        self.displayname.clone()
    }

    fn file_basename(&self) -> String {
        self.file_basename.clone()
    }

    fn location(&self) -> CodePosition {
        self.location
    }

    fn extent_start(&self) -> CodePosition {
        self.extent_start
    }

    fn extent_end(&self) -> CodePosition {
        self.extent_end
    }

    fn get_children(&self) -> Vec<Self> {
        self.children.clone()
    }

    fn binary_operator(&self) -> BinaryOpKind {
        self.binary_operator
    }
}

/// Shorthand for [`CodePosition::new`], used pervasively by fixture-building tests.
pub fn pos(line: u32, column: u32) -> CodePosition {
    CodePosition::new(line, column)
}

/// A leaf cursor of `kind` spanning `[start, end)`, with no children — the
/// common case for an atomic statement or condition in a fixture tree.
pub fn leaf(kind: NodeKind, start: CodePosition, end: CodePosition) -> TestCursor {
    TestCursor::new(kind, start, end)
}
