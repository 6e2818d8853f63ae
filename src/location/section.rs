use crate::location::position::CodePosition;
use serde::Serialize;

/// A contiguous range of source text, `start` inclusive and `end` exclusive:
/// `end` names the first character *after* the section, matching how the
/// AST provider reports `extent.end`. Serializes flattened to
/// `{start_line, start_column, end_line, end_column}` (§4.4) via
/// [`FlatCodeSection`] rather than as a nested `{start: {...}, end: {...}}`
/// object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "FlatCodeSection")]
pub struct CodeSection {
    pub start: CodePosition,
    pub end: CodePosition,
}

impl CodeSection {
    /// # Panics
    /// Panics if `end` is not strictly after `start`.
    pub fn new(start: CodePosition, end: CodePosition) -> Self {
        assert!(end > start, "CodeSection end {end} must be strictly after start {start}");
        Self { start, end }
    }

    /// Builds a section that spans from the start of `self` through the end of `other`.
    pub fn merged(&self, other: &CodeSection) -> CodeSection {
        CodeSection { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    pub fn contains(&self, pos: CodePosition) -> bool {
        pos >= self.start && pos < self.end
    }

    pub fn contains_section(&self, other: &CodeSection) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl std::fmt::Display for CodeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Flattened on-wire shape used by [`crate::serializer`] for every `CodeSection`
/// field in the CID schema (§4.4: `{start_line, start_column, end_line, end_column}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlatCodeSection {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl From<CodeSection> for FlatCodeSection {
    fn from(s: CodeSection) -> Self {
        FlatCodeSection {
            start_line: s.start.line,
            start_column: s.start.column,
            end_line: s.end.line,
            end_column: s.end.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32, column: u32) -> CodePosition {
        CodePosition::new(line, column)
    }

    #[test]
    fn new_and_fields() {
        let section = CodeSection::new(pos(1, 1), pos(1, 5));
        assert_eq!(section.start, pos(1, 1));
        assert_eq!(section.end, pos(1, 5));
    }

    #[test]
    fn merged_takes_widest_bounds() {
        let a = CodeSection::new(pos(2, 1), pos(2, 5));
        let b = CodeSection::new(pos(1, 3), pos(3, 1));
        let merged = a.merged(&b);
        assert_eq!(merged.start, pos(1, 3));
        assert_eq!(merged.end, pos(3, 1));
    }

    #[test]
    fn contains_is_half_open() {
        let section = CodeSection::new(pos(1, 1), pos(1, 5));
        assert!(section.contains(pos(1, 1)));
        assert!(section.contains(pos(1, 4)));
        assert!(!section.contains(pos(1, 5)));
    }

    #[test]
    #[should_panic]
    fn rejects_non_increasing_bounds() {
        CodeSection::new(pos(1, 5), pos(1, 5));
    }

    #[test]
    fn flattens_for_serialization() {
        let section = CodeSection::new(pos(5, 2), pos(7, 9));
        let flat: FlatCodeSection = section.into();
        assert_eq!(flat, FlatCodeSection { start_line: 5, start_column: 2, end_line: 7, end_column: 9 });
    }

    #[test]
    fn json_serializes_flat_not_nested() {
        let section = CodeSection::new(pos(5, 2), pos(7, 9));
        let value = serde_json::to_value(section).unwrap();
        assert_eq!(value, serde_json::json!({"start_line": 5, "start_column": 2, "end_line": 7, "end_column": 9}));
        assert!(value.get("start").is_none(), "CodeSection must not serialize as a nested {{start, end}} object (§4.4)");
    }
}
