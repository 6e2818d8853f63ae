//! # MarkerPlan & SourceRewriter
//!
//! Turns a translation unit's markers into an ordered sequence of text
//! insertions, then applies them to the original source without ever
//! re-indexing a not-yet-processed position (§4.3). The two concerns are
//! split the way the spec names them: [`plan`] builds the insertion list,
//! [`rewriter`] splices it into source text.
pub mod plan;
pub mod rewriter;

pub use plan::{build_plan, Insertion, MarkerRank};
pub use rewriter::rewrite;
