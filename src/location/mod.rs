//! # Location Module
//!
//! Source position primitives shared by every stage of the instrumentation
//! pipeline. Positions are always 1-based and always refer to the
//! *original*, pre-instrumentation source text — the rewriter must never
//! cause a position recorded in the CID to drift.
pub mod position;
pub mod section;

pub use position::CodePosition;
pub use section::CodeSection;
