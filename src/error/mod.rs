//! # Error Module
//!
//! Error types for every stage of the instrumentation pipeline, plus a
//! styled diagnostic printer for the driver's per-translation-unit failure
//! reports.
//!
//! ## Components
//!
//! * [`coveron_error`]: the top-level error enum and the per-stage error
//!   enums it wraps (`ExtractorError`, `StoreError`).
//! * [`error_reporter`]: formatted, short diagnostics naming the failing
//!   file and error kind (one line per failing TU — extraction failures are
//!   per-construct, not per-token, so there is no single caret-underlined
//!   span to show as the original transpiler's reporter did).
pub mod coveron_error;
pub mod error_reporter;

pub use coveron_error::{CoveronError, ExtractorError, StoreError};
