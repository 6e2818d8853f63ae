// src/lib.rs
//! # coveron
//!
//! A source-to-source coverage instrumenter for C and C++. Given an
//! already-parsed translation-unit AST, walks it to enumerate
//! coverage-relevant syntactic constructs, emits an instrumented copy of
//! the source containing calls to a runtime helper, and serializes a CID
//! sidecar describing every instrumented construct (§1, §2).
//!
//! ## Pipeline
//! * [`ast`] - the `AstCursor` surface a concrete C/C++ parser binds to
//! * [`extractor`] - walks the AST and builds every CID entity
//! * [`store`] - the in-memory CID container and ID allocator
//! * [`marker_plan`] - turns markers into ordered text insertions and applies them
//! * [`serializer`] - writes the CID as (optionally gzip-wrapped) JSON
//! * [`driver`] - per-translation-unit orchestration and caching
//!
//! ## Supporting modules
//! * [`model`] - the CID data model
//! * [`location`] - source position/section primitives
//! * [`sourcefile`] - derives every on-disk path for a translation unit
//! * [`prologue`] - the wrapper struct/prologue text the rewriter prepends
//! * [`config`] / [`cli`] - resolved settings and the `--CVR_*` argument surface
//! * [`error`] - the error taxonomy for every stage
//! * [`fixtures`] - an in-memory `AstCursor` used by this crate's own tests and benchmarks
pub mod ast;
pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod extractor;
pub mod fixtures;
pub mod location;
pub mod marker_plan;
pub mod model;
pub mod prologue;
pub mod serializer;
pub mod sourcefile;
pub mod store;
