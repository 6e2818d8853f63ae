// src/cli.rs
//! # CLI
//!
//! The `--CVR_*` argument surface (§6). Flag-splitting and downstream
//! compiler invocation are themselves Non-goals of the core pipeline (§1):
//! known `--CVR_*` flags configure the instrumentation pass; everything
//! else — source files to instrument, plus every flag meant for the
//! downstream compiler — is collected into `passthrough` and forwarded
//! verbatim (§6: "all unknown args are forwarded to the downstream
//! compiler; source files detected by extension are redirected to their
//! `.instr` counterparts").
use clap::{
    Parser, ValueHint,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use std::path::PathBuf;

const HELP_STR: &str = r#"
{before-help}{name} {version}
{author-with-newline}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}"#;

// Custom styles for clap
pub fn custom_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightMagenta.on_default() | Effects::BOLD)
        .error(AnsiColor::BrightRed.on_default() | Effects::BOLD)
        .valid(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .invalid(AnsiColor::BrightYellow.on_default() | Effects::BOLD | Effects::UNDERLINE)
        .placeholder(AnsiColor::BrightBlue.on_default())
        .usage(AnsiColor::BrightCyan.on_default() | Effects::BOLD | Effects::UNDERLINE)
}

#[derive(Parser, Debug)]
#[command(
    version = clap::crate_version!(),
    author = clap::crate_authors!("\n"),
    about,
    long_about = None,
    help_template = HELP_STR,
    styles = custom_styles()
)]
pub struct Args {
    /// Path to the downstream compiler this instrumenter delegates to after rewriting sources.
    #[arg(long = "CVR_COMPILER_EXEC", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub compiler_exec: PathBuf,

    /// Disable statement-coverage checkpoint markers.
    #[arg(long = "CVR_NO_CHECKPOINT")]
    pub no_checkpoint: bool,

    /// Disable boolean decision/condition evaluation markers.
    #[arg(long = "CVR_NO_EVALUATION")]
    pub no_evaluation: bool,

    /// Print a progress line per translation unit.
    #[arg(long = "CVR_VERBOSE")]
    pub verbose: bool,

    /// Re-instrument even when the on-disk CID cache hash already matches.
    #[arg(long = "CVR_FORCE")]
    pub force: bool,

    /// Poll the downstream compiler for its default predefined macros.
    #[arg(long = "CVR_POLL_PPD")]
    pub poll_ppd: bool,

    /// Write the CID as plain JSON instead of gzip-wrapped.
    #[arg(long = "CVR_NOCOMP_CID")]
    pub nocomp_cid: bool,

    /// Output directory for instrumented sources and CID sidecars; defaults to the current directory.
    #[arg(short, long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Source files and downstream-compiler flags, forwarded verbatim.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<String>,
}
