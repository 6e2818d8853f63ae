use clap::Parser;
use coveron::cli::Args;
use coveron::config::Configuration;
use coveron::error::error_reporter;
use coveron::error::CoveronError;
use coveron::sourcefile::{is_recognized_source_extension, SourceFile};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn main() {
    let args = Args::parse();
    let config = match Configuration::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to resolve configuration: {err}");
            std::process::exit(1);
        }
    };

    let source_paths: Vec<PathBuf> =
        config.passthrough_args.iter().map(PathBuf::from).filter(|path| is_recognized_source_extension(path)).collect();

    if config.verbose {
        error_reporter::report_verbose(&format!("{} translation unit(s) detected", source_paths.len()));
    }

    // Translation units are independent and may be dispatched in parallel, one
    // per logical core (§5: "translation units are independent and may be
    // dispatched in parallel by the driver").
    let exit_code = source_paths.par_iter().map(|input_path| process_one(input_path, &config)).max().unwrap_or(0);

    std::process::exit(exit_code);
}

fn process_one(input_path: &Path, config: &Configuration) -> i32 {
    let source_file = SourceFile::derive(input_path, &config.output_abs_path);

    if let Err(err) = parse_translation_unit(input_path) {
        error_reporter::report_tu_failure(&input_path.display().to_string(), &err);
        return 1;
    }

    // A real AST-provider binding calls through to
    // `coveron::driver::process_translation_unit(&source_file, tu_cursor, config)`
    // here, then `coveron::driver::invoke_compiler(&source_file, config)` on
    // success (§2, §6, §7) — the downstream compiler is never run against a
    // translation unit whose own instrumentation step failed.
    match coveron::driver::invoke_compiler(&source_file, config) {
        Ok(()) => 0,
        Err(err) => {
            error_reporter::report_tu_failure(&input_path.display().to_string(), &err);
            1
        }
    }
}

/// No concrete AST provider ships in this crate (§9: "the only thing that
/// needs a concrete implementation choice" — libclang via FFI is the
/// obvious choice; Tree-sitter is acceptable for the subset handled here).
/// Embedding this instrumenter in a real build means replacing this
/// function with one that drives an actual parser and feeds its cursor to
/// [`coveron::driver::process_translation_unit`]; until then every real
/// file fails with a `Parse` error, which the driver loop reports and
/// continues past (§7: "Parse error ... fatal per-TU; other TUs continue").
fn parse_translation_unit(input_path: &Path) -> Result<(), CoveronError> {
    Err(CoveronError::Parse {
        file: input_path.display().to_string(),
        message: "no concrete AST provider is bound in this build; see coveron::ast::AstCursor".to_string(),
    })
}
