use crate::error::coveron_error::CoveronError;
use console::style;

/// Prints one styled diagnostic line per failing translation unit, naming
/// the file and the error kind (§7: "a short diagnostic per failing TU
/// naming the file and error kind; the instrumenter continues with
/// remaining TUs"). Unlike the source-level lexer/parser errors this
/// reporter's predecessor displayed, extraction failures name a construct
/// rather than a token, so there is no single source line worth rendering
/// here.
pub fn report_tu_failure(input_path: &str, error: &CoveronError) {
    eprintln!("{} {}: {}", style("ERROR").red().bold(), style(input_path).cyan(), style(error).yellow());
}

/// Prints a verbose-mode progress line; only emitted when `--CVR_VERBOSE` is set.
pub fn report_verbose(message: &str) {
    eprintln!("{} {}", style("info:").blue().bold(), message);
}

/// Prints a cache-hit notice in verbose mode.
pub fn report_cache_hit(input_path: &str) {
    eprintln!("{} {} {}", style("cache:").green().bold(), input_path, style("unchanged, skipping").dim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::coveron_error::ExtractorError;
    use crate::location::{CodePosition, CodeSection};

    #[test]
    fn report_tu_failure_does_not_panic() {
        let section = CodeSection::new(CodePosition::new(1, 1), CodePosition::new(1, 2));
        let err = CoveronError::Extractor(ExtractorError::MissingBody { section });
        report_tu_failure("foo.c", &err);
    }
}
