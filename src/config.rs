//! # Configuration
//!
//! Resolved, read-only settings shared by every translation unit a driver
//! run processes, derived from [`crate::cli::Args`] (§6, supplemented from
//! `original_source/coveron_instrumenter/Configuration.py`/`ArgumentHandler.py`).
use std::path::PathBuf;

use crate::cli::Args;

#[derive(Debug, Clone)]
pub struct Configuration {
    pub verbose: bool,
    pub force: bool,
    pub nocomp_cid: bool,
    pub poll_ppd: bool,
    pub checkpoint_markers_enabled: bool,
    pub evaluation_markers_enabled: bool,
    pub compiler_exec: PathBuf,
    pub runtime_helper_header_path: String,
    pub output_abs_path: PathBuf,
    /// Every argument not recognized as a `--CVR_*` flag, forwarded verbatim
    /// to the downstream compiler (§6: "all unknown args are forwarded").
    pub passthrough_args: Vec<String>,
}

impl Configuration {
    /// Resolves `args` into a [`Configuration`]; `output_abs_path` defaults
    /// to the current working directory when `-o`/`--output` was absent.
    pub fn from_args(args: Args) -> std::io::Result<Self> {
        let output_abs_path = match args.output {
            Some(path) => path,
            None => std::env::current_dir()?,
        };

        Ok(Self {
            verbose: args.verbose,
            force: args.force,
            nocomp_cid: args.nocomp_cid,
            poll_ppd: args.poll_ppd,
            checkpoint_markers_enabled: !args.no_checkpoint,
            evaluation_markers_enabled: !args.no_evaluation,
            compiler_exec: args.compiler_exec,
            runtime_helper_header_path: "coveron_runtime.h".to_string(),
            output_abs_path,
            passthrough_args: args.passthrough,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(no_checkpoint: bool, no_evaluation: bool, output: Option<PathBuf>) -> Args {
        Args {
            compiler_exec: PathBuf::from("/usr/bin/gcc"),
            no_checkpoint,
            no_evaluation,
            verbose: false,
            force: false,
            poll_ppd: false,
            nocomp_cid: false,
            output,
            passthrough: Vec::new(),
        }
    }

    #[test]
    fn markers_default_enabled_unless_flagged_off() {
        let config = Configuration::from_args(args(false, false, None)).unwrap();
        assert!(config.checkpoint_markers_enabled);
        assert!(config.evaluation_markers_enabled);

        let config = Configuration::from_args(args(true, true, None)).unwrap();
        assert!(!config.checkpoint_markers_enabled);
        assert!(!config.evaluation_markers_enabled);
    }

    #[test]
    fn output_path_defaults_to_cwd() {
        let config = Configuration::from_args(args(false, false, None)).unwrap();
        assert_eq!(config.output_abs_path, std::env::current_dir().unwrap());
    }

    #[test]
    fn explicit_output_path_is_honored() {
        let config = Configuration::from_args(args(false, false, Some(PathBuf::from("/tmp/out")))).unwrap();
        assert_eq!(config.output_abs_path, PathBuf::from("/tmp/out"));
    }
}
