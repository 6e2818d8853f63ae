//! # SourceFile
//!
//! Derives every on-disk name a translation unit needs from its input path
//! (§3, and the `.tmp` staging detail supplemented from
//! `original_source/codeconut_instrumenter/Configuration.py`'s `SourceFile`
//! class).
use std::path::{Path, PathBuf};

/// The input path plus every output path derived from it. Constructed once
/// per translation unit and handed to the driver, the extractor (for the
/// file-basename comparison in the root traversal), and the rewriter/serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub input_path: PathBuf,
    pub instrumented_path: PathBuf,
    pub cid_path: PathBuf,
    pub cri_path: PathBuf,
}

impl SourceFile {
    /// Derives every path from `input_path` relative to `output_dir`. The
    /// `.instr` suffix is inserted before the final extension
    /// (`foo.cpp` → `foo.instr.cpp`, never `foo.cpp.instr`); `.cid`/`.cri`
    /// sidecars sit alongside it, named from the input's basename.
    pub fn derive(input_path: &Path, output_dir: &Path) -> Self {
        let basename = input_path.file_stem().and_then(|s| s.to_str()).unwrap_or("source").to_string();
        let extension = input_path.extension().and_then(|e| e.to_str()).unwrap_or("c").to_string();

        let instrumented_name = format!("{basename}.instr.{extension}");
        let cid_name = format!("{basename}.cid");
        let cri_name = format!("{basename}.cri");

        Self {
            input_path: input_path.to_path_buf(),
            instrumented_path: output_dir.join(instrumented_name),
            cid_path: output_dir.join(cid_name),
            cri_path: output_dir.join(cri_name),
        }
    }

    /// The write-then-rename staging name for `path` (§7: partial CID/instr
    /// files must never be written — write here, then rename to `path`).
    pub fn staging_path(path: &Path) -> PathBuf {
        let mut staged = path.as_os_str().to_owned();
        staged.push(".tmp");
        PathBuf::from(staged)
    }

    /// The basename the wrapper prologue literal embeds as the CRI path.
    pub fn cri_basename(&self) -> String {
        self.cri_path.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string()
    }
}

/// Input file extensions recognized by the driver, matched case-insensitively (§6).
pub fn is_recognized_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "c" | "cpp" | "c++"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instr_suffix_precedes_final_extension() {
        let sf = SourceFile::derive(Path::new("/src/foo.cpp"), Path::new("/out"));
        assert_eq!(sf.instrumented_path, PathBuf::from("/out/foo.instr.cpp"));
    }

    #[test]
    fn cid_and_cri_share_the_input_basename() {
        let sf = SourceFile::derive(Path::new("/src/foo.cpp"), Path::new("/out"));
        assert_eq!(sf.cid_path, PathBuf::from("/out/foo.cid"));
        assert_eq!(sf.cri_path, PathBuf::from("/out/foo.cri"));
        assert_eq!(sf.cri_basename(), "foo.cri");
    }

    #[test]
    fn staging_path_appends_tmp() {
        let staged = SourceFile::staging_path(Path::new("/out/foo.cid"));
        assert_eq!(staged, PathBuf::from("/out/foo.cid.tmp"));
    }

    #[test]
    fn recognizes_c_cpp_extensions_case_insensitively() {
        assert!(is_recognized_source_extension(Path::new("a.C")));
        assert!(is_recognized_source_extension(Path::new("a.CPP")));
        assert!(is_recognized_source_extension(Path::new("a.c++")));
        assert!(!is_recognized_source_extension(Path::new("a.h")));
    }
}
