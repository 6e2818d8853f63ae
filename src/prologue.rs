//! # Wrapper prologue
//!
//! Builds the per-translation-unit struct name and the prologue text the
//! rewriter prepends at line 1, column 1 (§4.3): the runtime header
//! `#include`, followed by the `___COVERON_FILE_T` struct definition
//! initialized with the source hash bytes, the instrumentation random
//! bytes, a false "initialized" flag, a null pointer, and the CRI filename
//! literal.

/// Derives the per-TU struct name from the lowercase-hex instrumentation
/// random (§4.3): `___COVERON_FILE_<RANDOM_UPPER>`.
pub fn struct_name(instrumentation_random_hex: &str) -> String {
    format!("___COVERON_FILE_{}", instrumentation_random_hex.to_ascii_uppercase())
}

/// Builds the exact prologue text §4.3 specifies.
pub fn build_prologue(struct_name: &str, source_sha256_hex: &str, instrumentation_random_hex: &str, runtime_header_path: &str, cri_basename: &str) -> String {
    let hash_bytes = hex_byte_list(source_sha256_hex);
    let random_bytes = hex_byte_list(instrumentation_random_hex);
    format!(
        "#include \"{runtime_header_path}\"\n___COVERON_FILE_T {struct_name} = {{\n{{{hash_bytes}}},\n{{{random_bytes}}},\n___COVERON_BOOL_FALSE,\n(void *)0,\n \"{cri_basename}\"}};\n\n"
    )
}

/// Splits a lowercase hex string into a comma-separated `0xHH` byte list,
/// e.g. `"ab12"` -> `"0xab, 0x12"`.
fn hex_byte_list(hex: &str) -> String {
    hex.as_bytes().chunks(2).map(|pair| format!("0x{}", std::str::from_utf8(pair).expect("hex string is ASCII"))).collect::<Vec<_>>().join(", ")
}
