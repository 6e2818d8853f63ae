use crate::marker_plan::plan::Insertion;

/// Applies an already-sorted insertion plan to `source`, then prepends the
/// wrapper prologue (§4.3). The plan must be sorted descending by
/// `(position, rank)` — see [`crate::marker_plan::build_plan`] — so that
/// every splice happens strictly to the right of positions not yet visited,
/// and coordinates of unapplied insertions never need re-indexing.
///
/// The prologue sits at line 1, column 1 by construction; since that is the
/// lexicographically smallest possible position, every other insertion in
/// the plan is applied before it would ever be reached, so the prologue is
/// simply prepended to the final joined text rather than spliced in.
pub fn rewrite(source: &str, plan: &[Insertion], prologue: &str) -> String {
    let mut lines: Vec<String> = source.split('\n').map(str::to_string).collect();

    for insertion in plan {
        let line_idx = (insertion.position.line - 1) as usize;
        let col_idx = (insertion.position.column - 1) as usize;
        let line = lines.get_mut(line_idx).expect("insertion position must lie within the source");

        let byte_idx = char_index_to_byte_index(line, col_idx);
        line.insert_str(byte_idx, &insertion.text);
    }

    format!("{prologue}{}", lines.join("\n"))
}

/// Converts a 0-based character offset into the byte offset `String::insert_str`
/// needs, since source files may contain multi-byte UTF-8 characters before
/// the target column.
fn char_index_to_byte_index(line: &str, char_idx: usize) -> usize {
    line.char_indices().nth(char_idx).map_or(line.len(), |(byte_idx, _)| byte_idx)
}
