/// Monotonically increasing, 32-bit, per-translation-unit identifier.
/// Allocated by [`crate::store::CidStore::new_id`] starting at 1; `0` is the
/// none/else-branch sentinel (§3).
pub type Id = u32;

/// Else-branch / "none" sentinel used where an `evaluation_marker_id` field
/// would otherwise be required but no evaluation marker exists (the
/// terminal `else` of an `IfBranch`, per §3's `BranchResult`).
pub const ELSE_SENTINEL_ID: Id = 0;

/// Sentinel `parent_id` for functions declared at file scope (§3).
pub const FILE_SCOPE_PARENT_ID: i64 = -1;
