//! State commitment over bag contents.

use crate::cell::BagCell;

/// Computes a SHA-256 commitment over `cells` in order.
///
/// Two owners holding the same cells in the same order produce the same root,
/// so a live bag can be checked against a reloaded or replicated copy without
/// agreeing on a storage format. Reordering cells changes the root.
///
/// Each cell is hashed as its bincode encoding.
pub fn cells_root(cells: &[BagCell]) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();

    for cell in cells {
        // Fixed-width fields: bincode output is deterministic
        if let Ok(cell_bytes) = bincode::serialize(cell) {
            hasher.update(&cell_bytes);
        }
    }

    hasher.finalize().into()
}
