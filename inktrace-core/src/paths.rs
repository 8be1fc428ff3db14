use std::path::{Path, PathBuf};

/// File name of the entries blob, versioned like the original storage key.
pub const STORE_FILE: &str = "entries.v1.json";

pub fn store_path(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE)
}
