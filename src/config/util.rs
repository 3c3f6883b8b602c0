//! Configuration file discovery.

use std::path::{Path, PathBuf};

/// Find `name` in `start` or the nearest ancestor directory.
///
/// ```text
/// /home/user/site/src/pages/   ← start
/// /home/user/site/routemap.toml ← found
/// ```
pub fn find_config_file(start: &Path, name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
