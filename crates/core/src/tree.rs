//! Build-tree lifecycle.
//!
//! Every invocation starts from an empty tree: whatever sits at the output
//! path is removed recursively and the directory is recreated, so no artifact
//! built against a previous topology survives.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::Result;
use crate::error::BuildError;

/// Remove `path` and everything beneath it, then recreate it empty.
///
/// Converges to the same final state from any prior one: absent, empty,
/// populated, or a non-directory occupying the path. Filesystem denial is
/// fatal and not retried.
pub fn reset_tree(path: &Path) -> Result<()> {
  match fs::symlink_metadata(path) {
    Ok(meta) => {
      debug!(path = %path.display(), "removing stale build tree");
      let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
      } else {
        fs::remove_file(path)
      };
      removed.map_err(|e| tree_reset(path, e))?;
    }
    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
    Err(e) => return Err(tree_reset(path, e)),
  }

  fs::create_dir_all(path).map_err(|e| tree_reset(path, e))?;
  debug!(path = %path.display(), "created empty build tree");

  Ok(())
}

fn tree_reset(path: &Path, source: io::Error) -> BuildError {
  BuildError::TreeReset {
    path: path.to_path_buf(),
    source,
  }
}
