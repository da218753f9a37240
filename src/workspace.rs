use crate::error::WorkspaceError;
use std::path::Path;
use std::path::PathBuf;

/// Recognized dependency manifests, in lookup priority order.
pub const MANIFEST_FILES: [&str; 2] = ["conanfile.py", "conanfile.txt"];

/// Finds the workspace root for `file` among `folders`.
///
/// Only folders that are path-prefixes of `file` are considered, ordered
/// shortest path first, and the first one containing a manifest from
/// [`MANIFEST_FILES`] wins. Editors pass their open project folders here;
/// the CLI passes the target path's ancestor chain.
pub fn find_workspace(file: &Path, folders: &[PathBuf]) -> Result<PathBuf, WorkspaceError> {
  let mut candidates: Vec<&PathBuf> = folders
    .iter()
    .filter(|folder| file.starts_with(folder))
    .collect();

  // shortest path first
  candidates.sort_by_key(|folder| folder.as_os_str().len());

  for folder in candidates {
    for manifest in MANIFEST_FILES {
      if folder.join(manifest).is_file() {
        return Ok(folder.clone());
      }
    }
  }

  Err(WorkspaceError::ManifestNotFound)
}
