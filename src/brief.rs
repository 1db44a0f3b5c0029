//! Design brief loading.

use std::path::Path;

use crate::errors::TeamError;

/// True if `path` points at an existing regular file.
pub fn brief_exists(path: &Path) -> bool {
    path.is_file()
}

/// Read the whole brief as UTF-8 text.
///
/// Fails with [`TeamError::BriefNotFound`] when the file is missing. The brief
/// is re-read on every call.
pub fn read_brief(path: &Path) -> Result<String, TeamError> {
    if !brief_exists(path) {
        return Err(TeamError::BriefNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| TeamError::io(path, e))?;
    tracing::debug!(path = %path.display(), chars = content.chars().count(), "Loaded design brief");
    Ok(content)
}
