use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, prompt_confirm, warning};
use std::io;
use std::path::Path;

/// Check whether the output file can be created or overwritten.
///
/// Missing file or `force` pass straight through; otherwise the user is
/// asked before anything is clobbered.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if prompt_confirm("Overwrite?")? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
