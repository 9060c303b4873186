use std::fs;
use std::path::Path;

use crate::error::{HuntError, Result};

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| HuntError::Output {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
