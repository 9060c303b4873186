use std::fs;
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{HuntError, Result};
use crate::utils::ensure_dir;

/// Path-segment escaping: unreserved characters plus `$&+:=@` pass through.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// `<percent-encoded target>.html`
pub fn output_file_name(target: &str) -> String {
    format!("{}.html", utf8_percent_encode(target, PATH_SEGMENT))
}

/// Write the rendered dump page for `target` into `out_dir`, replacing any previous file.
pub fn write_page(out_dir: &Path, target: &str, page: &str) -> Result<PathBuf> {
    ensure_dir(out_dir)?;
    let path = out_dir.join(output_file_name(target));
    if let Err(source) = fs::write(&path, page) {
        return Err(HuntError::Output { path, source });
    }
    tracing::debug!(path = %path.display(), bytes = page.len(), "dump page written");
    Ok(path)
}
