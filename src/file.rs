use crate::error::TouchstoneError;
use crate::touchstone::{parse_touchstone, Touchstone};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Largest port count accepted from a file extension.
pub const MAX_PORTS: usize = 999;

/// Port count from an `.sNp` extension, case-insensitive, in `1..=MAX_PORTS`.
pub fn nports_from_path<P: AsRef<Path>>(path: P) -> Result<usize, TouchstoneError> {
    let re_file_ext = Regex::new(r"(?i)^s(\d+)p$").expect("Invalid regex!");

    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    let nports = re_file_ext
        .captures(ext)
        .and_then(|caps| caps[1].parse::<usize>().ok())
        .filter(|&n| n > 0 && n <= MAX_PORTS && n.checked_mul(n).is_some());

    match nports {
        Some(n) => Ok(n),
        None => Err(TouchstoneError::InvalidExtension(
            path.display().to_string(),
        )),
    }
}

/// Read and parse a Touchstone file, taking the port count from its extension.
pub fn read_touchstone<P: AsRef<Path>>(path: P) -> Result<Touchstone, TouchstoneError> {
    let path = path.as_ref();
    let nports = nports_from_path(path)?;
    tracing::info!("reading {} as a {}-port Touchstone file", path.display(), nports);

    let content = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    Ok(parse_touchstone(&content, nports).with_name(name))
}
