//! Line-level text matching.
//!
//! Files are matched as raw text, one line at a time. There is no parsing of
//! HCL: a reference inside a comment or an unrelated string still counts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

/// Whether any line of the file at `path` satisfies `matches`.
///
/// Lines are visited in order and scanning stops at the first match. Line
/// terminators (`\n` or `\r\n`) are stripped and invalid UTF-8 is replaced
/// rather than rejected. A file that cannot be opened or read yields `false`.
pub fn any_line<F>(path: &Path, mut matches: F) -> bool
where
    F: FnMut(&str) -> bool,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!("Cannot open {}: {}", path.display(), e);
            return false;
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return false,
            Ok(_) => {
                let mut line = buf.as_slice();
                if let Some(rest) = line.strip_suffix(b"\n") {
                    line = rest;
                }
                if let Some(rest) = line.strip_suffix(b"\r") {
                    line = rest;
                }
                if matches(String::from_utf8_lossy(line).as_ref()) {
                    return true;
                }
            }
            Err(e) => {
                debug!("Stopped reading {}: {}", path.display(), e);
                return false;
            }
        }
    }
}

/// Whether any line of the file contains `needle` as a literal substring.
pub fn contains(path: &Path, needle: &str) -> bool {
    any_line(path, |line| line.contains(needle))
}
