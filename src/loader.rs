use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use regex::Regex;

use crate::talk::Talk;

/// Read talks from `path` in file order.
///
/// Blank lines, lines matching `ignore_lines` and lines that fail to parse are skipped. A line
/// that is not valid UTF-8 is skipped as malformed, the lines around it are still read. Fails
/// when the file cannot be opened or read.
pub fn try_load(path: &Path, ignore_lines: Option<&Regex>) -> Result<Vec<Talk>, anyhow::Error> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open schedule file: {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut talks = Vec::new();
    let mut n = 0;
    let mut bytes = Vec::new();
    // lines are read as bytes so that text in another encoding costs only that line
    while reader.read_until(b'\n', &mut bytes)
        .with_context(|| format!("path: {}, line: {}", path.display(), n + 1))? != 0 {
        n += 1;
        let line = match String::from_utf8(std::mem::take(&mut bytes)) {
            Ok(line) => line,
            Err(_) => continue,
        };
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        if let Some(r) = ignore_lines {
            if r.is_match(line.trim()) {
                continue;
            }
        }

        if let Ok(talk) = Talk::parse(line) {
            talks.push(talk);
        }
    }
    log::debug!("Read {} lines from {}, kept {} talks", n, path.display(), talks.len());
    Ok(talks)
}

/// Same as [try_load] but reports the failure to the log and returns no talks instead.
pub fn load(path: &Path, ignore_lines: Option<&Regex>) -> Vec<Talk> {
    match try_load(path, ignore_lines) {
        Ok(talks) => talks,
        Err(e) => {
            log::error!("{:#}", e);
            Vec::new()
        }
    }
}
