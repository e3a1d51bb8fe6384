//! URL list input and failed-URL output

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::ValidatorError;

/// Read one URL per line, trimmed. Blank lines are kept unless `skip_blank` is set.
pub fn read_urls(path: &Path, skip_blank: bool) -> Result<Vec<String>, ValidatorError> {
    let content = fs::read_to_string(path).map_err(|source| ValidatorError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_urls(&content, skip_blank))
}

fn parse_urls(content: &str, skip_blank: bool) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|u| !(skip_blank && u.is_empty()))
        .map(String::from)
        .collect()
}

/// Write URLs one per line to a file that must not exist yet.
pub fn write_failed_urls(path: &Path, urls: &[String]) -> Result<(), ValidatorError> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => ValidatorError::OutputExists {
                path: path.to_path_buf(),
            },
            _ => ValidatorError::WriteOutput {
                path: path.to_path_buf(),
                source,
            },
        })?;

    let write_err = |source: io::Error| ValidatorError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(file);
    for url in urls {
        writeln!(out, "{}", url).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;
    Ok(())
}
