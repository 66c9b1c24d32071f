//! File-access helpers that attach context to IO failures

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Open a file, recording the path and what it was needed for on failure
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(Error::io(
            format!("File not found, needed for {purpose}"),
            path,
            io::Error::from(io::ErrorKind::NotFound),
        ));
    }

    if !path.is_file() {
        return Err(Error::io(
            format!("Path is not a file, expected a file for {purpose}"),
            path,
            io::Error::from(io::ErrorKind::InvalidInput),
        ));
    }

    match fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::PermissionDenied => {
                    "Permission denied - check file permissions".to_string()
                }
                _ => format!("Failed to open file for {purpose}"),
            };
            Err(Error::io(context, path, e))
        }
    }
}

/// Read a file to a string, recording the path and purpose on failure
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    let mut file = safe_open_file(path, purpose)?;

    let mut content = String::new();
    match io::Read::read_to_string(&mut file, &mut content) {
        Ok(_) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::InvalidData => {
                    "File contains invalid UTF-8 data - cannot read as text".to_string()
                }
                _ => format!("Failed to read file content for {purpose}"),
            };
            Err(Error::io(context, path, e))
        }
    }
}
