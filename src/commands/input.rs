use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::error::{GitxError, Result};

/// Read the raw AI response from `path`, or from stdin when `path` is `None` or `-`.
///
/// An interactive stdin is refused instead of blocking for input.
pub fn read_raw_response(path: Option<&Path>) -> Result<String> {
    let raw = match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
        _ => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(GitxError::InvalidInput(
                    "no AI response given: pipe it on stdin or pass --input <FILE>".to_string(),
                ));
            }
            let mut buf = String::new();
            stdin.lock().read_to_string(&mut buf)?;
            buf
        }
    };

    tracing::debug!("Read AI response: {} bytes", raw.len());
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "feat: add login\nfix: typo").unwrap();

        let raw = read_raw_response(Some(file.path())).unwrap();
        assert_eq!(raw, "feat: add login\nfix: typo");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_raw_response(Some(&dir.path().join("missing.txt"))).unwrap_err();
        assert!(matches!(err, GitxError::Io(_)));
    }
}
