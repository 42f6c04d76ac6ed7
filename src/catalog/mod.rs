//! Matrix file selection for the CLI frontend.
//!
//! Lists the `.txt` files of a directory and lets the user pick one by its
//! 1-based position in the listing.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{EulerError, Result};

/// Extension of matrix files.
pub const MATRIX_EXTENSION: &str = "txt";

/// Prompt printed after the listing.
pub const SELECTION_PROMPT: &str = "Enter the number of the adjacency matrix file:\t";

/// The matrix files found in one directory, sorted by file name.
#[derive(Debug, Clone)]
pub struct MatrixCatalog {
    entries: Vec<PathBuf>,
}

impl MatrixCatalog {
    /// Scan `dir` for matrix files.
    pub fn scan(dir: &Path) -> Result<Self> {
        let read_dir = fs::read_dir(dir).map_err(|e| EulerError::DirectoryReadError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let path = entry
                .map_err(|e| EulerError::DirectoryReadError {
                    path: dir.display().to_string(),
                    source: e,
                })?
                .path();
            let is_matrix = path.is_file()
                && path.extension().map_or(false, |ext| ext == MATRIX_EXTENSION);
            if is_matrix {
                entries.push(path);
            }
        }

        if entries.is_empty() {
            return Err(EulerError::NoMatrixFiles {
                dir: dir.display().to_string(),
            });
        }

        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!("Found {} matrix files in {}", entries.len(), dir.display());

        Ok(Self { entries })
    }

    /// Matrix file paths in listing order.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Numbered listing of the file names, one line per file.
    pub fn render_listing(&self) -> Vec<String> {
        let mut lines = vec!["Available adjacency matrix files:".to_string()];
        lines.extend(self.entries.iter().enumerate().map(|(idx, path)| {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{}. {}", idx + 1, name)
        }));
        lines
    }

    /// Resolve a 1-based choice typed by the user.
    pub fn select(&self, input: &str) -> Result<&Path> {
        let trimmed = input.trim();
        let invalid = || EulerError::invalid_selection(trimmed, self.entries.len());

        let choice: usize = trimmed.parse().map_err(|_| invalid())?;
        if choice == 0 || choice > self.entries.len() {
            return Err(invalid());
        }

        Ok(&self.entries[choice - 1])
    }

    /// Print the listing and a prompt to `writer`, then read one choice from `reader`.
    pub fn prompt_selection<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<&Path> {
        let io_err = |e| EulerError::SelectionInputError { source: e };

        for line in self.render_listing() {
            writeln!(writer, "{}", line).map_err(io_err)?;
        }
        write!(writer, "{}", SELECTION_PROMPT).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        let mut input = String::new();
        reader.read_line(&mut input).map_err(io_err)?;
        self.select(&input)
    }
}
