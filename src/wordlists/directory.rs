//! Dictionaries read from a directory
//!
//! Each list is one file named after it:
//! - `<name>.json`: one JSON object per line, `{"wordRank": 1, "headWord": "cancel"}`
//! - `<name>.txt`: one word per line, ranked by line number
//!
//! Lines that are not UTF-8, fail to parse or hold a non-alphabetic headword
//! are skipped with a warning. A list with neither file is `NotFound`; a root
//! that cannot be read is an `Io` error.

use super::{DictionaryError, DictionaryProvider};
use crate::core::{RawEntry, WordEntry};
use log::{debug, warn};
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    root: PathBuf,
}

impl DirectoryProvider {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn io_error(name: &str, source: io::Error) -> DictionaryError {
        DictionaryError::Io {
            name: name.to_string(),
            source,
        }
    }
}

impl DictionaryProvider for DirectoryProvider {
    fn available(&self) -> Result<Vec<String>, DictionaryError> {
        let entries = fs::read_dir(self.root())
            .map_err(|e| Self::io_error(&self.root().display().to_string(), e))?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == "json" || ext == "txt")
            })
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn load_list(
        &self,
        name: &str,
        word_length: usize,
    ) -> Result<Arc<Vec<WordEntry>>, DictionaryError> {
        let json = self.root.join(format!("{name}.json"));
        let text = self.root.join(format!("{name}.txt"));

        let entries = if json.is_file() {
            read_json_lines(name, &json, word_length)?
        } else if text.is_file() {
            read_plain(name, &text, word_length)?
        } else {
            return Err(DictionaryError::NotFound(name.to_string()));
        };

        debug!("Loaded {} {word_length}-letter words from {name}", entries.len());
        Ok(Arc::new(entries))
    }
}

/// Numbered lines of `path`, starting at 1
///
/// A line that is not valid UTF-8 is skipped with a warning; only failing to
/// read the file is an error.
fn read_lines(name: &str, path: &Path) -> Result<Vec<(u32, String)>, DictionaryError> {
    let file = fs::File::open(path).map_err(|e| DirectoryProvider::io_error(name, e))?;
    let mut lines = Vec::new();

    for (number, bytes) in (1u32..).zip(BufReader::new(file).split(b'\n')) {
        let bytes = bytes.map_err(|e| DirectoryProvider::io_error(name, e))?;
        match String::from_utf8(bytes) {
            Ok(line) => lines.push((number, line)),
            Err(e) => warn!("{name}:{number}: skipping line that is not UTF-8: {e}"),
        }
    }

    Ok(lines)
}

fn read_json_lines(
    name: &str,
    path: &Path,
    word_length: usize,
) -> Result<Vec<WordEntry>, DictionaryError> {
    let mut entries = Vec::new();

    for (number, line) in read_lines(name, path)? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let raw: RawEntry = match serde_json::from_str(trimmed) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{name}:{number}: skipping malformed line: {e}");
                continue;
            }
        };
        if raw.head_word.trim().len() != word_length {
            continue;
        }
        match WordEntry::try_from(raw) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("{name}:{number}: {e}"),
        }
    }

    Ok(entries)
}

fn read_plain(name: &str, path: &Path, word_length: usize) -> Result<Vec<WordEntry>, DictionaryError> {
    Ok(read_lines(name, path)?
        .into_iter()
        .filter_map(|(rank, line)| {
            let word = line.trim();
            if word.is_empty() || word.len() != word_length {
                return None;
            }
            match WordEntry::new(rank, word) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("{name}:{rank}: {e}");
                    None
                }
            }
        })
        .collect())
}
