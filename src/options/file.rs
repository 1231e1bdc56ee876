//! Loading options from files and other line streams.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::parse::{parse_line, Line};
use super::reader::LineReader;
use super::store::Origin;
use super::{ConfigError, Options};

impl Options {
    /// Reads an options file. The file must exist and define at least one option.
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        self.load_file(path.as_ref(), true).map(|_| ())
    }

    /// Opens and reads `path`.
    ///
    /// Returns `Ok(false)` if the file doesn't exist and `required` is false.
    pub(crate) fn load_file(&mut self, path: &Path, required: bool) -> Result<bool, ConfigError> {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::MissingFilename);
        }

        match File::open(path) {
            Ok(file) => {
                self.read_from(path, BufReader::new(file))?;
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if required {
                    Err(ConfigError::FileNotFound(path.to_path_buf()))
                } else {
                    tracing::debug!(path = %path.display(), "optional options file not found");
                    Ok(false)
                }
            }
            Err(e) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Reads options in file format from `reader`. `name` is used in trace
    /// lines and errors.
    ///
    /// Lines before the first `[section]` header belong to the root section.
    /// Fails if the store is still empty once the stream is exhausted.
    pub fn read_from<R: BufRead>(
        &mut self,
        name: impl AsRef<Path>,
        reader: R,
    ) -> Result<(), ConfigError> {
        let path = name.as_ref();
        self.sink
            .write_line(&format!("Reading options file {}", path.display()));

        let mut lines = LineReader::new(reader);
        let mut section = String::new();

        loop {
            let line = match lines.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    return Err(ConfigError::ReadError {
                        path: path.to_path_buf(),
                        source: e,
                    })
                }
            };
            if line.is_empty() {
                continue;
            }

            let parsed = parse_line(&line).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                line_number: lines.line_number(),
                source,
            })?;

            match parsed {
                Line::Section(Some(name)) => section = name,
                Line::Section(None) => {}
                Line::Pair { key, value } => {
                    self.store.add(&section, &key, value, Origin::File)?;
                }
            }
        }

        if self.store.is_empty() {
            return Err(ConfigError::EmptyFile(path.to_path_buf()));
        }
        Ok(())
    }
}
