use std::fmt;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::sink::Sink;
use super::{ConfigError, Options};

/// A file-format source in the loading pipeline.
enum Layer {
    File { path: PathBuf, required: bool },
    Reader { name: PathBuf, reader: Box<dyn BufRead> },
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path, required } => f
                .debug_struct("File")
                .field("path", path)
                .field("required", required)
                .finish(),
            Self::Reader { name, .. } => f.debug_struct("Reader").field("name", name).finish(),
        }
    }
}

/// Builder for loading an [`Options`] store.
///
/// File sources are read in registration order, with later files overriding
/// earlier ones key by key. Command-line arguments are always applied after
/// every file, so they win over file settings no matter when
/// [`with_args`](Self::with_args) was called.
///
/// ## Example
///
/// ```no_run
/// use optfile::Options;
///
/// let mut options = Options::builder()
///     .with_file("data/BOUT.inp", true)
///     .with_file("data/local.inp", false)
///     .with_args(std::env::args())
///     .build()?;
///
/// let nout: i32 = options.get("nout", 1)?;
/// # Ok::<(), optfile::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct OptionsBuilder {
    layers: Vec<Layer>,
    args: Vec<Vec<String>>,
    separator: Option<String>,
    section: Option<String>,
    sink: Option<Box<dyn Sink>>,
}

impl OptionsBuilder {
    /// Adds an options file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.layers.push(Layer::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Adds an in-memory or already-open source in file format. `name`
    /// identifies it in trace lines and errors.
    pub fn with_reader(mut self, name: impl AsRef<Path>, reader: impl BufRead + 'static) -> Self {
        self.layers.push(Layer::Reader {
            name: name.as_ref().to_path_buf(),
            reader: Box::new(reader),
        });
        self
    }

    /// Adds command-line overrides. The first item is the program name.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.push(args.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the section separator used while loading. Defaults to `_`.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Sets the default section of the built store.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Sends trace lines to `sink` instead of [`TracingSink`](super::TracingSink).
    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Loads every source and returns the populated store.
    pub fn build(self) -> Result<Options, ConfigError> {
        let mut options = Options::new();
        if let Some(sink) = self.sink {
            options.sink = sink;
        }
        if let Some(separator) = self.separator {
            options.set_separator(separator);
        }

        for layer in self.layers {
            match layer {
                Layer::File { path, required } => {
                    options.load_file(&path, required)?;
                }
                Layer::Reader { name, reader } => {
                    options.read_from(&name, reader)?;
                }
            }
        }

        for args in self.args {
            options.read_args(args)?;
        }

        if let Some(section) = self.section {
            options.set_section(section);
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CaptureSink, Origin};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_later_files_override() {
        let mut base = NamedTempFile::new().unwrap();
        writeln!(base, "nout = 10\n[mesh]\nnx = 64").unwrap();
        let mut local = NamedTempFile::new().unwrap();
        writeln!(local, "[mesh]\nnx = 128").unwrap();

        let mut options = Options::builder()
            .with_sink(CaptureSink::new())
            .with_file(base.path(), true)
            .with_file(local.path(), true)
            .build()
            .unwrap();

        assert_eq!(options.get("nout", 0).unwrap(), 10);
        assert_eq!(options.get_in("mesh", "nx", 0).unwrap(), 128);
    }

    #[test]
    fn test_args_applied_after_files() {
        let mut options = Options::builder()
            .with_sink(CaptureSink::new())
            .with_args(["prog", "x=2"])
            .with_reader("inline.inp", "x = 1\n".as_bytes())
            .build()
            .unwrap();

        assert_eq!(options.get("x", 0).unwrap(), 2);
        assert_eq!(options.store().peek("x").unwrap().source, Origin::CommandLine);
    }

    #[test]
    fn test_separator_and_section() {
        let mut options = Options::builder()
            .with_sink(CaptureSink::new())
            .with_separator(".")
            .with_section("mesh")
            .with_reader("inline.inp", "[mesh]\nnx = 16\n".as_bytes())
            .build()
            .unwrap();

        assert_eq!(options.section(), "mesh");
        assert!(options.store().peek("mesh.nx").is_some());
        assert_eq!(options.get("nx", 0).unwrap(), 16);
    }

    #[test]
    fn test_optional_missing_file() {
        let options = Options::builder()
            .with_sink(CaptureSink::new())
            .with_file("/nonexistent/local.inp", false)
            .with_reader("inline.inp", "a = 1\n".as_bytes())
            .build()
            .unwrap();

        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_required_missing_file() {
        let result = Options::builder()
            .with_sink(CaptureSink::new())
            .with_file("/nonexistent/BOUT.inp", true)
            .build();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_trace_order() {
        let capture = CaptureSink::new();
        Options::builder()
            .with_sink(capture.clone())
            .with_args(["prog"])
            .with_reader("inline.inp", "a = 1\n".as_bytes())
            .build()
            .unwrap();

        assert_eq!(
            capture.lines(),
            vec!["Reading options file inline.inp", "Checking command-line options"]
        );
    }
}
