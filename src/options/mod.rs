//! Sectioned option files with typed, defaulted lookups.

mod args;
mod audit;
mod builder;
mod error;
mod file;
mod parse;
mod reader;
mod resolve;
mod sink;
mod store;
mod text;
mod value;

pub use builder::OptionsBuilder;
pub use error::{ConfigError, ParseError};
pub use parse::{parse_key_value, parse_line, Line, FLAG_VALUE};
pub use reader::LineReader;
pub use sink::{CaptureSink, Sink, TracingSink};
pub use store::{Origin, Setting, Store, DEFAULT_SEPARATOR};
pub use value::{OptionValue, ValueKind};

/// An option store: settings loaded from a file and the command line,
/// queried with typed getters.
///
/// Keys are case-insensitive and qualified by section, so `nx` under
/// `[mesh]` is stored as `mesh_nx` with the default separator. Every lookup
/// that finds a setting marks it used, and every lookup writes a trace line
/// to the configured [`Sink`].
///
/// ## Example
///
/// ```no_run
/// use optfile::Options;
///
/// let mut options = Options::builder()
///     .with_file("data/BOUT.inp", true)
///     .with_args(std::env::args())
///     .build()?;
///
/// let nout: i32 = options.get("nout", 1)?;
/// let nx: i32 = options.get_in("mesh", "nx", 64)?;
/// let restart: bool = options.get("restart", false)?;
/// options.print_unused();
/// # Ok::<(), optfile::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Options {
    store: Store,
    section: String,
    sink: Box<dyn Sink>,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Creates an empty store that traces through [`TracingSink`].
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }

    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self {
            store: Store::default(),
            section: String::new(),
            sink: Box::new(sink),
        }
    }

    /// Creates a builder for loading options from files and the command line.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// The default section consulted by short-form lookups.
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn set_section(&mut self, name: impl Into<String>) {
        self.section = name.into();
    }

    pub fn separator(&self) -> &str {
        self.store.separator()
    }

    /// Changes the section separator. Keys stored earlier keep their old form.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.store.set_separator(separator);
    }

    /// Replaces the trace sink.
    pub fn set_sink(&mut self, sink: impl Sink + 'static) {
        self.sink = Box::new(sink);
    }

    /// Read-only view of the stored settings.
    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
