pub mod context;
mod error;
pub mod options;

pub use context::AppContext;
pub use error::Error;
pub use options::{ConfigError, OptionValue, Options, OptionsBuilder, Setting, Sink};
