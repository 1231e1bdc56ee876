//! Application context that owns the option store.

use crate::{Error, Options};

/// Central application context holding the option store.
///
/// Components receive the store through the context instead of reaching for
/// a global. Lookups mark settings used, so read access goes through
/// [`options_mut()`](Self::options_mut).
///
/// ## Example
///
/// ```no_run
/// use optfile::{AppContext, Options};
///
/// let mut ctx = AppContext::builder()
///     .with_options(
///         Options::builder()
///             .with_file("BOUT.inp", true)
///             .with_args(std::env::args())
///             .build()?,
///     )
///     .build()?;
///
/// let nout: i32 = ctx.options_mut().get("nout", 1)?;
/// ctx.finish();
/// # Ok::<(), optfile::Error>(())
/// ```
#[derive(Debug)]
pub struct AppContext {
    options: Options,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder { options: None }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Ends setup: reports settings that were never read and returns the store.
    pub fn finish(mut self) -> Options {
        self.options.print_unused();
        self.options
    }
}

/// Builder for constructing an [`AppContext`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder {
    options: Option<Options>,
}

impl AppContextBuilder {
    /// Attaches a loaded option store.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Builds the `AppContext`.
    ///
    /// Returns an error if no option store was provided.
    pub fn build(self) -> Result<AppContext, Error> {
        Ok(AppContext {
            options: self.options.ok_or(Error::MissingOptions)?,
        })
    }
}
