use super::parse::parse_key_value;
use super::store::Origin;
use super::{ConfigError, Options};

impl Options {
    /// Applies command-line overrides to the root section.
    ///
    /// `args` is a full argument vector: the first item is taken to be the
    /// program name and skipped. Every other item is `key=value` or a bare
    /// flag, and replaces any setting with the same key. Values keep their
    /// case; keys are lower-cased like any other key.
    pub fn read_args<I, S>(&mut self, args: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sink.write_line("Checking command-line options");

        for arg in args.into_iter().skip(1) {
            let arg = arg.as_ref();
            let (key, value) =
                parse_key_value(arg).map_err(|source| ConfigError::CommandLine {
                    argument: arg.to_string(),
                    source,
                })?;
            self.store.add("", &key, value, Origin::CommandLine)?;
        }

        Ok(())
    }
}
