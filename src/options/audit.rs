//! Reporting on which settings were read.

use super::store::Setting;
use super::{ConfigError, Options};

impl Options {
    /// Settings that no lookup has retrieved yet, in key order.
    pub fn unused(&self) -> Vec<(&str, &Setting)> {
        self.store
            .iter()
            .filter(|(_, setting)| !setting.used)
            .map(|(key, setting)| (key.as_str(), setting))
            .collect()
    }

    /// Writes the unused-settings report to the sink.
    pub fn print_unused(&mut self) {
        let lines: Vec<String> = self
            .unused()
            .into_iter()
            .map(|(key, setting)| {
                let mut line = format!("\t{key} = {}", setting.value);
                setting.annotate(&mut line);
                line
            })
            .collect();

        if lines.is_empty() {
            self.sink.write_line("All options used");
            return;
        }
        self.sink.write_line("Unused options:");
        for line in &lines {
            self.sink.write_line(line);
        }
    }

    /// Renders every stored setting as a TOML document, one table per key.
    pub fn dump(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self.store.entries())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CaptureSink;

    fn load(text: &str) -> (Options, CaptureSink) {
        let capture = CaptureSink::new();
        let mut options = Options::with_sink(capture.clone());
        options.read_from("test.inp", text.as_bytes()).unwrap();
        capture.clear();
        (options, capture)
    }

    #[test]
    fn test_reports_only_unused() {
        let (mut options, capture) = load("a = 1\nb = 2\n");
        options.get("a", 0).unwrap();
        capture.clear();

        let unused: Vec<&str> = options.unused().into_iter().map(|(k, _)| k).collect();
        assert_eq!(unused, vec!["b"]);

        options.print_unused();
        assert_eq!(capture.lines(), vec!["Unused options:", "\tb = 2"]);
    }

    #[test]
    fn test_all_used() {
        let (mut options, capture) = load("a = 1\n[mesh]\nnx = 4\n");
        options.get("a", 0).unwrap();
        options.get_in("mesh", "nx", 0).unwrap();
        capture.clear();

        options.print_unused();
        assert_eq!(capture.lines(), vec!["All options used"]);
    }

    #[test]
    fn test_default_lookup_does_not_mark_used() {
        let (mut options, _) = load("a = 1\n");
        options.get("b", 0).unwrap();
        assert_eq!(options.unused().len(), 1);
    }

    #[test]
    fn test_unused_shows_source() {
        let (mut options, capture) = load("a = 1\n");
        options.read_args(["prog", "dump_on_exit"]).unwrap();
        options.set("seed", 7).unwrap();
        options.get("a", 0).unwrap();
        capture.clear();

        options.print_unused();
        assert_eq!(
            capture.lines(),
            vec![
                "Unused options:",
                "\tdump_on_exit = TRUE (command line)",
                "\tseed = 7 (set)",
            ]
        );
    }

    #[test]
    fn test_dump_records_usage() {
        let (mut options, _) = load("nout = 10\nwall = 'Left'\n");
        options.get("nout", 0).unwrap();

        let dumped = options.dump().unwrap();
        let table: toml::Table = toml::from_str(&dumped).unwrap();

        assert_eq!(table["nout"]["value"].as_str(), Some("10"));
        assert_eq!(table["nout"]["used"].as_bool(), Some(true));
        assert_eq!(table["nout"]["source"].as_str(), Some("file"));
        assert_eq!(table["wall"]["value"].as_str(), Some("'Left'"));
        assert_eq!(table["wall"]["used"].as_bool(), Some(false));
    }
}
