use std::path::Path;

use serde::Deserialize;

/// Default ticketing-system base URL; individual ticket numbers are appended
/// as a trailing path segment.
const DEFAULT_TICKET_URL_BASE: &str = "https://vminfo.casl.gov/trac/casl_phi_kanban/ticket";

/// Configuration for a traceability scan.
///
/// Loaded from an optional `reqtrace.toml`; every field has a default, and
/// command-line flags take precedence over file values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File-name suffixes of files to scan (e.g. `rs`, `f90`).
    ///
    /// If this is empty, all files are scanned.
    pub extensions: Vec<String>,

    /// Whether files with no requirement blocks are omitted from the report.
    ///
    /// When `false` (default), each such file contributes one placeholder row
    /// carrying just the file path.
    pub skip_no_requirements: bool,

    /// Base URL of the external ticketing system.
    ///
    /// Numeric ticket references expand to `<base>/<number>`.
    pub ticket_url_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            skip_no_requirements: false,
            ticket_url_base: DEFAULT_TICKET_URL_BASE.to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads `reqtrace.toml` from the scan root, falling back to defaults if
    /// the file is missing or unreadable.
    #[must_use]
    pub fn load_or_default(root: &Path) -> Self {
        let path = root.join("reqtrace.toml");
        Self::load(&path).unwrap_or_else(|e| {
            tracing::debug!("Failed to load config: {e}");
            Self::default()
        })
    }

    /// Applies command-line overrides on top of file-loaded values.
    ///
    /// Flags take precedence: a non-empty extension list replaces the
    /// configured one, and the skip flag can enable placeholder suppression
    /// but not disable it.
    pub fn apply_overrides(&mut self, extensions: &[String], skip_no_requirements: bool) {
        if !extensions.is_empty() {
            self.extensions = extensions.to_vec();
        }
        if skip_no_requirements {
            self.skip_no_requirements = true;
        }
    }

    /// Checks whether a file name matches the configured extension filters.
    ///
    /// An empty filter list matches everything.
    #[must_use]
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.is_empty()
            || self
                .extensions
                .iter()
                .any(|ext| file_name.ends_with(ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::Config;

    #[test]
    fn default_matches_every_file() {
        let config = Config::default();
        assert!(config.matches_extension("main.rs"));
        assert!(config.matches_extension("README"));
    }

    #[test]
    fn extension_filter_is_a_suffix_match() {
        let config = Config {
            extensions: vec!["rs".to_string(), "f90".to_string()],
            ..Config::default()
        };
        assert!(config.matches_extension("main.rs"));
        assert!(config.matches_extension("solver.f90"));
        assert!(!config.matches_extension("notes.txt"));
    }

    #[test]
    fn load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reqtrace.toml");
        std::fs::write(
            &path,
            r#"
extensions = ["f90"]
skip_no_requirements = true
ticket_url_base = "https://tracker.example.com/ticket"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.extensions, vec!["f90".to_string()]);
        assert!(config.skip_no_requirements);
        assert_eq!(config.ticket_url_base, "https://tracker.example.com/ticket");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn cli_flags_override_config_file_values() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("reqtrace.toml"),
            "extensions = [\"f90\"]\nskip_no_requirements = false\n",
        )
        .unwrap();

        let mut config = Config::load_or_default(dir.path());
        config.apply_overrides(&["rs".to_string()], true);

        assert_eq!(config.extensions, vec!["rs".to_string()]);
        assert!(config.skip_no_requirements);
    }

    #[test]
    fn absent_cli_flags_keep_config_file_values() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("reqtrace.toml"),
            "extensions = [\"f90\"]\nskip_no_requirements = true\n",
        )
        .unwrap();

        let mut config = Config::load_or_default(dir.path());
        config.apply_overrides(&[], false);

        assert_eq!(config.extensions, vec!["f90".to_string()]);
        assert!(config.skip_no_requirements);
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reqtrace.toml");
        std::fs::write(&path, "skip_no_requirements = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.skip_no_requirements);
        assert_eq!(config.ticket_url_base, Config::default().ticket_url_base);
    }
}
