//! Base URL resolution from an environment-style file.

use std::fs;
use std::path::PathBuf;

use probe_application::ports::{BaseUrlSource, ConfigError};

/// File the frontend keeps its settings in.
pub const DEFAULT_ENV_FILE: &str = "/app/frontend/.env";

/// Key holding the backend base URL.
pub const DEFAULT_URL_KEY: &str = "EXPO_PUBLIC_BACKEND_URL";

/// Reads the base URL from a `KEY=value` line of a dotenv-style file.
///
/// The file is read again on every call. The first line starting with
/// `KEY=` wins; its value is trimmed and stripped of surrounding double
/// quotes.
#[derive(Debug, Clone)]
pub struct EnvFileBaseUrl {
    path: PathBuf,
    key: String,
}

impl EnvFileBaseUrl {
    /// Creates a resolver for `key` in the file at `path`.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Finds the value of `key` in `contents`.
    ///
    /// Returns `None` when no line defines the key.
    #[must_use]
    pub fn lookup<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
        contents.lines().find_map(|line| {
            line.strip_prefix(key)
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| value.trim().trim_matches('"'))
        })
    }

    fn read_value(&self) -> Result<String, ConfigError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Unreadable {
            path: self.path.clone(),
            source,
        })?;

        match Self::lookup(&contents, &self.key) {
            Some("") => Err(ConfigError::EmptyValue {
                key: self.key.clone(),
                path: self.path.clone(),
            }),
            Some(value) => Ok(value.to_string()),
            None => Err(ConfigError::KeyNotFound {
                key: self.key.clone(),
                path: self.path.clone(),
            }),
        }
    }
}

impl BaseUrlSource for EnvFileBaseUrl {
    fn resolve(&self) -> Result<String, ConfigError> {
        self.read_value().inspect_err(|error| {
            tracing::warn!(
                path = %self.path.display(),
                key = %self.key,
                %error,
                "base URL unavailable"
            );
        })
    }
}

/// A base URL fixed at construction, e.g. from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBaseUrl(String);

impl FixedBaseUrl {
    /// Wraps a base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl BaseUrlSource for FixedBaseUrl {
    fn resolve(&self) -> Result<String, ConfigError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_lookup_strips_quotes_and_whitespace() {
        let contents = "EXPO_PUBLIC_BACKEND_URL=\"https://api.example.com\"  \n";
        assert_eq!(
            EnvFileBaseUrl::lookup(contents, DEFAULT_URL_KEY),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_lookup_unquoted_value() {
        let contents = "OTHER=1\nEXPO_PUBLIC_BACKEND_URL=http://localhost:8001\n";
        assert_eq!(
            EnvFileBaseUrl::lookup(contents, DEFAULT_URL_KEY),
            Some("http://localhost:8001")
        );
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let contents = "EXPO_PUBLIC_BACKEND_URL=http://first\n\
                        EXPO_PUBLIC_BACKEND_URL=http://second\n";
        assert_eq!(
            EnvFileBaseUrl::lookup(contents, DEFAULT_URL_KEY),
            Some("http://first")
        );
    }

    #[test]
    fn test_lookup_requires_exact_key() {
        let contents = concat!(
            "EXPO_PUBLIC_BACKEND_URL_OLD=http://old\n",
            "  EXPO_PUBLIC_BACKEND_URL=http://indented\n",
        );
        assert_eq!(EnvFileBaseUrl::lookup(contents, DEFAULT_URL_KEY), None);
    }

    #[test]
    fn test_lookup_keeps_equals_in_value() {
        let contents = "EXPO_PUBLIC_BACKEND_URL=http://host/?a=b\n";
        assert_eq!(
            EnvFileBaseUrl::lookup(contents, DEFAULT_URL_KEY),
            Some("http://host/?a=b")
        );
    }

    #[test]
    fn test_resolve_reads_file() {
        let file = env_file("EXPO_PUBLIC_BACKEND_URL=\"http://localhost:8001\"\n");
        let source = EnvFileBaseUrl::new(file.path(), DEFAULT_URL_KEY);
        assert_eq!(source.resolve().unwrap(), "http://localhost:8001");
    }

    #[test]
    fn test_resolve_rereads_on_every_call() {
        let file = env_file("EXPO_PUBLIC_BACKEND_URL=http://one\n");
        let source = EnvFileBaseUrl::new(file.path(), DEFAULT_URL_KEY);
        assert_eq!(source.resolve().unwrap(), "http://one");

        fs::write(file.path(), "EXPO_PUBLIC_BACKEND_URL=http://two\n").unwrap();
        assert_eq!(source.resolve().unwrap(), "http://two");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = EnvFileBaseUrl::new(dir.path().join(".env"), DEFAULT_URL_KEY);
        assert!(matches!(source.resolve(), Err(ConfigError::Unreadable { .. })));
    }

    #[test]
    fn test_missing_key() {
        let file = env_file("OTHER_URL=http://localhost\n");
        let source = EnvFileBaseUrl::new(file.path(), DEFAULT_URL_KEY);
        assert!(matches!(source.resolve(), Err(ConfigError::KeyNotFound { .. })));
    }

    #[test]
    fn test_empty_value() {
        let file = env_file("EXPO_PUBLIC_BACKEND_URL=\"\"\n");
        let source = EnvFileBaseUrl::new(file.path(), DEFAULT_URL_KEY);
        assert!(matches!(source.resolve(), Err(ConfigError::EmptyValue { .. })));
    }

    #[test]
    fn test_fixed_base_url() {
        let source = FixedBaseUrl::new("http://localhost:8001");
        assert_eq!(source.resolve().unwrap(), "http://localhost:8001");
    }
}
