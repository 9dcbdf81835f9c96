use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use probe_infrastructure::{DEFAULT_ENV_FILE, DEFAULT_URL_KEY};

/// Smoke tests for the wellness backend API.
///
/// Runs the root, status and chat checks once each, prints a summary and
/// exits with 0 when every check passed, 1 otherwise.
#[derive(Debug, Parser)]
#[command(name = "probe", version)]
pub struct Args {
    /// Dotenv-style file holding the backend URL
    #[arg(long, default_value = DEFAULT_ENV_FILE, env = "PROBE_ENV_FILE")]
    pub env_file: PathBuf,

    /// Key of the backend URL inside the env file
    #[arg(long, default_value = DEFAULT_URL_KEY, env = "PROBE_URL_KEY")]
    pub key: String,

    /// Use this base URL instead of reading the env file
    #[arg(long, env = "PROBE_BASE_URL")]
    pub base_url: Option<String>,

    /// Timeout in seconds for root and status calls
    #[arg(
        long,
        default_value_t = 10,
        env = "PROBE_READ_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub read_timeout: u64,

    /// Timeout in seconds for chat calls
    #[arg(
        long,
        default_value_t = 30,
        env = "PROBE_CHAT_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub chat_timeout: u64,
}

impl Args {
    pub const fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout)
    }

    pub const fn chat_timeout(&self) -> Duration {
        Duration::from_secs(self.chat_timeout)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "probe",
            "--env-file",
            "/tmp/.env",
            "--key",
            "BACKEND_URL",
            "--read-timeout",
            "3",
        ])
        .unwrap();

        assert_eq!(args.env_file, PathBuf::from("/tmp/.env"));
        assert_eq!(args.key, "BACKEND_URL");
        assert_eq!(args.read_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(Args::try_parse_from(["probe", "--chat-timeout", "0"]).is_err());
    }
}
