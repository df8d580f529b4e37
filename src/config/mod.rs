pub mod cli;
pub mod toml_config;

pub use cli::Command;
pub use toml_config::FileConfig;

use crate::utils::error::{CastError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8009;

#[derive(Debug, Clone, Parser)]
#[command(name = "chromecast")]
#[command(about = "Control a Chromecast from the command line")]
#[command(version)]
pub struct CliConfig {
    /// IP address or hostname of Chromecast (required)
    #[arg(short = 'H', long, global = true, env = "CHROMECAST_HOST")]
    pub host: Option<String>,

    /// Cast control port
    #[arg(long, global = true, env = "CHROMECAST_PORT")]
    pub port: Option<u16>,

    /// Give up if the device session takes longer than this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// TOML file with default device settings
    #[arg(short, long, global = true, env = "CHROMECAST_CLI_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines on stderr")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(port) = self.port {
            validation::validate_port("port", port)?;
        }
        if let Some(0) = self.timeout {
            return Err(CastError::invalid_argument(
                "timeout",
                0,
                "Timeout must be at least 1 second",
            ));
        }
        self.command.validate()
    }
}

/// Connection settings after merging the command line over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn resolve(cli: &CliConfig, file: Option<&FileConfig>) -> Result<Self> {
        let host = validation::validate_host(
            cli.host.as_deref().or_else(|| file.and_then(FileConfig::host)),
        )?;

        Ok(Self {
            host: host.to_string(),
            port: cli
                .port
                .or_else(|| file.and_then(FileConfig::port))
                .unwrap_or(DEFAULT_PORT),
            timeout: cli
                .timeout
                .map(Duration::from_secs)
                .or_else(|| file.and_then(FileConfig::timeout)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["chromecast"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_play_with_options() {
        let cli = parse(&[
            "-H",
            "10.0.0.5",
            "play",
            "-i",
            "http://a/1.mp4",
            "http://a/2.mp4",
        ]);
        assert_eq!(cli.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(
            cli.command,
            Command::Play {
                src: vec!["http://a/1.mp4".into(), "http://a/2.mp4".into()],
                no_interrupt: true,
                content_type: None,
            }
        );
    }

    #[test]
    fn test_camel_case_subcommands() {
        assert_eq!(
            parse(&["volumeStepUp", "0.1"]).command,
            Command::VolumeStepUp { step: 0.1 }
        );
        assert_eq!(
            parse(&["volumeStepDown", "0.2"]).command,
            Command::VolumeStepDown { step: 0.2 }
        );
        assert_eq!(parse(&["sessionDetails"]).command, Command::SessionDetails);
    }

    #[test]
    fn test_host_after_subcommand() {
        let cli = parse(&["status", "--host", "tv.local"]);
        assert_eq!(cli.host.as_deref(), Some("tv.local"));
    }

    #[test]
    fn test_non_numeric_volume_is_parse_error() {
        assert!(CliConfig::try_parse_from(["chromecast", "volume", "loud"]).is_err());
    }

    #[test]
    fn test_negative_volume_parses_then_fails_validation() {
        let cli = parse(&["-H", "tv", "volume", "-0.5"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let file = FileConfig::from_toml_str(
            "[device]\nhost = \"file-host\"\nport = 9000\n[session]\ntimeout_seconds = 5\n",
        )
        .unwrap();

        let cli = parse(&["status"]);
        let settings = Settings::resolve(&cli, Some(&file)).unwrap();
        assert_eq!(settings.host, "file-host");
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));

        let cli = parse(&["-H", "cli-host", "--port", "8010", "--timeout", "2", "status"]);
        let settings = Settings::resolve(&cli, Some(&file)).unwrap();
        assert_eq!(settings.host, "cli-host");
        assert_eq!(settings.port, 8010);
        assert_eq!(settings.timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_resolve_defaults_and_missing_host() {
        let cli = parse(&["-H", "tv", "mute"]);
        assert_eq!(
            Settings::resolve(&cli, None).unwrap(),
            Settings {
                host: "tv".to_string(),
                port: DEFAULT_PORT,
                timeout: None,
            }
        );

        let cli = parse(&["mute"]);
        assert!(matches!(
            Settings::resolve(&cli, None),
            Err(CastError::MissingHost)
        ));
    }
}
