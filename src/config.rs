//! Runtime settings and logger setup.

use crate::output::OutputFormat;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Registry file read when none is given.
pub const DEFAULT_REGISTRY_FILE: &str = "networks.json";
/// log4rs configuration read at startup.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

const FALLBACK_LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Validate a registry of named CIDR blocks and print their metadata.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "cidr-registry", version, about)]
pub struct Settings {
    /// JSON registry file with a "networks" list.
    #[arg(env = "CIDR_REGISTRY_FILE", default_value = DEFAULT_REGISTRY_FILE)]
    pub registry_file: String,

    /// Output format for the validated registry.
    #[arg(short, long, env = "CIDR_REGISTRY_FORMAT", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// log4rs YAML configuration file.
    #[arg(long, env = "CIDR_REGISTRY_LOG_CONFIG", default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: String,

    /// On overlap, also log every conflicting pair, not just the first.
    #[arg(long)]
    pub all_conflicts: bool,
}

/// Initialise log4rs from `log_config`, or log warnings to stderr if it is absent.
pub fn init_logging(log_config: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(log_config).exists() {
        log4rs::init_file(log_config, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {log_config}: {e}"))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("Log config {log_config} not found, using stderr fallback");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::try_parse_from(["cidr-registry"]).unwrap();
        // env vars may override defaults on a developer machine
        if std::env::var("CIDR_REGISTRY_FILE").is_err() {
            assert_eq!(settings.registry_file, DEFAULT_REGISTRY_FILE);
        }
        if std::env::var("CIDR_REGISTRY_FORMAT").is_err() {
            assert_eq!(settings.format, OutputFormat::Json);
        }
        assert!(!settings.all_conflicts);
    }

    #[test]
    fn test_settings_args() {
        let settings = Settings::try_parse_from([
            "cidr-registry",
            "my.json",
            "--format",
            "table",
            "--log-config",
            "other.yml",
            "--all-conflicts",
        ])
        .unwrap();
        assert_eq!(settings.registry_file, "my.json");
        assert_eq!(settings.format, OutputFormat::Table);
        assert_eq!(settings.log_config, "other.yml");
        assert!(settings.all_conflicts);
    }

    #[test]
    fn test_settings_rejects_unknown_format() {
        assert!(Settings::try_parse_from(["cidr-registry", "-f", "xml"]).is_err());
    }
}
