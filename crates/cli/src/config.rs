//! Command-line / environment configuration.

use clap::{Parser, ValueEnum};

use ledgerbook_observability::{LogFormat, TracingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

/// In-memory account ledger with an interactive menu.
#[derive(Debug, Clone, Parser)]
#[command(name = "ledgerbook", version, about)]
pub struct Config {
    /// Log record format (written to stderr).
    #[arg(long, value_enum, env = "LEDGERBOOK_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Default log filter directive; `RUST_LOG` overrides it.
    #[arg(long, env = "LEDGERBOOK_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn tracing(&self) -> TracingConfig {
        TracingConfig {
            format: self.log_format.into(),
            default_directive: self.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_tracing_config() {
        let config =
            Config::try_parse_from(["ledgerbook", "--log-format", "json", "--log-level", "debug"])
                .unwrap();

        assert_eq!(
            config.tracing(),
            TracingConfig {
                format: LogFormat::Json,
                default_directive: "debug".to_string(),
            }
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Config::try_parse_from(["ledgerbook", "--log-format", "xml"]).is_err());
    }
}
