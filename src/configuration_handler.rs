use crate::configuration::Configuration;
use clap::Parser;
use std::path::PathBuf;

/// Serve availability checks, reservations and releases for a single timeline.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct ConfigurationHandler {
    /// Address to listen on
    #[arg(long, env = "TIMESLOT_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "TIMESLOT_PORT", default_value_t = 6543)]
    port: u16,

    /// Also write logs to this file (truncated on startup)
    #[arg(long, env = "TIMESLOT_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn host(&self) -> String {
        self.host.clone()
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone()
    }
}
