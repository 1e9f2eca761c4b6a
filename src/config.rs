//! Command line and environment configuration for the dashboard server.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

/// A web dashboard for the accounts held by a bank accounts API.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The base URL of the accounts API.
    #[arg(long, env = "BANK_API_URL", default_value = "http://127.0.0.1:5000")]
    pub api_url: String,

    /// The address to serve the dashboard from.
    #[arg(long, env = "BANK_DASHBOARD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// The port to serve the dashboard from.
    #[arg(short, long, env = "BANK_DASHBOARD_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Also write debug logs to this file.
    #[arg(long, env = "BANK_DASHBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::{net::SocketAddr, path::PathBuf};

    use clap::Parser;

    use super::Config;

    #[test]
    fn parses_flags() {
        let config = Config::try_parse_from([
            "server",
            "--api-url",
            "http://bank.internal:8080",
            "--host",
            "0.0.0.0",
            "-p",
            "8000",
            "--log-file",
            "dashboard.log",
        ])
        .unwrap();

        assert_eq!("http://bank.internal:8080", config.api_url);
        assert_eq!(
            "0.0.0.0:8000".parse::<SocketAddr>().unwrap(),
            config.socket_addr()
        );
        assert_eq!(Some(PathBuf::from("dashboard.log")), config.log_file);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Config::try_parse_from(["server", "--port", "seventy"]).is_err());
    }
}
