use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

#[cfg(feature = "logging")]
use tracing_subscriber::filter::LevelFilter;

/// Database configuration.
#[derive(Deserialize)]
pub struct Database {
    /// Full path to the SQLite database file.
    ///
    /// The file will be created if it does not exist.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

impl Database {
    /// Connection URL suitable for [`sea_orm`]-compatible connectors.
    ///
    /// The `rwc` mode allows SQLite to create a missing database file.
    ///
    /// [`sea_orm`]: https://docs.rs/sea-orm
    pub fn url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path.display())
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> PathBuf {
    PathBuf::from("/var/lib/sqlite3/drud_cli_metrics.db")
}

/// HTTP server configuration.
#[derive(Deserialize)]
pub struct Server {
    /// Address, that HTTP server will listen on.
    #[serde(default = "default_address")]
    pub address: IpAddr,

    /// Port, that HTTP server will listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Server {
    /// Full socket address to bind the HTTP server to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

fn default_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    12345
}

/// Implementation of [`serde`]'s deserializer for [`FromStr`] types.
#[cfg(feature = "logging")]
fn deserialize_from_str<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error,
    D: serde::de::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
}

/// Logging configuration.
#[cfg(feature = "logging")]
#[derive(Deserialize)]
pub struct Logging {
    /// Log level.
    #[serde(deserialize_with = "deserialize_from_str")]
    pub level: LevelFilter,
}

#[cfg(feature = "logging")]
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
        }
    }
}

/// General configuration.
#[derive(Deserialize)]
pub struct Config {
    /// Log item database configuration.
    #[serde(default)]
    pub database: Database,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: Server,

    /// Logging configuration.
    #[cfg(feature = "logging")]
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    /// Create new config using default configuration file or environment variables.
    ///
    /// A missing `Config.toml` is skipped, while an explicitly provided
    /// configuration file must exist.
    ///
    /// See [`Env`] for more details on how to use environment variables configuration.
    ///
    /// [`Env`]: figment::providers::Env
    pub fn new(path: Option<PathBuf>) -> Result<Self, figment::Error> {
        let path = match path {
            Some(path) if !path.is_file() => {
                return Err(figment::Error::from(format!(
                    "configuration file {} does not exist",
                    path.display()
                )))
            }
            Some(path) => path,
            None => PathBuf::from("Config.toml"),
        };

        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("CONFIG_").split("_"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use figment::Jail;

    use super::Config;

    #[test]
    fn defaults() {
        Jail::expect_with(|_| {
            let config = Config::new(None)?;

            assert_eq!(
                config.database.path,
                PathBuf::from("/var/lib/sqlite3/drud_cli_metrics.db")
            );
            assert_eq!(config.server.port, 12345);
            assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:12345");

            Ok(())
        });
    }

    #[test]
    fn file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "metrics.toml",
                r#"
                    [database]
                    path = "/tmp/metrics.db"

                    [server]
                    port = 8080
                "#,
            )?;
            jail.set_env("CONFIG_SERVER_PORT", "9090");

            let config = Config::new(Some(PathBuf::from("metrics.toml")))?;

            assert_eq!(config.database.path, PathBuf::from("/tmp/metrics.db"));
            assert_eq!(config.database.url(), "sqlite:///tmp/metrics.db?mode=rwc");
            assert_eq!(config.server.port, 9090);

            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file() {
        Jail::expect_with(|_| {
            let result = Config::new(Some(PathBuf::from("does-not-exist.toml")));

            assert!(result.is_err());

            Ok(())
        });
    }
}
