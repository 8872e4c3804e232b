use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

/// Defaults compiled into the binary.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATH_ENV: &str = "DUNES_CONFIG";

/// Prefix of environment variables that override single values, e.g.
/// `DUNES__HTTP__PORT=8080`.
pub const ENV_PREFIX: &str = "DUNES";

/// Loads the bundled defaults, the files listed in `DUNES_CONFIG` and the
/// `DUNES__*` environment variables, in that order.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var(CONFIG_PATH_ENV).unwrap_or_default();
    let paths = paths
        .split(':')
        .filter(|path| !path.is_empty())
        .collect::<Vec<_>>();
    load_from(&paths, Some(Environment::with_prefix(ENV_PREFIX)))
}

pub fn load_from(
    paths: &[impl AsRef<Path>],
    env: Option<Environment>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    let builder = match env {
        Some(env) => builder.add_source(
            env.prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        ),
        None => builder,
    };

    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write};

    use pretty_assertions::assert_eq;

    use super::*;

    const NO_PATHS: &[&str] = &[];

    #[test]
    fn load_default_config() {
        let config = load_from(NO_PATHS, None).unwrap();

        assert_eq!(config.http.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.http.port, 8000);
        assert_eq!(
            config.health.cache_ttl,
            Duration(std::time::Duration::from_secs(10))
        );
    }

    #[test]
    fn files_override_defaults() {
        let path = std::env::temp_dir().join(format!("dunes-config-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[http]\nport = 9000").unwrap();

        let config = load_from(&[&path], None);
        std::fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.host, IpAddr::from([127, 0, 0, 1]));
    }

    #[test]
    fn environment_overrides_files() {
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([
            ("DUNES__HTTP__PORT".into(), "8080".into()),
            ("DUNES__HEALTH__CACHE_TTL".into(), "1m 30s".into()),
        ])));

        let config = load_from(NO_PATHS, Some(env)).unwrap();

        assert_eq!(config.http.port, 8080);
        assert_eq!(
            config.health.cache_ttl,
            Duration(std::time::Duration::from_secs(90))
        );
    }

    #[test]
    fn missing_file() {
        let result = load_from(&["/nonexistent/dunes.toml"], None);

        assert!(result.is_err());
    }
}
