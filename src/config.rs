use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_FILE_SIZE_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
    #[error("DATABASE_URL must be set for the database backend")]
    MissingDatabaseUrl,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StorageBackend {
    Memory,
    Database { url: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub storage: StorageBackend,
    pub upload_dir: PathBuf,
    pub file_size_limit: usize,
    pub seed_sample_data: bool,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or(&lookup, "BIND_ADDR", || SocketAddr::from(([0, 0, 0, 0], 3000)))?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let storage = match lookup("STORAGE_BACKEND").as_deref() {
            Some("memory") => StorageBackend::Memory,
            Some("database") => StorageBackend::Database {
                url: database_url.ok_or(ConfigError::MissingDatabaseUrl)?,
            },
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORAGE_BACKEND",
                    value: other.to_string(),
                })
            }
            None => match database_url {
                Some(url) => StorageBackend::Database { url },
                None => StorageBackend::Memory,
            },
        };

        let upload_dir = lookup("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./uploads"));
        let file_size_limit = parse_or(&lookup, "FILE_SIZE_LIMIT", || DEFAULT_FILE_SIZE_LIMIT)?;
        let seed_sample_data = parse_or(&lookup, "SEED_SAMPLE_DATA", || true)?;

        Ok(Config {
            bind_addr,
            storage,
            upload_dir,
            file_size_limit,
            seed_sample_data,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default()),
    }
}
