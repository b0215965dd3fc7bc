use anyhow::{Context, Result};

// ============================================================================
// Configuration - read once from the environment at startup
// ============================================================================
//
// PORT     listening port (default 3000)
// HOST     bind address (default 0.0.0.0)
// WORKERS  actix worker threads (default: one per physical core)
//
// Log filtering goes through RUST_LOG and is handled by the subscriber.
//
// ============================================================================

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let workers = match get("WORKERS") {
            Some(raw) => {
                let workers: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("WORKERS must be a positive integer, got {raw:?}"))?;
                anyhow::ensure!(workers > 0, "WORKERS must be at least 1");
                Some(workers)
            }
            None => None,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            workers,
        })
    }
}
