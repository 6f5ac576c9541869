//! Server configuration loaded from the environment.
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct WebConfig {
    pub bind_addr: SocketAddr,
    pub problems_path: Option<PathBuf>,
    pub asset_dir: PathBuf,
    pub asset_base_url: String,
    pub strict_problems: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            problems_path: None,
            asset_dir: PathBuf::from("discard_web/static/assets"),
            asset_base_url: discard_core::DEFAULT_BASE_URL.to_string(),
            strict_problems: false,
        }
    }
}

impl WebConfig {
    /// Environment variables:
    /// - `BIND_ADDR` - listen address (default: 127.0.0.1:3000)
    /// - `PROBLEMS_PATH` - JSON problem file (default: builtin drills)
    /// - `ASSET_DIR` - directory served under `/assets`
    /// - `ASSET_BASE_URL` - URL prefix for tile art (default: /assets/tiles/svg)
    /// - `STRICT_PROBLEMS` - refuse to start on unrecognised tile tokens
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = env::var("BIND_ADDR") {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("invalid BIND_ADDR {addr:?}"))?;
        }
        config.problems_path = env::var("PROBLEMS_PATH").ok().map(PathBuf::from);
        if let Ok(dir) = env::var("ASSET_DIR") {
            config.asset_dir = PathBuf::from(dir);
        }
        if let Ok(base) = env::var("ASSET_BASE_URL") {
            config.asset_base_url = base;
        }
        if let Some(strict) = read_env::<bool>("STRICT_PROBLEMS") {
            config.strict_problems = strict;
        }

        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
