use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_SNAPSHOT_KEY: &str = "storefront-cart";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub snapshot_key: String,
    pub bind_addr: SocketAddr,
    /// `None` when `CART_API_TIMEOUT_SECS=0`.
    pub api_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = get("CART_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("CART_BIND_ADDR is not a socket address: {bind_addr}"))?;

        let timeout_secs = match lookup("CART_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("CART_API_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        let snapshot_key = get("CART_SNAPSHOT_KEY", DEFAULT_SNAPSHOT_KEY);
        if snapshot_key.is_empty() || snapshot_key.contains(['/', '\\']) {
            anyhow::bail!("CART_SNAPSHOT_KEY must be a non-empty file name: {snapshot_key:?}");
        }

        Ok(Self {
            api_base_url: get("CART_API_BASE_URL", DEFAULT_API_BASE_URL),
            data_dir: PathBuf::from(get("CART_DATA_DIR", DEFAULT_DATA_DIR)),
            snapshot_key,
            bind_addr,
            api_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }
}
