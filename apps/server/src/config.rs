use std::{net::SocketAddr, path::PathBuf, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Ranking snapshot file; `None` runs on the fixed fallback splits
    pub rankings_path: Option<PathBuf>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("GF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid GF_LISTEN_ADDR");
        let rankings_path = std::env::var("GF_RANKINGS_PATH")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let cors_allow = std::env::var("GF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("GF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            rankings_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
