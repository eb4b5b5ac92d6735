/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, AUTH_DONE_PATH)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

pub struct Config {
    pub addr: SocketAddr,
    pub auth_done_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8100);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let auth_done_path =
            std::env::var("AUTH_DONE_PATH").unwrap_or_else(|_| "/auth-done".to_string());

        if !auth_done_path.starts_with('/') {
            return Err(ConfigError::Invalid("AUTH_DONE_PATH"));
        }

        Ok(Self {
            addr,
            auth_done_path,
        })
    }
}
