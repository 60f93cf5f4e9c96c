use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind: String,
    pub db_path: PathBuf,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            db_path: PathBuf::from("encore.db"),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(v) = env::var("ENCORE_HTTP_BIND") {
            cfg.bind = v;
        }
        if let Ok(v) = env::var("ENCORE_DB") {
            cfg.db_path = PathBuf::from(v);
        }
        if let Ok(v) = env::var("ENCORE_LOG") {
            cfg.log_level = v;
        }
        cfg
    }
}
