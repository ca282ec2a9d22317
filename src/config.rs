use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let data_file = env::var("STORE_DATA_FILE")
            .unwrap_or_else(|_| "server_data.json".to_string())
            .into();

        let static_dir = env::var("STORE_STATIC_DIR")
            .unwrap_or_else(|_| ".".to_string())
            .into();

        Ok(Config {
            service_host,
            service_port,
            data_file,
            static_dir,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data file: {}", self.data_file.display());
        tracing::info!("  Static root: {}", self.static_dir.display());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // from_env tests mutate process-wide environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::remove_var("SERVICE_HOST");
            env::remove_var("SERVICE_PORT");
            env::remove_var("STORE_DATA_FILE");
            env::remove_var("STORE_STATIC_DIR");
        }
        guard
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("STORE_DATA_FILE", "/tmp/data.json");
            env::set_var("STORE_STATIC_DIR", "/srv/www");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.data_file, PathBuf::from("/tmp/data.json"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.service_port, 8000);
        assert_eq!(config.data_file, PathBuf::from("server_data.json"));
        assert_eq!(config.static_dir, PathBuf::from("."));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
