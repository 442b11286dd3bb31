use std::env;

const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration. The database path is the one value without which
/// the server cannot start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig, String> {
        AppConfig::from_vars(env::var("DATABASE_PATH").ok(), env::var("PORT").ok())
    }

    fn from_vars(database_path: Option<String>, port: Option<String>) -> Result<AppConfig, String> {
        let database_path = database_path.ok_or("DATABASE_PATH must be set")?;

        let port = match port {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("invalid PORT '{}'", raw))?,
        };

        Ok(AppConfig {
            database_path,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_path_is_fatal() {
        assert!(AppConfig::from_vars(None, Some("8080".to_string())).is_err());
    }

    #[test]
    fn port_defaults_and_parses() {
        let config = AppConfig::from_vars(Some("tf.db".to_string()), None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);

        let config =
            AppConfig::from_vars(Some("tf.db".to_string()), Some("8080".to_string())).unwrap();
        assert_eq!(config.port, 8080);

        assert!(AppConfig::from_vars(Some("tf.db".to_string()), Some("eighty".to_string())).is_err());
    }
}
