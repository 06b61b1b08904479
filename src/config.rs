use std::env;

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
    /// Held so a missing `JWT_SECRET` aborts startup instead of surfacing as
    /// 500s on the first login. Token signing reads the variable at use; see
    /// `auth::token`.
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:taskdesk.db?mode=rwc".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        let _guard = crate::test_env::ENV_LOCK.lock().unwrap();
        env::remove_var("DATABASE_URL");
        env::remove_var("SERVER_PORT");
        env::remove_var("SERVER_HOST");
        env::set_var("JWT_SECRET", "config-test-secret");

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite:taskdesk.db?mode=rwc");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.jwt_secret, "config-test-secret");

        // Test custom values
        env::set_var("DATABASE_URL", "sqlite::memory:");
        env::set_var("SERVER_PORT", "8080");
        env::set_var("SERVER_HOST", "0.0.0.0");

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_url(), "http://0.0.0.0:8080");

        env::remove_var("DATABASE_URL");
        env::remove_var("SERVER_PORT");
        env::remove_var("SERVER_HOST");
    }
}
