//! Database connection pool management
//!
//! Uses sqlx MySqlPool. The pool is created once at startup; a failed
//! connection here must stop the process before it binds a port.

use std::str::FromStr;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use crate::config::DbConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Build connect options from config without interpolating a URL.
pub fn connect_options(config: &DbConfig) -> Result<MySqlConnectOptions, sqlx::Error> {
    if let Some(url) = &config.url {
        return MySqlConnectOptions::from_str(url);
    }

    let mut options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port);

    if let Some(user) = &config.user {
        options = options.username(user);
    }
    if let Some(password) = &config.password {
        options = options.password(password);
    }
    if let Some(database) = &config.database {
        options = options.database(database);
    }

    Ok(options)
}

/// Create a MySQL connection pool.
///
/// # Errors
///
/// Returns an error if the options are invalid or the first connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    let options = connect_options(config)?;

    MySqlPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_is_rejected() {
        let config = DbConfig::default().with_url("not a url");
        assert!(connect_options(&config).is_err());
    }

    #[test]
    fn discrete_fields_build_options() {
        let config = DbConfig {
            user: Some("shop".into()),
            password: Some("p@ss/word".into()),
            host: "127.0.0.1".into(),
            port: 3307,
            database: Some("storefront".into()),
            ..DbConfig::default()
        };

        let options = connect_options(&config).expect("options");
        assert_eq!(options.get_host(), "127.0.0.1");
        assert_eq!(options.get_port(), 3307);
        assert_eq!(options.get_username(), "shop");
        assert_eq!(options.get_database(), Some("storefront"));
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=mysql://... cargo test -p shopfront-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&DbConfig::default().with_url(url))
            .await
            .expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
