//! Serve command: connect to the database, then start listening

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use shopfront_server::db::{create_pool, MySqlStore};
use shopfront_server::{run_server, DbConfig, ServerConfig};

/// Arguments for running the server
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = shopfront_server::http::server::DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Database URL (overrides USER/SQL_PASSWORD/HOST/DATABASE_NAME)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

impl ServeArgs {
    fn db_config(&self) -> DbConfig {
        let config = DbConfig::from_env();
        match &self.database_url {
            Some(url) => config.with_url(url.clone()),
            None => config,
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db_config();
    tracing::info!(db = %db_config.display_target(), "connecting to database");

    let pool = match create_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start server... could not connect to the MySQL database");
            return Err(e).context("Failed to connect to the database");
        }
    };

    let store = Arc::new(MySqlStore::new(pool));
    run_server(store, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
