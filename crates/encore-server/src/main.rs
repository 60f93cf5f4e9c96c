use anyhow::{Context, Result};
use clap::Parser;
use encore_core::storage::Store;
use encore_server::config::ServerConfig;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    db: Option<PathBuf>,

    #[arg(long)]
    bind: Option<String>,
}

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut cfg = ServerConfig::from_env();
    if let Some(db) = args.db {
        cfg.db_path = db;
    }
    if let Some(bind) = args.bind {
        cfg.bind = bind;
    }

    init_logging(&cfg.log_level);

    let store = Store::open(&cfg.db_path)
        .with_context(|| format!("failed to open store at {}", cfg.db_path.display()))?;
    store.init_schema()?;

    let addr: SocketAddr = cfg
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", cfg.bind))?;

    tracing::info!(
        event = "server_start",
        bind = %addr,
        db = ?cfg.db_path
    );

    let app = encore_server::routes::router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
