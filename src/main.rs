use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use leave_engine::api::{AppState, create_router};
use leave_engine::config::PolicyLoader;

mod logging;

#[derive(Debug, Parser)]
#[command(name = "leave-engine")]
#[command(about = "HTTP service projecting calendar-year annual leave entitlements")]
struct Args {
    /// Directory containing policy.yaml; the built-in statutory policy if omitted.
    #[arg(long)]
    policy_dir: Option<PathBuf>,
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let loader = match &args.policy_dir {
        Some(dir) => PolicyLoader::load(dir)
            .with_context(|| format!("loading policy from {}", dir.display()))?,
        None => PolicyLoader::statutory(),
    };
    info!(code = %loader.policy().metadata().code, "Using leave policy");

    let state = AppState::new(loader.into_policy());
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(bind = %args.bind, "Listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
