pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod services;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use db::Store;
pub use models::Role;
pub use services::{SeaOrmUserService, UserInfo, UserService};

pub async fn run(config: Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse();
    cli::dispatch(cli, &config).await
}
