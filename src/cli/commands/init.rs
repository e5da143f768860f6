use crate::config::Config;
use crate::db::Store;

pub async fn cmd_init(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    store.ping().await?;

    println!("✓ Database ready at {}", config.general.database_path);
    println!("Default account is admin / admin123 — change the password after first login.");

    Ok(())
}
