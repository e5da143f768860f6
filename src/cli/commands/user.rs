use crate::config::Config;
use crate::db::Store;
use crate::models::Role;
use crate::services::{SeaOrmUserService, UserService};

pub(super) async fn open_service(config: &Config) -> anyhow::Result<SeaOrmUserService> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(SeaOrmUserService::with_security(
        store,
        config.security.clone(),
    ))
}

pub async fn cmd_user_add(config: &Config, username: &str, role: Role) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    eprint!("Password for {username}: ");
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']);

    if service.create_user(username, password, role).await {
        println!("✓ Created {username} (role: {role})");
    } else {
        println!("Failed to create {username}: empty credentials or username already taken.");
        std::process::exit(1);
    }

    Ok(())
}

pub async fn cmd_user_list(config: &Config) -> anyhow::Result<()> {
    let service = open_service(config).await?;
    let users = service.get_all_users().await;

    if users.is_empty() {
        println!("No accounts found.");
        return Ok(());
    }

    println!("Accounts ({} total)", users.len());
    println!("{:-<40}", "");

    for user in users {
        println!("{:<28} {}", user.username, user.role);
    }

    Ok(())
}

pub async fn cmd_user_set_role(config: &Config, username: &str, role: Role) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    if service.update_user_role(username, role).await {
        println!("✓ {username} is now {role}");
    } else {
        println!("No such account: {username}");
        std::process::exit(1);
    }

    Ok(())
}

pub async fn cmd_user_remove(config: &Config, username: &str, yes: bool) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    if !yes {
        println!("Delete account '{username}'?");
        println!("Enter 'y' to confirm, anything else to cancel:");

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if service.delete_user(username).await {
        println!("✓ Removed {username}");
    } else {
        println!("Failed to remove {username}.");
        std::process::exit(1);
    }

    Ok(())
}
