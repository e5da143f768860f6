use crate::cli::commands::user::open_service;
use crate::config::Config;
use crate::services::UserService;

pub async fn cmd_login(config: &Config, username: &str) -> anyhow::Result<()> {
    let service = open_service(config).await?;

    eprint!("Password: ");
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']);

    match service.verify_user(username, password).await {
        Some(role) => println!("✓ Authenticated as {username} (role: {role})"),
        None => {
            println!("Login failed.");
            std::process::exit(1);
        }
    }

    Ok(())
}
