//! Command-line interface for account administration.
//!
//! Stands in for the login and user-administration screens of the desktop
//! frontend: everything here goes through the same `UserService` contract
//! the GUI consumes.

mod commands;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::models::Role;

/// EyeShield credential store administration
#[derive(Parser)]
#[command(name = "eyeshield")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database (create schema, seed default admin)
    Init,

    /// Check credentials and print the granted role
    Login {
        /// Username to authenticate (password is read from stdin)
        username: String,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a new account (password is read from stdin)
    Add {
        username: String,

        /// Role granted to the new account
        #[arg(long, default_value = "clinician")]
        role: Role,
    },

    /// List all accounts
    #[command(alias = "ls")]
    List,

    /// Change an account's role
    SetRole { username: String, role: Role },

    /// Delete an account
    #[command(alias = "rm")]
    Remove {
        username: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn dispatch(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init => commands::cmd_init(config).await,
        Commands::Login { username } => commands::cmd_login(config, &username).await,
        Commands::User { command } => match command {
            UserCommands::Add { username, role } => {
                commands::cmd_user_add(config, &username, role).await
            }
            UserCommands::List => commands::cmd_user_list(config).await,
            UserCommands::SetRole { username, role } => {
                commands::cmd_user_set_role(config, &username, role).await
            }
            UserCommands::Remove { username, yes } => {
                commands::cmd_user_remove(config, &username, yes).await
            }
        },
    }
}
