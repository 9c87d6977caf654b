//! idr - identity directory CLI
//!
//! # Examples
//!
//! ```bash
//! # Register a login protected by a password
//! idr create jdoe "Jane Doe" --password s3cret
//!
//! # Rename it
//! idr modify jdoe jane --password s3cret
//!
//! # List every record on another host
//! idr --server dir.example.net --numport 5099 get all --pretty
//! ```

use idr_cli::{Cli, CliClientResult, Client, Commands};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let caller_user = local_user();
    let client = Client::new(&cli.base_url(), caller_user.as_deref());

    let result: CliClientResult<Value> = match cli.command {
        Commands::Create {
            login_name,
            real_name,
            password,
        } => {
            client
                .create_login(&login_name, real_name.as_deref(), password.as_deref())
                .await
        }
        Commands::Lookup { login_name } => client.lookup(&login_name).await,
        Commands::ReverseLookup { id } => client.reverse_lookup(&id).await,
        Commands::Modify {
            old_name,
            new_name,
            password,
        } => {
            client
                .modify(&old_name, &new_name, password.as_deref())
                .await
        }
        Commands::Delete {
            login_name,
            password,
        } => client.delete(&login_name, password.as_deref()).await,
        Commands::Get { kind } => client.get_info(kind.as_str()).await,
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Local account name, sent so the server can default the real name
fn local_user() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|user| !user.trim().is_empty())
}
