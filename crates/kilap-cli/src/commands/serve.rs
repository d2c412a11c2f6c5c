//! Web server command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use kilap_db::SharedStore;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "KILAP_PORT", default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "KILAP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to logs/kilap.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, store: SharedStore) -> Result<()> {
    println!();
    println!("  {} {}", "Kilap".cyan().bold(), "Booking API".bold());
    println!();
    println!(
        "  {}     http://{}:{}/api",
        "Public".green(),
        args.host,
        args.port
    );
    println!(
        "  {}      http://{}:{}/api/admin",
        "Admin".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    kilap_web::run_server(store, &args.host, args.port).await?;

    Ok(())
}
