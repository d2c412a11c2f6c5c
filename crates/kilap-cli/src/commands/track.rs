//! Order tracking and savings commands.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use kilap_db::DocumentStore;

use crate::output;

#[derive(Args)]
pub struct TrackArgs {
    /// Order number printed on the booking confirmation
    pub order_number: String,

    /// Print JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SavingsArgs {
    /// Service name (e.g. "Cuci Premium")
    pub service: String,

    /// Number of pairs
    #[arg(short, long, default_value = "1")]
    pub pairs: u32,
}

pub async fn execute(args: TrackArgs, store: &dyn DocumentStore) -> Result<()> {
    let Some(info) = kilap_core::tracking::track(store, &args.order_number).await? else {
        println!(
            "{} No order found with number {}",
            "✗".red().bold(),
            args.order_number.trim().yellow()
        );
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        output::print_tracking(&info);
    }
    Ok(())
}

pub fn savings(args: &SavingsArgs) -> Result<()> {
    let estimate = kilap_core::savings::estimate(&args.service, args.pairs)?;
    output::print_savings(&args.service, args.pairs, &estimate);
    Ok(())
}
