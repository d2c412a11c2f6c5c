//! Booking commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use kilap_core::admin::model::BookingFilter;
use kilap_core::{BookingInput, KilapError, OrderStatus};
use kilap_db::DocumentStore;

use crate::output;

#[derive(Subcommand)]
pub enum BookingCommands {
    /// Place a new booking
    New(NewBookingArgs),

    /// List bookings, newest first
    List(ListBookingsArgs),

    /// Show one booking with its service and status log
    Show(ShowBookingArgs),

    /// Set a booking's status
    Status(SetStatusArgs),

    /// Append the missing log entry after a failed status update
    Reconcile(ShowBookingArgs),
}

#[derive(Args)]
pub struct NewBookingArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Customer phone (WhatsApp)
    #[arg(long)]
    pub phone: String,

    /// Service ID
    #[arg(long)]
    pub service: String,

    /// Pickup date
    #[arg(long)]
    pub date: String,

    /// Pickup address
    #[arg(long)]
    pub address: String,
}

#[derive(Args)]
pub struct ListBookingsArgs {
    /// Only bookings in this status (e.g. "Selesai")
    #[arg(short, long)]
    pub status: Option<String>,

    /// Search by name, order number or phone
    #[arg(short, long)]
    pub query: Option<String>,
}

#[derive(Args)]
pub struct ShowBookingArgs {
    /// Booking ID
    pub booking_id: String,
}

#[derive(Args)]
pub struct SetStatusArgs {
    /// Booking ID
    pub booking_id: String,

    /// New status (Order Diterima, Dalam Proses Cuci, Siap Diantar, Selesai)
    pub status: String,
}

pub async fn execute(cmd: BookingCommands, store: &dyn DocumentStore) -> Result<()> {
    match cmd {
        BookingCommands::New(args) => {
            let input = BookingInput {
                name: args.name,
                phone: args.phone,
                service_id: args.service,
                date: args.date,
                address: args.address,
            };
            match kilap_core::booking::create_booking(store, input).await {
                Ok(order_number) => {
                    println!(
                        "{} Booking placed. Order number: {}",
                        "✓".green().bold(),
                        order_number.cyan().bold()
                    );
                }
                Err(err) => return Err(report_partial(err)),
            }
        }

        BookingCommands::List(args) => {
            let status = args
                .status
                .as_deref()
                .map(str::parse::<OrderStatus>)
                .transpose()?;
            let filter = BookingFilter {
                status,
                search: args.query,
            };
            let bookings = kilap_core::admin::list_bookings(store, &filter).await?;
            output::print_bookings_table(&bookings);
        }

        BookingCommands::Show(args) => {
            let detail = kilap_core::admin::booking_detail(store, &args.booking_id).await?;
            output::print_booking_detail(&detail);
        }

        BookingCommands::Status(args) => {
            match kilap_core::tracking::advance_status(store, &args.booking_id, &args.status).await {
                Ok(entry) => {
                    println!(
                        "{} Booking {} is now {}",
                        "✓".green().bold(),
                        args.booking_id.dimmed(),
                        entry.status.to_string().cyan()
                    );
                }
                Err(err) => return Err(report_partial(err)),
            }
        }

        BookingCommands::Reconcile(args) => {
            if kilap_core::tracking::reconcile(store, &args.booking_id).await? {
                println!("{} Status log repaired", "✓".green().bold());
            } else {
                println!("{}", "Status log already consistent.".dimmed());
            }
        }
    }

    Ok(())
}

/// Print a recovery hint for half-applied writes before handing the error back.
fn report_partial(err: KilapError) -> anyhow::Error {
    if let KilapError::PartialFailure {
        booking_id,
        order_number,
        ..
    } = &err
    {
        if let Some(number) = order_number {
            println!("{} Booking saved as {}", "!".yellow().bold(), number.cyan());
        }
        println!(
            "{} Status log incomplete. Run: kilap booking reconcile {}",
            "!".yellow().bold(),
            booking_id
        );
    }
    err.into()
}
