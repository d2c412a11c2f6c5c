//! CLI command definitions and handlers.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kilap_db::{MemoryStore, RedisStore, SharedStore};

pub mod booking;
pub mod dashboard;
pub mod seed;
pub mod serve;
pub mod service;
pub mod testimonial;
pub mod track;

/// Kilap - shoe cleaning bookings and order tracking
#[derive(Parser)]
#[command(name = "kilap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Redis connection URL
    #[arg(long, global = true, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    /// Use a throwaway in-memory store instead of Redis
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web API
    Serve(serve::ServeArgs),

    /// Booking intake and back-office commands
    #[command(subcommand)]
    Booking(booking::BookingCommands),

    /// Show an order's status by order number
    Track(track::TrackArgs),

    /// Manage the service catalogue
    #[command(subcommand)]
    Service(service::ServiceCommands),

    /// Manage testimonials
    #[command(subcommand)]
    Testimonial(testimonial::TestimonialCommands),

    /// Show booking totals and recent orders
    Dashboard,

    /// Import the stock services and testimonials
    Seed,

    /// Estimate resources saved by cleaning instead of replacing
    Savings(track::SavingsArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        // The calculator is static data; skip connecting.
        if let Commands::Savings(args) = &self.command {
            return track::savings(args);
        }

        let store = open_store(&self.redis_url, self.memory).await?;

        match self.command {
            Commands::Serve(args) => serve::execute(args, store).await,
            Commands::Booking(cmd) => booking::execute(cmd, store.as_ref()).await,
            Commands::Track(args) => track::execute(args, store.as_ref()).await,
            Commands::Service(cmd) => service::execute(cmd, store.as_ref()).await,
            Commands::Testimonial(cmd) => testimonial::execute(cmd, store.as_ref()).await,
            Commands::Dashboard => dashboard::execute(store.as_ref()).await,
            Commands::Seed => seed::execute(store.as_ref()).await,
            Commands::Savings(args) => track::savings(&args),
        }
    }
}

async fn open_store(redis_url: &str, memory: bool) -> Result<SharedStore> {
    if memory {
        tracing::warn!("Using in-memory store; data is lost on exit");
        return Ok(Arc::new(MemoryStore::new()));
    }
    Ok(Arc::new(RedisStore::connect(redis_url).await?))
}
