//! Service catalogue commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use kilap_core::service::model::ServiceInput;
use kilap_db::DocumentStore;

use crate::output;

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List services
    List,

    /// Add a service
    Add(ServiceArgs),

    /// Replace a service's fields
    Update(UpdateServiceArgs),

    /// Delete a service
    Delete {
        /// Service ID
        id: String,
    },
}

#[derive(Args)]
pub struct ServiceArgs {
    /// Service name
    pub name: String,

    /// Price in rupiah
    #[arg(long)]
    pub price: i64,

    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image_url: String,
}

impl From<ServiceArgs> for ServiceInput {
    fn from(args: ServiceArgs) -> Self {
        ServiceInput {
            name: args.name,
            price: Some(args.price),
            description: args.description,
            image_url: args.image_url,
        }
    }
}

#[derive(Args)]
pub struct UpdateServiceArgs {
    /// Service ID
    pub id: String,

    #[command(flatten)]
    pub fields: ServiceArgs,
}

pub async fn execute(cmd: ServiceCommands, store: &dyn DocumentStore) -> Result<()> {
    match cmd {
        ServiceCommands::List => {
            let services = kilap_core::service::list_services(store).await?;
            output::print_services_table(&services);
        }

        ServiceCommands::Add(args) => {
            let service = kilap_core::service::create_service(store, args.into()).await?;
            println!(
                "{} Created service: {} ({})",
                "✓".green().bold(),
                service.name.cyan(),
                service.id.dimmed()
            );
        }

        ServiceCommands::Update(args) => {
            let service =
                kilap_core::service::update_service(store, &args.id, args.fields.into()).await?;
            println!(
                "{} Updated service: {} ({})",
                "✓".green().bold(),
                service.name.cyan(),
                service.id.dimmed()
            );
        }

        ServiceCommands::Delete { id } => {
            kilap_core::service::delete_service(store, &id).await?;
            println!("{} Deleted service {}", "✓".green().bold(), id.dimmed());
        }
    }

    Ok(())
}
