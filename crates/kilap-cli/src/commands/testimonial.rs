//! Testimonial commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use kilap_core::testimonial::model::TestimonialInput;
use kilap_db::DocumentStore;

use crate::output;

#[derive(Subcommand)]
pub enum TestimonialCommands {
    /// List testimonials, best rated first
    List,

    /// Add a testimonial
    Add(AddTestimonialArgs),
}

#[derive(Args)]
pub struct AddTestimonialArgs {
    /// Customer name
    pub name: String,

    /// Testimonial text
    pub text: String,

    /// Rating from 0 to 5 in half steps
    #[arg(short, long, default_value = "5")]
    pub rating: f64,

    /// Customer photo
    #[arg(long, default_value = "")]
    pub image: String,
}

pub async fn execute(cmd: TestimonialCommands, store: &dyn DocumentStore) -> Result<()> {
    match cmd {
        TestimonialCommands::List => {
            let testimonials = kilap_core::testimonial::list_testimonials(store).await?;
            output::print_testimonials(&testimonials);
        }

        TestimonialCommands::Add(args) => {
            let input = TestimonialInput {
                name: args.name,
                image: args.image,
                rating: args.rating,
                text: args.text,
            };
            let created = kilap_core::testimonial::create_testimonial(store, input).await?;
            println!(
                "{} Added testimonial from {} ({})",
                "✓".green().bold(),
                created.name.cyan(),
                created.id.dimmed()
            );
        }
    }

    Ok(())
}
