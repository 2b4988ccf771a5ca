//! Command-line access to the property catalog.
//!
//! Lists and searches the same catalog the web site serves and writes the
//! PDF summary of a property to disk.
//!
//! # Usage
//!
//! ```bash
//! # Print every listing
//! cargo run --bin catalog -- list
//!
//! # Filter like the rental search page
//! cargo run --bin catalog -- search --location chennai --type villa --max-price 70000
//!
//! # Export the PDF summary of property 1
//! cargo run --bin catalog -- export 1 --output property-1.pdf
//! ```

use homefinder::application::services::{DOCUMENT_FILE_NAME, DocumentService, ListingService};
use homefinder::domain::entities::PropertyListing;
use homefinder::domain::search::SearchCriteria;
use homefinder::infrastructure::catalog::StaticCatalog;
use homefinder::infrastructure::document::PdfRenderer;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for browsing the homefinder catalog.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every property
    List,

    /// Filter properties by location, type and maximum price
    Search {
        /// Location substring (case-insensitive)
        #[arg(short, long, default_value = "")]
        location: String,

        /// Property type: apartment, house or villa
        #[arg(short = 't', long = "type", default_value = "")]
        property_type: String,

        /// Maximum price; ignored when not an integer
        #[arg(short, long, default_value = "")]
        max_price: String,
    },

    /// Write the PDF summary of a property
    Export {
        /// Property id
        id: u32,

        /// Output file
        #[arg(short, long, default_value = DOCUMENT_FILE_NAME)]
        output: PathBuf,

        /// Overwrite an existing file without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = Arc::new(StaticCatalog::seeded().context("Invalid property catalog")?);

    match cli.command {
        Commands::List => list(&ListingService::new(catalog)),
        Commands::Search {
            location,
            property_type,
            max_price,
        } => {
            let criteria = SearchCriteria::from_input(&location, &property_type, &max_price);
            search(&ListingService::new(catalog), &criteria)
        }
        Commands::Export { id, output, yes } => {
            export(&DocumentService::new(catalog, PdfRenderer::new()), id, output, yes)
        }
    }
}

fn list(service: &ListingService<StaticCatalog>) -> Result<()> {
    println!("{}", "🏠 Properties".bright_blue().bold());
    println!();

    print_listings(&service.list());
    Ok(())
}

fn search(service: &ListingService<StaticCatalog>, criteria: &SearchCriteria) -> Result<()> {
    println!("{}", "🔍 Rental Search".bright_blue().bold());
    println!();

    let results = service.search(criteria);

    if results.is_empty() {
        println!(
            "{}",
            "  No properties found matching your criteria. Try adjusting your search.".yellow()
        );
        return Ok(());
    }

    print_listings(&results);
    Ok(())
}

/// Prints listings as a table.
///
/// # Output Format
///
/// ```text
///   ID  Title                          Type       Location     Price
///   ───────────────────────────────────────────────────────────────────────────
///   1   Luxury Villa                   Villa      Chennai      ₹45,00,000
/// ```
fn print_listings(listings: &[PropertyListing]) {
    println!(
        "  {:<3} {:<30} {:<10} {:<12} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Type".bright_white().bold(),
        "Location".bright_white().bold(),
        "Price".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for listing in listings {
        println!(
            "  {:<3} {:<30} {:<10} {:<12} {}",
            listing.id.to_string().bright_black(),
            listing.title.cyan(),
            listing.category.label(),
            listing.location_label(),
            listing.price_label().green()
        );
    }

    println!();
    println!(
        "  {} {}",
        listings.len().to_string().bright_white().bold(),
        "Properties Found"
    );
    println!();
}

/// Writes the PDF summary of a property.
///
/// Asks before replacing an existing file unless `--yes` is given
/// (default: No).
fn export(
    service: &DocumentService<StaticCatalog>,
    id: u32,
    output: PathBuf,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📄 Export Property Details".bright_blue().bold());
    println!();

    let bytes = service
        .export(id)
        .map_err(|e| anyhow::anyhow!("Failed to export property {id}: {e}"))?;

    if output.exists() && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    std::fs::write(&output, &bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {} ({} bytes)",
        "✅ Written".green().bold(),
        output.display().to_string().cyan(),
        bytes.len()
    );
    println!();

    Ok(())
}
