//! Command-line tool for inspecting direct links.
//!
//! Decodes codes against the configured database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Decode an order link
//! cargo run --bin linkctl -- decode order 0123456789ABCDEF0123456789ABCDEF
//!
//! # Decode an invoice link and load the invoice
//! cargo run --bin linkctl -- decode invoice 0123ABCD-4567-89AB-CDEF-0123456789AB --load
//!
//! # Check database connection
//! cargo run --bin linkctl -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`direct_link::config`].

use direct_link::api::dto::decode::LinkContextResponse;
use direct_link::config;
use direct_link::domain::link::{DecodedLink, LinkCategory, LinkCode, LinkStatus};
use direct_link::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for inspecting direct links.
#[derive(Parser)]
#[command(name = "linkctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Decode a direct link code
    Decode {
        /// Link category: order or invoice
        category: LinkCategory,

        /// Code as extracted from the link URL
        code: String,

        /// Load the order or invoice of a valid link
        #[arg(short, long)]
        load: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = Arc::new(server::connect_pool(&config).await?);
    let state = server::build_state(pool, &config);

    match cli.command {
        Commands::Decode {
            category,
            code,
            load,
            json,
        } => {
            let decoded = state
                .decoding_service
                .decode(category, &LinkCode::new(code), load)
                .await
                .map_err(|e| anyhow::anyhow!("Decode failed: {}", e))?;

            if json {
                let body = serde_json::to_string_pretty(&LinkContextResponse::from(&decoded))?;
                println!("{body}");
            } else {
                print_decoded(&decoded);
            }
        }
        Commands::Db {
            action: DbAction::Check,
        } => match state.store_probe.ping().await {
            Ok(()) => println!("{}", "Database connection OK".green().bold()),
            Err(e) => {
                println!("{} {}", "Database connection failed:".red().bold(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Prints a human readable summary of a decoded link.
fn print_decoded(decoded: &DecodedLink) {
    let status = match decoded.status() {
        LinkStatus::Valid => "VALID".green().bold(),
        LinkStatus::Expired => "EXPIRED".yellow().bold(),
        LinkStatus::NotExist => "NOT FOUND".red(),
        LinkStatus::Invalid => "INVALID".red().bold(),
    };

    println!("{}", "Direct link".bright_blue().bold());
    println!("  Category:   {}", decoded.category().to_string().cyan());
    println!("  Code:       {}", decoded.code());
    println!("  Status:     {}", status);
    println!(
        "  Registered: {}",
        if decoded.is_registered() { "yes" } else { "no" }
    );

    if let Some(owner) = decoded.owner() {
        println!("  Owner:      #{} {}", owner.id, owner.name.bright_white());
    }

    match decoded {
        DecodedLink::Order(ctx) => {
            if let Some(order) = ctx.target() {
                println!("  Order:      #{} {}", order.id, order.number);
            }
        }
        DecodedLink::Invoice(ctx) => {
            if let Some(invoice) = ctx.target() {
                println!(
                    "  Invoice:    {} {} {}",
                    invoice.id, invoice.amount_minor, invoice.currency
                );
            }
        }
    }
}
