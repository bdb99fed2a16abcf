//! Sphaerostyle CLI - Operator tools for the commerce backend.
//!
//! # Usage
//!
//! ```bash
//! # Check backend reachability
//! spx health
//!
//! # List catalog products
//! spx products list
//!
//! # List every order (needs STAFF_BEARER_TOKEN)
//! spx orders list
//!
//! # Move an order to a new status
//! spx orders set-status 42 Shipped
//! ```
//!
//! # Environment
//!
//! - `BACKEND_API_URL` - base URL of the commerce backend
//! - `STAFF_BEARER_TOKEN` - bearer token of a staff account (order commands)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use sphaerostyle_core::OrderStatus;

mod commands;

#[derive(Parser)]
#[command(name = "spx")]
#[command(author, version, about = "Sphaerostyle operator tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the commerce backend is reachable
    Health,
    /// Inspect the catalog
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Inspect and manage orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List all products
    List,
}

#[derive(Subcommand)]
enum OrderAction {
    /// List every order in the shop
    List,
    /// Move an order to a new status
    SetStatus {
        /// Order ID
        order_id: i32,
        /// Target status (Pending, Processing, Shipped, Delivered, Cancelled)
        status: OrderStatus,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Health => commands::health().await?,
        Commands::Products { action } => match action {
            ProductAction::List => commands::catalog::list_products().await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List => commands::orders::list().await?,
            OrderAction::SetStatus { order_id, status } => {
                commands::orders::set_status(order_id.into(), status).await?;
            }
        },
    }
    Ok(())
}
