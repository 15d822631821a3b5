//! StyleHub CLI - Drive the client store from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! stylehub catalog list --featured
//! stylehub catalog search fitness
//!
//! # Manage the cart
//! stylehub cart add urban-streetwear-hoodie -q 2
//! stylehub cart update 1 5
//! stylehub cart show
//!
//! # Wishlist
//! stylehub wishlist toggle 4
//!
//! # Check out and list orders
//! stylehub checkout --name "Jane Doe" --address "1 Main St" --city Springfield --zip 12345
//! stylehub orders list
//! ```
//!
//! State is kept in `STYLEHUB_DATA_DIR` (default `.stylehub`), one JSON file
//! per collection.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stylehub_core::ShippingAddress;
use stylehub_storefront::{AppError, AppState, Storage, StoreConfig, telemetry};

mod commands;

#[derive(Parser)]
#[command(name = "stylehub")]
#[command(author, version, about = "StyleHub store CLI")]
struct Cli {
    /// Directory holding cart, wishlist and order data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Place an order for everything in the cart
    Checkout {
        /// Recipient name
        #[arg(long)]
        name: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// City
        #[arg(long)]
        city: String,

        /// ZIP / postal code
        #[arg(long)]
        zip: String,

        /// Country
        #[arg(long, default_value = "")]
        country: String,
    },
    /// Show placed orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    List {
        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Only trending products
        #[arg(long)]
        trending: bool,

        /// Only new arrivals
        #[arg(long = "new")]
        new_arrivals: bool,

        /// Only products in this category id
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product by id or slug
    Show { product: String },
    /// Search names, descriptions and tags
    Search { query: String },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and totals
    Show,
    /// Add a product by id or slug
    Add {
        product: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product's line
    Remove { product: String },
    /// Set a line's quantity (0 or less removes it)
    Update {
        product: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show saved products
    Show,
    /// Save a product by id or slug
    Add { product: String },
    /// Unsave a product
    Remove { product: String },
    /// Save if absent, unsave if present
    Toggle { product: String },
    /// Remove every saved product
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, most recent first
    List,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(std::io::stderr(), "Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing();

    let result = AppState::open(config).and_then(|mut state| {
        let mut stdout = std::io::stdout().lock();
        let outcome = run(cli.command, &mut state, &mut stdout);
        drop(state.close());
        outcome
    });

    if let Err(e) = result {
        e.report();
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run<S: Storage>(
    command: Commands,
    state: &mut AppState<S>,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                featured,
                trending,
                new_arrivals,
                category,
            } => commands::catalog::list(
                state,
                &commands::catalog::ListFilter {
                    featured,
                    trending,
                    new_arrivals,
                    category,
                },
                out,
            ),
            CatalogAction::Show { product } => commands::catalog::show(state, &product, out),
            CatalogAction::Search { query } => commands::catalog::search(state, &query, out),
            CatalogAction::Categories => commands::catalog::categories(state, out),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(state, out),
            CartAction::Add { product, quantity } => {
                commands::cart::add(state, &product, quantity, out)
            }
            CartAction::Remove { product } => commands::cart::remove(state, &product, out),
            CartAction::Update { product, quantity } => {
                commands::cart::update(state, &product, quantity, out)
            }
            CartAction::Clear => commands::cart::clear(state, out),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(state, out),
            WishlistAction::Add { product } => commands::wishlist::add(state, &product, out),
            WishlistAction::Remove { product } => commands::wishlist::remove(state, &product, out),
            WishlistAction::Toggle { product } => commands::wishlist::toggle(state, &product, out),
            WishlistAction::Clear => commands::wishlist::clear(state, out),
        },
        Commands::Checkout {
            name,
            address,
            city,
            zip,
            country,
        } => commands::checkout::place(
            state,
            ShippingAddress {
                name,
                address,
                city,
                zip_code: zip,
                country,
            },
            out,
        ),
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::checkout::list_orders(state, out),
        },
    }
}
