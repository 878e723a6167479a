//! Storefront CLI: database migrations, seeding, and a file-backed shopping cart.
//!
//! # Usage
//!
//! ```bash
//! storefront-cli migrate
//! storefront-cli seed-admin
//! storefront-cli seed-catalog
//! storefront-cli cart add <product-id> --quantity 2
//! storefront-cli cart checkout --name "Jane" --email jane@example.com \
//!     --address "1 Mall Road" --city Lahore --zip 54000
//! ```
//!
//! Commands other than `migrate` read the same environment as the server
//! (`DATABASE_URL`, `JWT_SECRET`, `PORT`, ...).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

mod commands;

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(author, version, about = "Storefront maintenance and cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create the administrator account
    SeedAdmin {
        #[arg(short, long, default_value = "admin@raheemstore.com")]
        email: String,

        #[arg(short, long, default_value = "Admin User")]
        name: String,

        #[arg(short, long, env = "ADMIN_PASSWORD", default_value = "admin123")]
        password: String,
    },
    /// Insert the starter categories and products
    SeedCatalog,
    /// Work with the local cart
    Cart {
        /// Directory holding the cart file
        #[arg(long, env = "STOREFRONT_CART_DIR", default_value = ".storefront-cart")]
        dir: PathBuf,

        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Add a product, accumulating onto an existing line
    Add {
        product_id: Uuid,

        #[arg(short, long, default_value_t = 1)]
        quantity: i32,
    },
    /// Shift a line's quantity by a signed delta
    Set {
        index: usize,

        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Remove a line
    Remove { index: usize },
    /// Print the cart and its subtotal
    Show,
    /// Empty the cart
    Clear,
    /// Place an order from the cart
    Checkout {
        #[arg(long)]
        user_id: Option<Uuid>,

        #[command(flatten)]
        shipping: commands::cart::ShippingArgs,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::SeedAdmin {
            email,
            name,
            password,
        } => commands::seed::admin(&email, &name, &password).await?,
        Commands::SeedCatalog => commands::seed::catalog().await?,
        Commands::Cart { dir, action } => commands::cart::run(dir, action).await?,
    }
    Ok(())
}
