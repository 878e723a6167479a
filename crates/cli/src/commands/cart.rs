use super::app_state;
use crate::CartAction;
use anyhow::{Result, bail};
use clap::Args;
use shared::{
    cart::{CartProduct, CartStore, FileCartStorage},
    model::ShippingAddress,
};
use std::path::PathBuf;
use tracing::info;
use validator::Validate;

#[derive(Args)]
pub struct ShippingArgs {
    #[arg(long, requires_all = ["email", "address", "city", "zip"])]
    name: Option<String>,

    #[arg(long)]
    email: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    zip: Option<String>,
}

impl ShippingArgs {
    fn into_address(self) -> Option<ShippingAddress> {
        Some(ShippingAddress {
            name: self.name?,
            email: self.email?,
            address: self.address?,
            city: self.city?,
            zip: self.zip?,
        })
    }
}

fn print_cart(cart: &CartStore<FileCartStorage>) {
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }

    for (index, item) in cart.items().iter().enumerate() {
        println!(
            "[{index}] {} x{} @ {} = {}",
            item.product.name,
            item.quantity,
            item.product.unit_price(),
            item.line_total()
        );
    }
    println!("Items: {}  Subtotal: {}", cart.item_count(), cart.subtotal());
}

pub async fn run(dir: PathBuf, action: CartAction) -> Result<()> {
    let mut cart = CartStore::load(FileCartStorage::new(dir)).await?;

    match action {
        CartAction::Add {
            product_id,
            quantity,
        } => {
            let state = app_state().await?;
            let product = state
                .di_container
                .product_service
                .query
                .find_by_id(product_id)
                .await?
                .data;

            let item = cart.add(CartProduct::from(product), quantity).await?;
            info!("Cart now holds {} x{}", item.product.name, item.quantity);
            print_cart(&cart);
        }
        CartAction::Set { index, delta } => {
            match cart.set_quantity(index, delta).await? {
                Some(item) => info!("{} quantity is now {}", item.product.name, item.quantity),
                None => info!("Line {index} removed"),
            }
            print_cart(&cart);
        }
        CartAction::Remove { index } => {
            let removed = cart.remove(index).await?;
            info!("Removed {}", removed.product.name);
            print_cart(&cart);
        }
        CartAction::Show => print_cart(&cart),
        CartAction::Clear => {
            cart.clear().await?;
            println!("Cart cleared");
        }
        CartAction::Checkout { user_id, shipping } => {
            let request = cart.checkout_request(user_id, shipping.into_address())?;

            if let Err(errors) = request.validate() {
                bail!("Invalid checkout details: {errors}");
            }

            let state = app_state().await?;
            let order = state
                .di_container
                .order_service
                .command
                .create_order(&request)
                .await?
                .data;

            cart.clear().await?;
            println!("Order {} placed, total {}", order.id, order.total);
        }
    }

    Ok(())
}
