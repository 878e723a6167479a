use crate::{
    abstract_trait::CartStorage,
    domain::{
        requests::{CreateOrderRequest, OrderItemRequest},
        responses::ProductResponse,
    },
    errors::CartError,
    model::{ShippingAddress, effective_price},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

pub const CART_KEY: &str = "cart";

/// Product data captured when it was added; price and stock are not refreshed from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub stock_quantity: i32,
    pub image: Option<String>,
}

impl CartProduct {
    pub fn unit_price(&self) -> Decimal {
        effective_price(self.price, self.discount_price)
    }
}

impl From<ProductResponse> for CartProduct {
    fn from(value: ProductResponse) -> Self {
        CartProduct {
            id: value.id,
            image: value.images.into_iter().next(),
            name: value.name,
            price: value.price,
            discount_price: value.discount_price,
            stock_quantity: value.stock_quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: CartProduct,
    pub quantity: i32,
}

impl CartItem {
    /// Saturates instead of overflowing on absurd stored prices.
    pub fn line_total(&self) -> Decimal {
        self.product
            .unit_price()
            .saturating_mul(Decimal::from(self.quantity))
    }
}

pub struct CartStore<S: CartStorage> {
    storage: S,
    items: Vec<CartItem>,
}

impl<S: CartStorage> CartStore<S> {
    /// Reads the persisted cart; a missing entry is an empty cart.
    pub async fn load(storage: S) -> Result<Self, CartError> {
        let items = match storage.get(CART_KEY).await? {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)?,
            _ => Vec::new(),
        };

        Ok(Self { storage, items })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` of a product. An existing entry for the same product id accumulates
    /// and takes the newer snapshot; the result never exceeds the snapshot's stock.
    pub async fn add(&mut self, product: CartProduct, quantity: i32) -> Result<CartItem, CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        if product.stock_quantity < 1 {
            return Err(CartError::OutOfStock(product.id));
        }

        let mut items = self.items.clone();
        let index = match items.iter().position(|item| item.product.id == product.id) {
            Some(index) => {
                let item = &mut items[index];
                item.quantity = item
                    .quantity
                    .saturating_add(quantity)
                    .min(product.stock_quantity);
                item.product = product;
                index
            }
            None => {
                let quantity = quantity.min(product.stock_quantity);
                items.push(CartItem { product, quantity });
                items.len() - 1
            }
        };

        let added = items[index].clone();
        self.commit(items).await?;

        info!(
            "🛒 Cart now holds {} x {} ({})",
            added.quantity, added.product.name, added.product.id
        );
        Ok(added)
    }

    /// Shifts the quantity at `index` by `delta`, clamped to `[0, stock]`. Reaching zero removes
    /// the entry and returns `None`.
    pub async fn set_quantity(
        &mut self,
        index: usize,
        delta: i32,
    ) -> Result<Option<CartItem>, CartError> {
        self.check_index(index)?;

        let mut items = self.items.clone();
        let item = &mut items[index];
        let next = item
            .quantity
            .saturating_add(delta)
            .min(item.product.stock_quantity);

        let updated = if next <= 0 {
            items.remove(index);
            None
        } else {
            item.quantity = next;
            Some(item.clone())
        };

        self.commit(items).await?;
        Ok(updated)
    }

    pub async fn remove(&mut self, index: usize) -> Result<CartItem, CartError> {
        self.check_index(index)?;

        let mut items = self.items.clone();
        let removed = items.remove(index);
        self.commit(items).await?;

        debug!("🗑️ Removed {} from cart", removed.product.name);
        Ok(removed)
    }

    pub async fn clear(&mut self) -> Result<(), CartError> {
        self.commit(Vec::new()).await
    }

    /// Sum of effective unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    /// The cart snapshot as an order-creation request.
    pub fn checkout_request(
        &self,
        user_id: Option<Uuid>,
        shipping_address: Option<ShippingAddress>,
    ) -> Result<CreateOrderRequest, CartError> {
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }

        Ok(CreateOrderRequest {
            user_id,
            items: self
                .items
                .iter()
                .map(|item| OrderItemRequest {
                    product_id: item.product.id,
                    quantity: item.quantity,
                })
                .collect(),
            shipping_address,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), CartError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(CartError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    async fn commit(&mut self, items: Vec<CartItem>) -> Result<(), CartError> {
        let raw = serde_json::to_string(&items)?;
        self.storage.set(CART_KEY, &raw).await?;
        self.items = items;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MemoryCartStorage;

    fn product(name: &str, price: i64, discount: Option<i64>, stock: i32) -> CartProduct {
        CartProduct {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price: Decimal::new(price, 0),
            discount_price: discount.map(|d| Decimal::new(d, 0)),
            stock_quantity: stock,
            image: None,
        }
    }

    async fn empty_cart() -> (CartStore<MemoryCartStorage>, MemoryCartStorage) {
        let storage = MemoryCartStorage::new();
        let cart = CartStore::load(storage.clone()).await.unwrap();
        (cart, storage)
    }

    #[tokio::test]
    async fn adding_same_product_accumulates_and_clamps_to_stock() {
        let (mut cart, _) = empty_cart().await;
        let wallet = product("Wallet", 40, None, 5);

        cart.add(wallet.clone(), 3).await.unwrap();
        let entry = cart.add(wallet, 4).await.unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(entry.quantity, 5);
        assert_eq!(cart.subtotal(), Decimal::new(20000, 2));
    }

    #[tokio::test]
    async fn set_quantity_never_leaves_bounds() {
        let (mut cart, _) = empty_cart().await;
        cart.add(product("Belt", 15, None, 3), 1).await.unwrap();

        let raised = cart.set_quantity(0, 10).await.unwrap().unwrap();
        assert_eq!(raised.quantity, 3);

        let lowered = cart.set_quantity(0, -1).await.unwrap().unwrap();
        assert_eq!(lowered.quantity, 2);

        assert!(cart.set_quantity(0, -5).await.unwrap().is_none());
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn subtotal_uses_discount_when_lower() {
        let (mut cart, _) = empty_cart().await;
        cart.add(product("Jacket", 200, Some(150), 10), 2).await.unwrap();
        cart.add(product("Gloves", 30, Some(45), 10), 1).await.unwrap();

        assert_eq!(cart.subtotal(), Decimal::new(330, 0));
        assert_eq!(cart.item_count(), 3);
    }

    #[tokio::test]
    async fn mutations_are_persisted() {
        let (mut cart, storage) = empty_cart().await;
        cart.add(product("Wallet", 40, None, 5), 2).await.unwrap();

        let reloaded = CartStore::load(storage.clone()).await.unwrap();
        assert_eq!(reloaded.items(), cart.items());

        cart.clear().await.unwrap();
        let reloaded = CartStore::load(storage).await.unwrap();
        assert!(reloaded.is_empty());
    }

    #[tokio::test]
    async fn bad_index_and_quantity_are_rejected() {
        let (mut cart, _) = empty_cart().await;

        assert!(matches!(
            cart.remove(0).await,
            Err(CartError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(matches!(
            cart.add(product("Wallet", 40, None, 5), 0).await,
            Err(CartError::InvalidQuantity(0))
        ));
        assert!(matches!(
            cart.add(product("Ball", 10, None, 0), 1).await,
            Err(CartError::OutOfStock(_))
        ));
    }

    #[tokio::test]
    async fn corrupt_storage_is_reported() {
        let storage = MemoryCartStorage::new();
        storage.set(CART_KEY, "{not json").await.unwrap();

        assert!(matches!(
            CartStore::load(storage).await,
            Err(CartError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn totals_survive_extreme_stored_lines() {
        let storage = MemoryCartStorage::new();
        let huge = CartItem {
            product: CartProduct {
                price: Decimal::MAX,
                ..product("Crate", 1, None, i32::MAX)
            },
            quantity: i32::MAX,
        };
        let raw = serde_json::to_string(&vec![huge.clone(), huge]).unwrap();
        storage.set(CART_KEY, &raw).await.unwrap();

        let cart = CartStore::load(storage).await.unwrap();

        assert_eq!(cart.item_count(), 2 * i64::from(i32::MAX));
        assert_eq!(cart.subtotal(), Decimal::MAX);
    }

    #[tokio::test]
    async fn checkout_snapshots_items_in_order() {
        let (mut cart, _) = empty_cart().await;
        assert!(matches!(
            cart.checkout_request(None, None),
            Err(CartError::EmptyCart)
        ));

        let wallet = product("Wallet", 40, None, 5);
        let belt = product("Belt", 15, None, 5);
        cart.add(wallet.clone(), 2).await.unwrap();
        cart.add(belt.clone(), 1).await.unwrap();

        let req = cart.checkout_request(None, None).unwrap();
        assert_eq!(req.items.len(), 2);
        assert_eq!(req.items[0].product_id, wallet.id);
        assert_eq!(req.items[0].quantity, 2);
        assert_eq!(req.items[1].product_id, belt.id);
    }
}
