use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::cart::storage::StorageBackend;

/// Fixed slot name the cart lives under.
pub const CART_STORAGE_KEY: &str = "coffee_blend_cart";

/// One product entry in the cart. The slot holds a JSON array of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// A line for one unit of a product with no image.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Product ids are derived from the display name: lower-cased, whitespace
/// collapsed to underscores. Two products with the same name share a line.
pub fn product_id(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Handle returned by [`CartRepository::subscribe`]; pass it back to
/// [`CartRepository::unsubscribe`] to detach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Box<dyn Fn(&[CartLine]) + Send + Sync>;

/// The cart: an insertion-ordered line sequence persisted in one storage
/// slot, with listeners notified on every mutation.
///
/// Every mutator goes through [`save`](Self::save) (read-modify-write), so
/// two repositories sharing a backend race last-writer-wins. That matches a
/// single-user device cart and is left as-is.
///
/// Listeners run while the registry is borrowed; subscribing or
/// unsubscribing from inside a listener is not supported.
pub struct CartRepository {
    storage: Box<dyn StorageBackend>,
    key: String,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

impl CartRepository {
    pub fn new(storage: impl StorageBackend + 'static) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    pub fn with_key(storage: impl StorageBackend + 'static, key: impl Into<String>) -> Self {
        Self {
            storage: Box::new(storage),
            key: key.into(),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: AtomicU64::new(0),
        }
    }

    /// Current cart snapshot. A missing or unreadable slot reads as empty.
    pub fn cart(&self) -> Vec<CartLine> {
        self.storage
            .get(&self.key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Overwrite the stored cart and notify every subscriber with the new
    /// snapshot. The only mutation primitive; the other mutators go
    /// through here.
    pub fn save(&self, cart: &[CartLine]) {
        match serde_json::to_string(cart) {
            Ok(raw) => self.storage.set(&self.key, &raw),
            Err(err) => tracing::warn!(error = %err, "failed to serialize cart"),
        }
        self.notify(cart);
    }

    /// Add a product: an existing line with the same id accumulates the
    /// incoming quantity, otherwise the line is appended.
    pub fn add(&self, product: CartLine) -> Vec<CartLine> {
        let mut cart = self.cart();
        match cart.iter_mut().find(|line| line.id == product.id) {
            Some(line) => line.quantity += product.quantity,
            None => cart.push(product),
        }
        self.save(&cart);
        cart
    }

    /// Remove the line with the given id. Absent ids are a no-op, not an
    /// error.
    pub fn remove(&self, id: &str) -> Vec<CartLine> {
        let mut cart = self.cart();
        cart.retain(|line| line.id != id);
        self.save(&cart);
        cart
    }

    /// Set a line's quantity to exactly `quantity`. Zero or negative
    /// removes the line; an absent id is a no-op.
    pub fn set_quantity(&self, id: &str, quantity: i32) -> Vec<CartLine> {
        if quantity <= 0 {
            return self.remove(id);
        }
        let mut cart = self.cart();
        if let Some(line) = cart.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity as u32;
            self.save(&cart);
        }
        cart
    }

    /// Delete the slot entirely and notify with an empty cart.
    pub fn clear(&self) {
        self.storage.remove(&self.key);
        self.notify(&[]);
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> f64 {
        self.cart()
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }

    /// Sum of quantities over all lines.
    pub fn count(&self) -> u32 {
        self.cart().iter().map(|line| line.quantity).sum()
    }

    /// Register a listener invoked with the full cart after every mutation.
    /// Mutations before the subscription are not replayed; render once
    /// after subscribing to catch up.
    pub fn subscribe(&self, listener: impl Fn(&[CartLine]) + Send + Sync + 'static) -> Subscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap()
            .push((id, Box::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|(id, _)| *id != subscription.0);
    }

    fn notify(&self, cart: &[CartLine]) {
        for (_, listener) in self.listeners.lock().unwrap().iter() {
            listener(cart);
        }
    }
}
