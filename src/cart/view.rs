use std::sync::{Arc, Mutex};

use crate::cart::repository::{CartLine, CartRepository, Subscription};

/// One rendered row of the cart table. An empty cart renders as exactly one
/// [`CartRow::Placeholder`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartRow {
    Placeholder,
    Line {
        product_id: String,
        name: String,
        unit_price: String,
        quantity: u32,
        line_total: String,
    },
}

#[derive(Debug, Default)]
struct Rendered {
    rows: Vec<CartRow>,
    total: f64,
}

/// Projection of the cart into row models and a grand total.
///
/// The view holds no state of its own beyond the last render: it renders
/// once when attached and again on every change notification, each time
/// rebuilding every row from the current snapshot. The row controls
/// ([`remove_line`](Self::remove_line),
/// [`change_quantity`](Self::change_quantity)) forward to the repository,
/// whose notification brings the render back up to date.
pub struct CartView {
    repo: Arc<CartRepository>,
    rendered: Arc<Mutex<Rendered>>,
    subscription: Subscription,
}

impl CartView {
    pub fn attach(repo: Arc<CartRepository>) -> Self {
        let rendered = Arc::new(Mutex::new(Rendered::default()));
        let target = Arc::clone(&rendered);
        let subscription = repo.subscribe(move |cart| {
            *target.lock().unwrap() = render(cart);
        });
        // Mutations from before the subscription are not replayed.
        *rendered.lock().unwrap() = render(&repo.cart());
        Self {
            repo,
            rendered,
            subscription,
        }
    }

    pub fn rows(&self) -> Vec<CartRow> {
        self.rendered.lock().unwrap().rows.clone()
    }

    pub fn total_amount(&self) -> f64 {
        self.rendered.lock().unwrap().total
    }

    pub fn total_display(&self) -> String {
        format_price(self.total_amount())
    }

    /// Remove control on a row.
    pub fn remove_line(&self, product_id: &str) {
        self.repo.remove(product_id);
    }

    /// Quantity control on a row; values below one remove the line.
    pub fn change_quantity(&self, product_id: &str, quantity: i32) {
        if quantity < 1 {
            self.repo.remove(product_id);
        } else {
            self.repo.set_quantity(product_id, quantity);
        }
    }
}

impl Drop for CartView {
    fn drop(&mut self) {
        self.repo.unsubscribe(self.subscription);
    }
}

/// Item-count badge for the navigation bar. Tracks the quantity sum and
/// hides entirely while the cart is empty.
pub struct CartBadge {
    repo: Arc<CartRepository>,
    count: Arc<Mutex<u32>>,
    subscription: Subscription,
}

impl CartBadge {
    pub fn attach(repo: Arc<CartRepository>) -> Self {
        let count = Arc::new(Mutex::new(0));
        let target = Arc::clone(&count);
        let subscription = repo.subscribe(move |cart| {
            *target.lock().unwrap() = cart.iter().map(|line| line.quantity).sum();
        });
        *count.lock().unwrap() = repo.count();
        Self {
            repo,
            count,
            subscription,
        }
    }

    pub fn count(&self) -> u32 {
        *self.count.lock().unwrap()
    }

    /// Badge text, or `None` when the badge is hidden.
    pub fn display(&self) -> Option<String> {
        let count = self.count();
        (count > 0).then(|| count.to_string())
    }
}

impl Drop for CartBadge {
    fn drop(&mut self) {
        self.repo.unsubscribe(self.subscription);
    }
}

fn render(cart: &[CartLine]) -> Rendered {
    if cart.is_empty() {
        return Rendered {
            rows: vec![CartRow::Placeholder],
            total: 0.0,
        };
    }

    let mut total = 0.0;
    let rows = cart
        .iter()
        .map(|line| {
            let line_total = line.price * f64::from(line.quantity);
            total += line_total;
            CartRow::Line {
                product_id: line.id.clone(),
                name: line.name.clone(),
                unit_price: format_price(line.price),
                quantity: line.quantity,
                line_total: format_price(line_total),
            }
        })
        .collect();

    Rendered { rows, total }
}

pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}
