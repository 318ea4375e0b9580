use std::sync::{Arc, Mutex};

use coffee_blend_storefront::cart::{
    CART_STORAGE_KEY, CartBadge, CartLine, CartRepository, CartRow, CartView, FileStorage,
    MemoryStorage, StorageBackend, product_id,
};

fn repo() -> CartRepository {
    CartRepository::new(MemoryStorage::new())
}

#[test]
fn distinct_adds_sum_quantities() {
    let cart = repo();
    cart.add(CartLine::new("espresso", "Espresso", 3.0));
    cart.add(CartLine::new("latte", "Latte", 4.5).with_quantity(2));
    cart.add(CartLine::new("mocha", "Mocha", 5.0).with_quantity(3));

    assert_eq!(cart.count(), 6);
    assert_eq!(cart.cart().len(), 3);
}

#[test]
fn same_id_accumulates_quantity() {
    let cart = repo();
    cart.add(CartLine::new("x", "X", 5.0));
    cart.add(CartLine::new("x", "X", 5.0).with_quantity(2));

    let lines = cart.cart();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(cart.total(), 15.0);
}

#[test]
fn insertion_order_is_preserved() {
    let cart = repo();
    cart.add(CartLine::new("b", "B", 1.0));
    cart.add(CartLine::new("a", "A", 1.0));
    cart.add(CartLine::new("b", "B", 1.0));

    let ids: Vec<_> = cart.cart().into_iter().map(|line| line.id).collect();
    assert_eq!(ids, ["b", "a"]);
}

#[test]
fn set_quantity_zero_removes_line() {
    let cart = repo();
    cart.add(CartLine::new("x", "X", 5.0));
    cart.set_quantity("x", 0);

    assert!(cart.cart().is_empty());
}

#[test]
fn set_quantity_is_absolute() {
    let cart = repo();
    cart.add(CartLine::new("x", "X", 5.0).with_quantity(4));
    cart.set_quantity("x", 2);

    assert_eq!(cart.cart()[0].quantity, 2);
}

#[test]
fn set_quantity_on_absent_id_is_noop() {
    let cart = repo();
    cart.add(CartLine::new("x", "X", 5.0));
    let after = cart.set_quantity("y", 3);

    assert_eq!(after, cart.cart());
    assert_eq!(cart.count(), 1);
}

#[test]
fn remove_absent_id_is_noop() {
    let cart = repo();
    cart.add(CartLine::new("x", "X", 5.0));

    let before = cart.cart();
    cart.remove("missing");
    assert_eq!(cart.cart(), before);
}

#[test]
fn save_round_trips() {
    let cart = repo();
    let lines = vec![
        CartLine::new("x", "X", 5.0).with_quantity(2).with_image("x.png"),
        CartLine::new("y", "Y", 1.25),
    ];
    cart.save(&lines);

    assert_eq!(cart.cart(), lines);
}

#[test]
fn clear_empties_cart_and_storage() {
    let storage = Arc::new(MemoryStorage::new());
    let cart = CartRepository::new(Arc::clone(&storage));
    cart.add(CartLine::new("x", "X", 5.0));
    cart.clear();

    assert!(cart.cart().is_empty());
    assert_eq!(cart.count(), 0);
    assert!(storage.get(CART_STORAGE_KEY).is_none());
}

#[test]
fn malformed_slot_reads_as_empty() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(CART_STORAGE_KEY, "not json at all");
    let cart = CartRepository::new(storage);

    assert!(cart.cart().is_empty());
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn mutations_notify_subscribers_with_snapshot() {
    let cart = repo();
    let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = cart.subscribe(move |snapshot| {
        sink.lock().unwrap().push(snapshot.len());
    });

    cart.add(CartLine::new("x", "X", 5.0));
    cart.add(CartLine::new("y", "Y", 2.0));
    cart.remove("x");
    cart.clear();

    assert_eq!(*seen.lock().unwrap(), [1, 2, 1, 0]);

    cart.unsubscribe(subscription);
    cart.add(CartLine::new("z", "Z", 1.0));
    assert_eq!(seen.lock().unwrap().len(), 4);
}

#[test]
fn empty_cart_renders_single_placeholder_row() {
    let cart = Arc::new(repo());
    let view = CartView::attach(Arc::clone(&cart));

    assert_eq!(view.rows(), [CartRow::Placeholder]);
    assert_eq!(view.total_display(), "$0.00");
}

#[test]
fn view_renders_lines_and_total() {
    let cart = Arc::new(repo());
    cart.add(CartLine::new("espresso", "Espresso", 3.0).with_quantity(2));
    let view = CartView::attach(Arc::clone(&cart));

    // Renders on attach even though the mutation predates the subscription.
    assert_eq!(
        view.rows(),
        [CartRow::Line {
            product_id: "espresso".into(),
            name: "Espresso".into(),
            unit_price: "$3.00".into(),
            quantity: 2,
            line_total: "$6.00".into(),
        }]
    );
    assert_eq!(view.total_display(), "$6.00");
    assert_eq!(view.total_amount(), 6.0);
}

#[test]
fn view_controls_mutate_and_rerender() {
    let cart = Arc::new(repo());
    cart.add(CartLine::new("espresso", "Espresso", 3.0));
    cart.add(CartLine::new("latte", "Latte", 4.5));
    let view = CartView::attach(Arc::clone(&cart));

    view.change_quantity("latte", 3);
    assert_eq!(view.total_display(), "$16.50");

    view.remove_line("espresso");
    assert_eq!(view.rows().len(), 1);

    // A quantity below one acts as the remove control.
    view.change_quantity("latte", 0);
    assert_eq!(view.rows(), [CartRow::Placeholder]);
    assert_eq!(view.total_display(), "$0.00");
}

#[test]
fn detached_view_stops_rendering() {
    let cart = Arc::new(repo());
    let view = CartView::attach(Arc::clone(&cart));
    drop(view);

    // No listeners remain, so this must not panic or leak renders.
    cart.add(CartLine::new("x", "X", 5.0));
    assert_eq!(cart.count(), 1);
}

#[test]
fn badge_tracks_count_and_hides_at_zero() {
    let cart = Arc::new(repo());
    let badge = CartBadge::attach(Arc::clone(&cart));
    assert_eq!(badge.display(), None);

    cart.add(CartLine::new("x", "X", 5.0).with_quantity(2));
    cart.add(CartLine::new("y", "Y", 2.0));
    assert_eq!(badge.count(), 3);
    assert_eq!(badge.display().as_deref(), Some("3"));

    cart.clear();
    assert_eq!(badge.display(), None);
}

#[test]
fn file_storage_persists_across_repositories() {
    let dir = tempfile::tempdir().unwrap();

    let cart = CartRepository::new(FileStorage::new(dir.path()));
    cart.add(CartLine::new("espresso", "Espresso", 3.0).with_quantity(2));
    drop(cart);

    let reopened = CartRepository::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.count(), 2);
    assert_eq!(reopened.total(), 6.0);

    reopened.clear();
    let reopened = CartRepository::new(FileStorage::new(dir.path()));
    assert!(reopened.cart().is_empty());
}

#[test]
fn product_id_derives_from_display_name() {
    assert_eq!(product_id("Coffee Capuccino"), "coffee_capuccino");
    assert_eq!(product_id("  Iced   Mocha  "), "iced_mocha");
}
