use std::sync::Arc;

use coffee_blend_storefront::cart::{CartLine, CartRepository, CartView, MemoryStorage};
use coffee_blend_storefront::client::forms::format_date_for_api;
use coffee_blend_storefront::client::{ApiClient, CheckoutForm, FormError, ReservationForm};

// Validation failures must never reach the network, so these tests run
// against a client pointing nowhere.
fn offline_client() -> ApiClient {
    ApiClient::new("http://localhost:9")
}

#[tokio::test]
async fn reservation_requires_phone() {
    let form = ReservationForm {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        date: "2026-09-01".into(),
        time: "18:30".into(),
        ..Default::default()
    };

    let err = form.submit(&offline_client()).await.unwrap_err();
    assert_eq!(
        err,
        FormError::Validation("Please enter your phone number".into())
    );
    assert!(!form.is_busy());
}

#[tokio::test]
async fn reservation_validates_fields_in_order() {
    let form = ReservationForm::default();
    let err = form.submit(&offline_client()).await.unwrap_err();
    assert_eq!(
        err,
        FormError::Validation("Please enter your first name".into())
    );
}

#[tokio::test]
async fn checkout_rejects_email_without_at_sign() {
    let cart = Arc::new(CartRepository::new(MemoryStorage::new()));
    cart.add(CartLine::new("espresso", "Espresso", 3.0));
    let view = CartView::attach(cart);

    let form = CheckoutForm {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        country: "Ireland".into(),
        street_address: "1 Main St".into(),
        city: "Dublin".into(),
        postcode: "D01".into(),
        phone: "555-0100".into(),
        email: "not-an-email".into(),
        ..Default::default()
    };

    let err = form.submit(&offline_client(), &view).await.unwrap_err();
    assert_eq!(
        err,
        FormError::Validation("Please enter a valid email address".into())
    );
    assert!(!form.is_busy());
}

#[tokio::test]
async fn checkout_requires_country_before_address() {
    let cart = Arc::new(CartRepository::new(MemoryStorage::new()));
    let view = CartView::attach(cart);

    let form = CheckoutForm {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        street_address: "1 Main St".into(),
        ..Default::default()
    };

    let err = form.submit(&offline_client(), &view).await.unwrap_err();
    assert_eq!(err, FormError::Validation("Please select a country".into()));
}

#[test]
fn date_picker_output_is_normalized() {
    assert_eq!(format_date_for_api("03/15/2026"), "2026-03-15");
    assert_eq!(format_date_for_api("2026-03-15"), "2026-03-15");
    // Unrecognized strings pass through for the server to reject.
    assert_eq!(format_date_for_api("next tuesday"), "next tuesday");
}

#[test]
fn client_appends_api_prefix_once() {
    assert_eq!(
        ApiClient::new("http://localhost:5000").base_url(),
        "http://localhost:5000/api"
    );
    assert_eq!(
        ApiClient::new("http://localhost:5000/").base_url(),
        "http://localhost:5000/api"
    );
}
