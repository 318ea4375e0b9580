use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    cart::view::CartView,
    client::api::{ApiClient, ClientError},
    dto::{orders::CreateOrderRequest, reservations::CreateReservationRequest},
    models::{Order, Reservation},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A required field failed client-side validation; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered with an error envelope.
    #[error("{0}")]
    Api(String),

    /// Transport failure; the user is asked to retry.
    #[error("{0}")]
    Network(String),

    /// A submission for this form is already in flight.
    #[error("Submission already in progress")]
    Busy,
}

/// Normalize date-picker output to `YYYY-MM-DD`. Unrecognized strings pass
/// through unchanged and are left to the server to reject.
pub fn format_date_for_api(value: &str) -> String {
    let value = value.trim();
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    value.to_string()
}

fn require(value: &str, message: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Validation(message.to_string()));
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Field bindings for the reservation form. Fields hold whatever the user
/// typed; submission validates, normalizes and sends them.
#[derive(Debug, Default)]
pub struct ReservationForm {
    pub first_name: String,
    pub last_name: String,
    pub date: String,
    pub time: String,
    pub phone: String,
    pub message: String,
    pub busy: AtomicBool,
}

impl ReservationForm {
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    fn validate(&self) -> Result<CreateReservationRequest, FormError> {
        let first_name = require(&self.first_name, "Please enter your first name")?;
        let last_name = require(&self.last_name, "Please enter your last name")?;
        let date = require(&self.date, "Please select a date")?;
        let time = require(&self.time, "Please select a time")?;
        let phone = require(&self.phone, "Please enter your phone number")?;

        Ok(CreateReservationRequest {
            first_name: Some(first_name),
            last_name: Some(last_name),
            date: Some(format_date_for_api(&date)),
            time: Some(time),
            phone: Some(phone),
            message: optional(&self.message),
        })
    }

    /// Validate, then submit. The busy flag plays the role of the disabled
    /// submit control: overlapping submissions are rejected until the
    /// in-flight request settles, success or not.
    pub async fn submit(&self, api: &ApiClient) -> Result<Reservation, FormError> {
        let payload = self.validate()?;

        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(FormError::Busy);
        }
        let result = api.create_reservation(&payload).await;
        self.busy.store(false, Ordering::SeqCst);

        match result {
            Ok(envelope) => match envelope.data {
                Some(reservation) if envelope.success => Ok(reservation),
                _ => Err(FormError::Api(
                    envelope
                        .message
                        .unwrap_or_else(|| "Error creating reservation".to_string()),
                )),
            },
            Err(ClientError::Api { message, .. }) => Err(FormError::Api(message)),
            Err(ClientError::Network(_)) => Err(FormError::Network(
                "Error creating reservation. Please try again.".to_string(),
            )),
        }
    }
}

/// Field bindings for the checkout (billing) form.
#[derive(Debug, Default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub street_address: String,
    pub apartment: String,
    pub city: String,
    pub postcode: String,
    pub phone: String,
    pub email: String,
    pub payment_method: String,
    pub busy: AtomicBool,
}

impl CheckoutForm {
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    fn validate(&self, total_amount: f64) -> Result<CreateOrderRequest, FormError> {
        let first_name = require(&self.first_name, "Please enter your first name")?;
        let last_name = require(&self.last_name, "Please enter your last name")?;
        let country = require(&self.country, "Please select a country")?;
        let street_address = require(&self.street_address, "Please enter your street address")?;
        let city = require(&self.city, "Please enter your city")?;
        let postcode = require(&self.postcode, "Please enter your postcode/ZIP")?;
        let phone = require(&self.phone, "Please enter your phone number")?;
        let email = require(&self.email, "Please enter a valid email address")?;
        if !email.contains('@') {
            return Err(FormError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }

        let total_amount = Decimal::try_from(total_amount)
            .map_err(|_| FormError::Validation("Invalid order total".to_string()))?;

        Ok(CreateOrderRequest {
            first_name: Some(first_name),
            last_name: Some(last_name),
            country: Some(country),
            street_address: Some(street_address),
            apartment: optional(&self.apartment),
            city: Some(city),
            postcode: Some(postcode),
            phone: Some(phone),
            email: Some(email),
            total_amount: Some(total_amount),
            payment_method: optional(&self.payment_method),
        })
    }

    /// Validate, then place the order. The total comes from the rendered
    /// cart view, not from cart persistence.
    pub async fn submit(&self, api: &ApiClient, cart: &CartView) -> Result<Order, FormError> {
        let payload = self.validate(cart.total_amount())?;

        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(FormError::Busy);
        }
        let result = api.create_order(&payload).await;
        self.busy.store(false, Ordering::SeqCst);

        match result {
            Ok(envelope) => match envelope.data {
                Some(order) if envelope.success => Ok(order),
                _ => Err(FormError::Api(
                    envelope
                        .message
                        .unwrap_or_else(|| "Error placing order".to_string()),
                )),
            },
            Err(ClientError::Api { message, .. }) => Err(FormError::Api(message)),
            Err(ClientError::Network(_)) => Err(FormError::Network(
                "Error placing order. Please try again.".to_string(),
            )),
        }
    }
}
