use super::customer::CustomerId;
use super::id::entity_id;
use serde::{Deserialize, Serialize};
use std::fmt;

entity_id!(
    /// Type-safe identifier for payment types.
    PaymentTypeId,
    "payment_type"
);

/// A payment method registered by a customer.
///
/// Only the reference is ever attached to an order; nothing here processes payments.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentType {
    pub id: PaymentTypeId,
    /// The customer who registered this payment method.
    pub customer_id: CustomerId,
    pub merchant_name: String,
    pub account_number: String,
}

/// Payload for registering a payment method.
#[derive(Clone)]
pub struct PaymentTypeCreate {
    pub customer_id: CustomerId,
    pub merchant_name: String,
    pub account_number: String,
}

/// Masks all but the last four characters of an account number.
pub fn mask_account_number(account_number: &str) -> String {
    let chars: Vec<char> = account_number.chars().collect();
    let visible = chars.len().min(4);
    let hidden = chars.len() - visible;
    std::iter::repeat('*')
        .take(hidden)
        .chain(chars[hidden..].iter().copied())
        .collect()
}

// Debug output ends up in traces; the account number is always masked there.
impl fmt::Debug for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentType")
            .field("id", &self.id)
            .field("customer_id", &self.customer_id)
            .field("merchant_name", &self.merchant_name)
            .field("account_number", &mask_account_number(&self.account_number))
            .finish()
    }
}

impl fmt::Debug for PaymentTypeCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentTypeCreate")
            .field("customer_id", &self.customer_id)
            .field("merchant_name", &self.merchant_name)
            .field("account_number", &mask_account_number(&self.account_number))
            .finish()
    }
}
