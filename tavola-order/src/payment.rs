use crate::models::Order;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tavola_catalog::PricingRules;
use uuid::Uuid;

/// Order handle shared between the party still adding items and the payment
pub type SharedOrder = Rc<RefCell<Order>>;

/// Confirmation emitted when a payment is processed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub order_id: Uuid,
    pub amount: f64,
    pub payment_method: String,
    pub processed_at: DateTime<Utc>,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payment of ${:.2} processed via {}", self.amount, self.payment_method)
    }
}

pub struct Payment {
    order: SharedOrder,
    payment_method: String,
    pricing: PricingRules,
    paid: bool,
}

impl Payment {
    pub fn new(order: SharedOrder, payment_method: impl Into<String>) -> Self {
        Self {
            order,
            payment_method: payment_method.into(),
            pricing: PricingRules::default(),
            paid: false,
        }
    }

    /// Charge using configured discount rules instead of the defaults
    pub fn with_pricing(mut self, pricing: PricingRules) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn order(&self) -> &SharedOrder {
        &self.order
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    /// Charge the order's total as it stands now and mark the payment paid.
    ///
    /// Calling again re-reads the total and issues a fresh receipt; `paid`
    /// stays true.
    pub fn process_payment(&mut self) -> PaymentReceipt {
        let order = self.order.borrow();
        let receipt = PaymentReceipt {
            order_id: order.id,
            amount: order.calculate_total_with(&self.pricing),
            payment_method: self.payment_method.clone(),
            processed_at: Utc::now(),
        };
        drop(order);

        self.paid = true;
        tracing::info!(
            "Payment of ${:.2} processed via {} for order {}",
            receipt.amount,
            receipt.payment_method,
            receipt.order_id
        );

        receipt
    }
}
