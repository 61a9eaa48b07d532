pub mod models;
pub mod payment;

pub use models::{Order, OrderDisplay};
pub use payment::{Payment, PaymentReceipt, SharedOrder};
