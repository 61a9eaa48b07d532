use serde::{Deserialize, Serialize};

/// Discount rules applied when totalling an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Multiplier for each beverage when the order also has a main course
    #[serde(default = "default_beverage_discount")]
    pub beverage_discount: f64,

    /// Multiplier for the whole order once it reaches `bulk_threshold` items
    #[serde(default = "default_bulk_discount")]
    pub bulk_discount: f64,

    /// Item count (not distinct) that triggers the bulk discount
    #[serde(default = "default_bulk_threshold")]
    pub bulk_threshold: usize,
}

fn default_beverage_discount() -> f64 { 0.9 }

fn default_bulk_discount() -> f64 { 0.9 }

fn default_bulk_threshold() -> usize { 5 }

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            beverage_discount: default_beverage_discount(),
            bulk_discount: default_bulk_discount(),
            bulk_threshold: default_bulk_threshold(),
        }
    }
}

impl PricingRules {
    /// Multiplier for the whole order given its item count
    pub fn bulk_multiplier(&self, item_count: usize) -> f64 {
        if item_count >= self.bulk_threshold {
            self.bulk_discount
        } else {
            1.0
        }
    }

    /// Multiplier for a beverage line
    pub fn beverage_multiplier(&self, has_main_course: bool) -> f64 {
        if has_main_course {
            self.beverage_discount
        } else {
            1.0
        }
    }
}
