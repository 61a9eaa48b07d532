use chrono::{DateTime, Utc};
use std::fmt;
use tavola_catalog::{MenuItem, PricingRules};
use uuid::Uuid;

/// A customer's order: menu items in the sequence they were added
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    items: Vec<MenuItem>,
    pub created_at: DateTime<Utc>,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Append an item. Duplicates are kept.
    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_main_course(&self) -> bool {
        self.items.iter().any(MenuItem::is_main_course)
    }

    /// Total with the standard discount rules
    pub fn calculate_total(&self) -> f64 {
        self.calculate_total_with(&PricingRules::default())
    }

    /// Total with explicit rules.
    ///
    /// Beverages are discounted when a main course is present, then the
    /// whole sum is discounted once the item count reaches the bulk
    /// threshold. Both discounts compose multiplicatively.
    pub fn calculate_total_with(&self, rules: &PricingRules) -> f64 {
        let beverage_multiplier = rules.beverage_multiplier(self.has_main_course());

        let subtotal: f64 = self
            .items
            .iter()
            .map(|item| {
                if item.is_beverage() {
                    item.total_price() * beverage_multiplier
                } else {
                    item.total_price()
                }
            })
            .sum();

        subtotal * rules.bulk_multiplier(self.items.len())
    }

    /// Render the item lines and the total priced with `rules`
    pub fn display_with<'a>(&'a self, rules: &'a PricingRules) -> OrderDisplay<'a> {
        OrderDisplay { order: self, rules }
    }
}

/// Printable bill of an order under a given set of pricing rules
pub struct OrderDisplay<'a> {
    order: &'a Order,
    rules: &'a PricingRules,
}

impl fmt::Display for OrderDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.order.items {
            writeln!(f, "{}", item)?;
        }
        write!(f, "Total: ${:.2}", self.order.calculate_total_with(self.rules))
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&PricingRules::default()), f)
    }
}
