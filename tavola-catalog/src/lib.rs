pub mod item;
pub mod pricing;

pub use item::{CatalogError, CatalogResult, ItemKind, MenuItem, MenuItemPatch, MenuRecord};
pub use pricing::PricingRules;
