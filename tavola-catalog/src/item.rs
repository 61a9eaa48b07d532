use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant of a menu item. Each variant carries at most one extra attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Plain,
    Beverage { is_alcoholic: bool },
    Appetizer { serves: u32 },
    MainCourse { is_vegetarian: bool },
}

impl ItemKind {
    /// Discriminator written to the `type` key of a record
    pub fn tag(&self) -> &'static str {
        match self {
            ItemKind::Plain => "MenuItem",
            ItemKind::Beverage { .. } => "Beverage",
            ItemKind::Appetizer { .. } => "Appetizer",
            ItemKind::MainCourse { .. } => "MainCourse",
        }
    }
}

/// A single entry of the menu catalog
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub kind: ItemKind,
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Menu record is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid menu item price: {0}")]
    InvalidPrice(f64),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

fn check_price(price: f64) -> CatalogResult<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::InvalidPrice(price));
    }
    Ok(price)
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ItemKind::Plain,
        }
    }

    pub fn beverage(name: impl Into<String>, price: f64, is_alcoholic: bool) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ItemKind::Beverage { is_alcoholic },
        }
    }

    pub fn appetizer(name: impl Into<String>, price: f64, serves: u32) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ItemKind::Appetizer { serves },
        }
    }

    pub fn main_course(name: impl Into<String>, price: f64, is_vegetarian: bool) -> Self {
        Self {
            name: name.into(),
            price,
            kind: ItemKind::MainCourse { is_vegetarian },
        }
    }

    /// Item price before any order-level discount. Identical for every variant.
    pub fn total_price(&self) -> f64 {
        self.price
    }

    /// Price must be finite and non-negative to survive persistence
    pub fn validate(&self) -> CatalogResult<()> {
        check_price(self.price).map(|_| ())
    }

    pub fn is_beverage(&self) -> bool {
        matches!(self.kind, ItemKind::Beverage { .. })
    }

    pub fn is_main_course(&self) -> bool {
        matches!(self.kind, ItemKind::MainCourse { .. })
    }

    /// Flatten into the persisted record shape
    pub fn to_record(&self) -> MenuRecord {
        let mut record = MenuRecord {
            kind: Some(self.kind.tag().to_string()),
            name: Some(self.name.clone()),
            price: Some(self.price),
            ..MenuRecord::default()
        };

        match self.kind {
            ItemKind::Plain => {}
            ItemKind::Beverage { is_alcoholic } => record.is_alcoholic = Some(is_alcoholic),
            ItemKind::Appetizer { serves } => record.serves = Some(serves),
            ItemKind::MainCourse { is_vegetarian } => record.is_vegetarian = Some(is_vegetarian),
        }

        record
    }

    /// Rebuild an item from a record.
    ///
    /// An unknown or missing `type` yields a plain item; absent variant
    /// fields take the variant default. `name` and `price` are required.
    pub fn from_record(record: MenuRecord) -> CatalogResult<Self> {
        let name = record.name.ok_or(CatalogError::MissingField("name"))?;
        let price = check_price(record.price.ok_or(CatalogError::MissingField("price"))?)?;

        let kind = match record.kind.as_deref() {
            Some("Beverage") => ItemKind::Beverage {
                is_alcoholic: record.is_alcoholic.unwrap_or(false),
            },
            Some("Appetizer") => ItemKind::Appetizer {
                serves: record.serves.unwrap_or(1),
            },
            Some("MainCourse") => ItemKind::MainCourse {
                is_vegetarian: record.is_vegetarian.unwrap_or(false),
            },
            _ => ItemKind::Plain,
        };

        Ok(Self { name, price, kind })
    }

    /// Apply the fields present in `patch`. Variant fields only touch the matching variant.
    pub fn apply(&mut self, patch: &MenuItemPatch) -> CatalogResult<()> {
        if let Some(price) = patch.price {
            check_price(price)?;
        }

        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }

        match &mut self.kind {
            ItemKind::Beverage { is_alcoholic } => {
                if let Some(value) = patch.is_alcoholic {
                    *is_alcoholic = value;
                }
            }
            ItemKind::Appetizer { serves } => {
                if let Some(value) = patch.serves {
                    *serves = value;
                }
            }
            ItemKind::MainCourse { is_vegetarian } => {
                if let Some(value) = patch.is_vegetarian {
                    *is_vegetarian = value;
                }
            }
            ItemKind::Plain => {}
        }

        Ok(())
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${:.2}", self.name, self.price)
    }
}

/// On-disk shape of a menu item.
///
/// Every key is optional so that lenient reads can fall back to defaults
/// and report missing required fields as validation errors instead of
/// parse errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_alcoholic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serves: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
}

/// Partial update for a catalog entry, e.g. `{"price": 10.0}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub is_alcoholic: Option<bool>,
    pub serves: Option<u32>,
    pub is_vegetarian: Option<bool>,
}

impl MenuItemPatch {
    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }
}
