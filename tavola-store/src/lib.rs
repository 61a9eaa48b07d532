pub mod app_config;
pub mod menu_repo;
pub mod seed;

pub use menu_repo::{add_menu_item, delete_menu_item, load_menu, save_menu, update_menu_item};
pub use seed::{default_menu, seed_menu};

use tavola_catalog::CatalogError;

/// Default catalog file name
pub const DEFAULT_MENU_FILE: &str = "menu.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Menu file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Menu file is not valid: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Menu record {index} is invalid: {source}")]
    Record { index: usize, source: CatalogError },

    #[error("Invalid menu item: {0}")]
    Invalid(#[from] CatalogError),
}

pub type StoreResult<T> = Result<T, StoreError>;
