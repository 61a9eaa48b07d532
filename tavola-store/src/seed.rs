use std::path::Path;
use tavola_catalog::MenuItem;
use tracing::info;

use crate::menu_repo::save_menu;
use crate::StoreResult;

/// The fixed starter catalog
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::beverage("Agua mineral", 1.50, false),
        MenuItem::beverage("Vino tinto", 4.00, true),
        MenuItem::appetizer("Bruschetta", 3.50, 2),
        MenuItem::main_course("Pizza Margarita", 9.00, true),
    ]
}

/// Overwrite `path` with the starter catalog
pub fn seed_menu(path: impl AsRef<Path>) -> StoreResult<Vec<MenuItem>> {
    let path = path.as_ref();
    let items = default_menu();

    save_menu(&items, path)?;
    info!("Menu seeded with {} items at {}", items.len(), path.display());
    Ok(items)
}
