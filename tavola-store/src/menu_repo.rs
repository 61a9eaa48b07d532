use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tavola_catalog::{MenuItem, MenuItemPatch, MenuRecord};
use tracing::debug;

use crate::{StoreError, StoreResult};

/// Overwrite `path` with the full catalog. Nothing is written if any item is invalid.
pub fn save_menu(items: &[MenuItem], path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    for item in items {
        item.validate()?;
    }

    let records: Vec<MenuRecord> = items.iter().map(MenuItem::to_record).collect();
    let body = serde_json::to_string_pretty(&records)?;

    fs::write(path, body)?;
    debug!("Saved {} menu items to {}", items.len(), path.display());
    Ok(())
}

/// Read the full catalog. A missing file is an empty catalog.
pub fn load_menu(path: impl AsRef<Path>) -> StoreResult<Vec<MenuItem>> {
    let path = path.as_ref();
    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No menu file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let records: Vec<MenuRecord> = serde_json::from_str(&body)?;
    let items = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            MenuItem::from_record(record).map_err(|source| StoreError::Record { index, source })
        })
        .collect::<StoreResult<Vec<_>>>()?;

    debug!("Loaded {} menu items from {}", items.len(), path.display());
    Ok(items)
}

pub fn add_menu_item(item: MenuItem, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    let mut items = load_menu(path)?;
    items.push(item);
    save_menu(&items, path)
}

/// Patch the first item named exactly `name`. No match rewrites the file unchanged.
pub fn update_menu_item(
    name: &str,
    patch: &MenuItemPatch,
    path: impl AsRef<Path>,
) -> StoreResult<()> {
    let path = path.as_ref();
    let mut items = load_menu(path)?;

    match items.iter_mut().find(|item| item.name == name) {
        Some(item) => item.apply(patch)?,
        None => debug!("No menu item named {:?} to update", name),
    }

    save_menu(&items, path)
}

/// Remove every item named exactly `name`
pub fn delete_menu_item(name: &str, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    let mut items = load_menu(path)?;
    let before = items.len();
    items.retain(|item| item.name != name);

    if items.len() == before {
        debug!("No menu item named {:?} to delete", name);
    }

    save_menu(&items, path)
}
