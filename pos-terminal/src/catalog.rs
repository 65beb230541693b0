//! Menu catalog
//!
//! Loaded once per process from the menu source store, keeping only rows
//! that are both available and active, in source order. The composition
//! root owns the catalog and hands `Rc` clones to whoever needs it; the
//! backing file is never re-read mid-session.

use crate::storage::JsonStore;
use shared::models::MenuItem;
use shared::{PosError, PosResult};
use std::rc::Rc;

#[derive(Debug)]
pub struct MenuCatalog {
    items: Vec<Rc<MenuItem>>,
}

impl MenuCatalog {
    /// Read the menu source and retain the orderable rows
    pub fn load(store: &JsonStore) -> Self {
        let rows: Vec<MenuItem> = store.read();
        let items: Vec<Rc<MenuItem>> = rows
            .into_iter()
            .filter(MenuItem::is_orderable)
            .map(Rc::new)
            .collect();
        tracing::info!(count = items.len(), "Menu catalog loaded");
        Self { items }
    }

    /// Build a catalog directly from items (tests, fixtures)
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self {
            items: items.into_iter().map(Rc::new).collect(),
        }
    }

    /// The nth exposed item, 1-based as shown on the ordering screen
    pub fn item_at(&self, index: usize) -> PosResult<Rc<MenuItem>> {
        if index < 1 || index > self.items.len() {
            return Err(PosError::InvalidIndex);
        }
        Ok(Rc::clone(&self.items[index - 1]))
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<MenuItem>> {
        self.items.iter()
    }
}
