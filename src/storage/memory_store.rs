use std::{cell::RefCell, collections::HashMap};

use anyhow::Result;

use super::PreferenceStore;

/// Session-only store. Values are lost on reload.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
