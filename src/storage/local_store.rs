use anyhow::{Context, Result, anyhow};
use web_sys::{Storage, window};

use super::PreferenceStore;

/// `window.localStorage`.
pub(crate) struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub(crate) fn open() -> Result<Self> {
        let storage = window()
            .context("window is unavailable")?
            .local_storage()
            .map_err(|e| anyhow!("localStorage access denied: {e:?}"))?
            .context("localStorage is disabled")?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| anyhow!("failed to read `{key}`: {e:?}"))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| anyhow!("failed to write `{key}`: {e:?}"))
    }
}
