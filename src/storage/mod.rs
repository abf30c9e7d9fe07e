use std::rc::Rc;

use anyhow::Result;

mod local_store;
mod memory_store;

pub(crate) use local_store::LocalStore;
pub(crate) use memory_store::MemoryStore;

/// Origin-scoped string key-value store backing user preferences.
pub(crate) trait PreferenceStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Clone)]
pub(crate) struct OpenedStore {
    pub(crate) store: Rc<dyn PreferenceStore>,
    /// False when writes only last for this page session.
    pub(crate) persistent: bool,
}

/// Open `localStorage`, falling back to an in-memory store when the browser
/// refuses access (sandboxed iframes, storage disabled by policy).
pub(crate) fn open_store() -> OpenedStore {
    with_fallback(LocalStore::open())
}

fn with_fallback<S: PreferenceStore + 'static>(opened: Result<S>) -> OpenedStore {
    match opened {
        Ok(store) => {
            tracing::debug!("using persistent storage for preferences");
            OpenedStore {
                store: Rc::new(store),
                persistent: true,
            }
        }
        Err(e) => {
            tracing::warn!(
                error = %format!("{e:#}"),
                "persistent storage unavailable, preferences will not survive a reload"
            );
            OpenedStore {
                store: Rc::new(MemoryStore::default()),
                persistent: false,
            }
        }
    }
}
