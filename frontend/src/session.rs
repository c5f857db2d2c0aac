use std::rc::Rc;

use cosmo_nav_shared::{logout, SessionError, SessionFlag, SessionStore};
use gloo_storage::{LocalStorage, Storage};
use leptos::logging::warn;

/// Session flags in `window.localStorage`.
///
/// Values are read and written raw rather than through gloo's JSON codec:
/// the login pages store plain `"true"` strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn get(&self, flag: SessionFlag) -> bool {
        let raw = LocalStorage::raw()
            .get_item(flag.storage_key())
            .ok()
            .flatten();
        SessionFlag::decode(raw.as_deref())
    }

    fn set(&self, flag: SessionFlag, value: bool) -> Result<(), SessionError> {
        let key = flag.storage_key();
        LocalStorage::raw()
            .set_item(key, SessionFlag::encode(value))
            .map_err(|e| SessionError::Write {
                key,
                message: format!("{:?}", e),
            })
    }

    fn clear(&self, flag: SessionFlag) {
        LocalStorage::delete(flag.storage_key());
    }
}

pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        warn!("page reload failed: {:?}", e);
    }
}

/// Builds the handler bound to every "Log Out" control.
pub fn logout_handler(store: Rc<dyn SessionStore>) -> Rc<dyn Fn()> {
    Rc::new(move || logout(store.as_ref(), reload_page))
}
