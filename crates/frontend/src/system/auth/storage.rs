use contracts::system::auth::Session;
use web_sys::window;

use super::session::SessionStore;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Session persisted in `localStorage` as `token` plus a JSON `user`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = get_local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let user_json = storage.get_item(USER_KEY).ok()??;
        match serde_json::from_str(&user_json) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                log::warn!("stored user profile is unreadable: {}", e);
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let Some(storage) = get_local_storage() else {
            log::warn!("localStorage unavailable, session not persisted");
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        match serde_json::to_string(&session.user) {
            Ok(json) => {
                let _ = storage.set_item(USER_KEY, &json);
            }
            Err(e) => log::warn!("failed to serialize user profile: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
