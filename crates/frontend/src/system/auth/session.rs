//! Session context: the single owner of the persisted credential.
//!
//! Views never touch storage directly; they read and write the session
//! through [`SessionContext`], which also notifies subscribers of changes.

use std::sync::{Arc, Mutex};

use contracts::system::auth::Session;

/// Persistence backend for the session
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Process-memory store, used when browser storage is unavailable
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.session.lock().ok()?.clone()
    }

    fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = None;
        }
    }
}

type Listener = Box<dyn Fn(Option<&Session>) + Send + Sync>;

#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::default()))
    }

    pub fn get_session(&self) -> Option<Session> {
        self.store.load()
    }

    /// Bearer token of the current session, if any
    pub fn token(&self) -> Option<String> {
        self.get_session()
            .map(|s| s.token)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn set_session(&self, session: Session) {
        log::info!(
            "session started for {} ({})",
            session.user.username,
            session.role().code()
        );
        self.store.save(&session);
        self.emit(Some(&session));
    }

    pub fn clear_session(&self) {
        log::info!("session cleared");
        self.store.clear();
        self.emit(None);
    }

    /// Register a change listener; called after every set/clear
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + Send + Sync + 'static) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Box::new(listener));
        }
    }

    fn emit(&self, session: Option<&Session>) {
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(session);
            }
        }
    }
}
