// src/session/gateway.rs
//
// External identity boundary.
//
// The real provider is an external auth service; the core only depends on
// this trait: a callback subscription plus a synchronous current-identity
// accessor.

use std::sync::RwLock;

use crate::domain::UserId;

/// Callback invoked on every auth-provider state event. The value is the
/// identity after the event, or None when signed out.
pub type AuthStateListener = Box<dyn Fn(Option<UserId>) + Send + Sync>;

pub trait AuthGateway: Send + Sync {
    fn current_identity(&self) -> Option<UserId>;
    fn add_state_listener(&self, listener: AuthStateListener);
}

/// In-process auth gateway for tests and the demo binary.
///
/// `refresh` re-emits the current state without a transition, the way real
/// providers do on internal token refreshes.
#[derive(Default)]
pub struct LocalAuthGateway {
    current: RwLock<Option<UserId>>,
    listeners: RwLock<Vec<AuthStateListener>>,
}

impl LocalAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, user_id: UserId) {
        *self.current.write().unwrap() = Some(user_id);
        self.emit();
    }

    pub fn sign_out(&self) {
        *self.current.write().unwrap() = None;
        self.emit();
    }

    /// Provider-internal refresh: emits the unchanged current state.
    pub fn refresh(&self) {
        self.emit();
    }

    fn emit(&self) {
        let current = self.current.read().unwrap().clone();
        let listeners = self.listeners.read().unwrap();
        for listener in listeners.iter() {
            listener(current.clone());
        }
    }
}

impl AuthGateway for LocalAuthGateway {
    fn current_identity(&self) -> Option<UserId> {
        self.current.read().unwrap().clone()
    }

    fn add_state_listener(&self, listener: AuthStateListener) {
        self.listeners.write().unwrap().push(listener);
    }
}
