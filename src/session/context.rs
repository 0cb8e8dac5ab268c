// src/session/context.rs
//
// Current-identity tracking over the auth boundary.
//
// DESIGN PRINCIPLES:
// 1. One authoritative current-identity value, readable synchronously
// 2. Exactly one notification per actual transition (sign-in, sign-out,
//    account switch); provider-internal refreshes are deduplicated
// 3. Subscribers execute immediately in subscription order

use std::sync::{Arc, RwLock};

use crate::domain::UserId;
use crate::session::gateway::AuthGateway;

type SessionListener = Box<dyn Fn(Option<UserId>) + Send + Sync>;

struct SessionInner {
    current: Option<UserId>,
    /// Distinguishes "no user yet determined" from "confirmed no user"
    initialized: bool,
}

pub struct SessionContext {
    inner: RwLock<SessionInner>,
    subscribers: RwLock<Vec<SessionListener>>,
}

impl SessionContext {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(SessionInner {
                current: None,
                initialized: false,
            }),
            subscribers: RwLock::new(Vec::new()),
        })
    }

    /// Wire this context to an auth gateway. The gateway's current state is
    /// consumed immediately, then every later provider event flows through
    /// the dedup in `handle_auth_event`.
    pub fn bind(self: &Arc<Self>, gateway: &dyn AuthGateway) {
        let ctx = Arc::clone(self);
        gateway.add_state_listener(Box::new(move |identity| ctx.handle_auth_event(identity)));
        self.handle_auth_event(gateway.current_identity());
    }

    /// Subscribe to identity transitions. Each notification is authoritative;
    /// subscribers must treat it as an idempotent full reset.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(Option<UserId>) + Send + Sync + 'static,
    {
        self.subscribers.write().unwrap().push(Box::new(listener));
    }

    /// Synchronous current-identity accessor.
    pub fn current_identity(&self) -> Option<UserId> {
        self.inner.read().unwrap().current.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.read().unwrap().initialized
    }

    fn handle_auth_event(&self, identity: Option<UserId>) {
        let changed = {
            let mut inner = self.inner.write().unwrap();
            inner.initialized = true;
            if inner.current != identity {
                inner.current = identity.clone();
                true
            } else {
                false
            }
        };

        if !changed {
            tracing::debug!("Auth event without identity transition, not forwarding");
            return;
        }

        tracing::info!(
            identity = identity.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
            "Session identity changed"
        );

        // Notify outside the state lock so subscribers can read back
        let subscribers = self.subscribers.read().unwrap();
        for subscriber in subscribers.iter() {
            subscriber(identity.clone());
        }
    }
}
