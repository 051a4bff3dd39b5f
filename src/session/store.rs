//! In-memory session storage.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

/// State carried for one visitor.
#[derive(Debug, Clone, Default)]
struct SessionData {
    /// Cart contents: product id → quantity.
    cart: HashMap<u64, u32>,
}

/// Store of all live sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, SessionData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a session handle for a request.
    ///
    /// A known id reuses the existing session; anything else starts a
    /// fresh one. The second return value is true when a new session was
    /// created and a cookie should be set.
    pub fn open(&self, id: Option<Uuid>) -> (Session, bool) {
        if let Some(id) = id {
            if self.sessions.contains_key(&id) {
                return (
                    Session {
                        id,
                        sessions: Arc::clone(&self.sessions),
                    },
                    false,
                );
            }
        }

        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionData::default());
        (
            Session {
                id,
                sessions: Arc::clone(&self.sessions),
            },
            true,
        )
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Handle to one visitor's session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    sessions: Arc<DashMap<Uuid, SessionData>>,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Snapshot of the cart: product id → quantity.
    pub fn cart(&self) -> HashMap<u64, u32> {
        self.sessions
            .get(&self.id)
            .map(|data| data.cart.clone())
            .unwrap_or_default()
    }

    /// Add one unit of a product to the cart.
    pub fn add_to_cart(&self, product_id: u64) {
        let mut entry = self.sessions.entry(self.id).or_default();
        *entry.cart.entry(product_id).or_insert(0) += 1;
    }

    /// Drop a product from the cart entirely.
    pub fn remove_from_cart(&self, product_id: u64) {
        if let Some(mut entry) = self.sessions.get_mut(&self.id) {
            entry.cart.remove(&product_id);
        }
    }

    /// Total number of units across the cart.
    pub fn cart_count(&self) -> u32 {
        self.sessions
            .get(&self.id)
            .map(|data| data.cart.values().sum())
            .unwrap_or(0)
    }

    pub fn clear_cart(&self) {
        if let Some(mut entry) = self.sessions.get_mut(&self.id) {
            entry.cart.clear();
        }
    }
}
