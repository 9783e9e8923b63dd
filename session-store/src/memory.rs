// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;

use async_trait::async_trait;
use game::Session;
use parking_lot::Mutex;

use crate::lock_key;
use crate::Lease;
use crate::SessionStore;
use crate::StoreConfig;
use crate::StoreError;

struct Expiring<T> {
    value: T,
    expires_at: Instant,
}

impl<T> Expiring<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self { value, expires_at: Instant::now() + ttl }
    }

    fn is_alive(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Process-local store with the same expiry and locking rules as the Redis one.
pub struct MemorySessionStore {
    config: StoreConfig,
    sessions: Mutex<HashMap<String, Expiring<Session>>>,
    locks: Mutex<HashMap<String, Expiring<String>>>,
}

impl MemorySessionStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config, sessions: Mutex::new(HashMap::new()), locks: Mutex::new(HashMap::new()) }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, session: &Session) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock();
        sessions.retain(|_, entry| entry.is_alive());
        if sessions.contains_key(session.session_id()) {
            return Err(StoreError::SessionAlreadyExists(session.session_id().to_string()));
        }
        sessions.insert(
            session.session_id().to_string(),
            Expiring::new(session.clone(), self.config.session_lifetime),
        );
        Ok(())
    }

    async fn store(&self, session: &Session) -> Result<(), StoreError> {
        self.sessions.lock().insert(
            session.session_id().to_string(),
            Expiring::new(session.clone(), self.config.session_lifetime),
        );
        Ok(())
    }

    async fn restore(&self, session_id: &str) -> Result<Session, StoreError> {
        let mut sessions = self.sessions.lock();
        match sessions.get(session_id) {
            Some(entry) if entry.is_alive() => Ok(entry.value.clone()),
            Some(_) => {
                sessions.remove(session_id);
                Err(StoreError::SessionNotFound(session_id.to_string()))
            }
            None => Err(StoreError::SessionNotFound(session_id.to_string())),
        }
    }

    async fn lock(&self, session_id: &str) -> Result<Lease, StoreError> {
        let mut locks = self.locks.lock();
        locks.retain(|_, entry| entry.is_alive());
        let key = lock_key(session_id);
        if locks.contains_key(&key) {
            return Err(StoreError::CannotStartTransaction(session_id.to_string()));
        }
        let lease = Lease::new(session_id);
        locks.insert(key, Expiring::new(lease.token.clone(), self.config.lock_timeout));
        Ok(lease)
    }

    async fn unlock(&self, lease: Lease) -> Result<(), StoreError> {
        let mut locks = self.locks.lock();
        let key = lease.key();
        match locks.get(&key) {
            Some(entry) if entry.is_alive() && entry.value == lease.token => {
                locks.remove(&key);
                Ok(())
            }
            _ => Err(StoreError::TransactionExpired(lease.session_id)),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(vec!["a".into(), "b".into()])
    }

    #[tokio::test]
    async fn create_then_restore() {
        let store = MemorySessionStore::new(StoreConfig::default());
        let session = session();
        store.create(&session).await.unwrap();
        assert_eq!(store.restore(session.session_id()).await.unwrap(), session);
    }

    #[tokio::test]
    async fn create_refuses_existing_id() {
        let store = MemorySessionStore::new(StoreConfig::default());
        let session = session();
        store.create(&session).await.unwrap();
        assert!(matches!(
            store.create(&session).await,
            Err(StoreError::SessionAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn restore_unknown_session() {
        let store = MemorySessionStore::new(StoreConfig::default());
        assert!(matches!(store.restore("nope").await, Err(StoreError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn sessions_expire() {
        let store = MemorySessionStore::new(StoreConfig {
            session_lifetime: Duration::from_millis(10),
            ..StoreConfig::default()
        });
        let session = session();
        store.create(&session).await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(matches!(
            store.restore(session.session_id()).await,
            Err(StoreError::SessionNotFound(_))
        ));
        // an expired id can be created again
        store.create(&session).await.unwrap();
    }

    #[tokio::test]
    async fn store_overwrites() {
        let store = MemorySessionStore::new(StoreConfig::default());
        let mut session = session();
        store.create(&session).await.unwrap();
        session.choose("a", game::Hand::Paper).unwrap();
        store.store(&session).await.unwrap();
        assert_eq!(store.restore(session.session_id()).await.unwrap().choices().len(), 1);
    }

    #[tokio::test]
    async fn lock_is_exclusive_until_released() {
        let store = MemorySessionStore::new(StoreConfig::default());
        let lease = store.lock("s").await.unwrap();
        assert!(matches!(store.lock("s").await, Err(StoreError::CannotStartTransaction(_))));
        // other sessions are unaffected
        let other = store.lock("t").await.unwrap();
        store.unlock(lease).await.unwrap();
        store.unlock(other).await.unwrap();
        assert!(store.lock("s").await.is_ok());
    }

    #[tokio::test]
    async fn expired_lock_can_be_taken_over() {
        let store = MemorySessionStore::new(StoreConfig {
            lock_timeout: Duration::from_millis(10),
            ..StoreConfig::default()
        });
        let stale = store.lock("s").await.unwrap();
        tokio::time::sleep(Duration::from_millis(30)).await;
        let fresh = store.lock("s").await.unwrap();
        assert!(matches!(store.unlock(stale).await, Err(StoreError::TransactionExpired(_))));
        store.unlock(fresh).await.unwrap();
    }

    #[tokio::test]
    async fn expired_entries_are_pruned() {
        let store = MemorySessionStore::new(StoreConfig {
            session_lifetime: Duration::from_millis(5),
            lock_timeout: Duration::from_millis(5),
        });
        for i in 0..100 {
            store.create(&session()).await.unwrap();
            let _abandoned = store.lock(&format!("s{i}")).await.unwrap();
        }
        assert_eq!(store.sessions.lock().len(), 100);
        assert_eq!(store.locks.lock().len(), 100);

        tokio::time::sleep(Duration::from_millis(30)).await;
        store.create(&session()).await.unwrap();
        let _lease = store.lock("fresh").await.unwrap();
        assert_eq!(store.sessions.lock().len(), 1);
        assert_eq!(store.locks.lock().len(), 1);
    }
}
