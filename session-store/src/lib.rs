// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use game::Session;

mod errors;
mod memory;
mod redis_store;

pub use errors::StoreError;
pub use memory::MemorySessionStore;
pub use redis_store::RedisConfig;
pub use redis_store::RedisSessionStore;

pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(60 * 5);

const LOCK_KEY_PREFIX: &str = "SESSION_STORE_LOCK";

#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Sessions vanish this long after the last write.
    pub session_lifetime: Duration,
    /// A lock that is never released expires after this long.
    pub lock_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { session_lifetime: DEFAULT_SESSION_LIFETIME, lock_timeout: DEFAULT_LOCK_TIMEOUT }
    }
}

/// Proof of holding the per-session lock.
#[derive(Debug)]
pub struct Lease {
    session_id: String,
    token: String,
}

impl Lease {
    fn new(session_id: &str) -> Self {
        Self { session_id: session_id.to_string(), token: uuid::Uuid::new_v4().to_string() }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn key(&self) -> String {
        lock_key(&self.session_id)
    }
}

pub(crate) fn lock_key(session_id: &str) -> String {
    format!("{LOCK_KEY_PREFIX}:{session_id}")
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Inserts a new session, failing if the id is already taken.
    async fn create(&self, session: &Session) -> Result<(), StoreError>;

    /// Overwrites a session and refreshes its lifetime.
    async fn store(&self, session: &Session) -> Result<(), StoreError>;

    async fn restore(&self, session_id: &str) -> Result<Session, StoreError>;

    /// Takes the session lock without waiting.
    async fn lock(&self, session_id: &str) -> Result<Lease, StoreError>;

    /// Fails with [`StoreError::TransactionExpired`] when the lease no longer owns the lock.
    async fn unlock(&self, lease: Lease) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Holds a lease until it is released explicitly or dropped.
///
/// Dropping an unreleased guard (the request future was cancelled) hands the release to a
/// background task.
struct LeaseGuard<S: SessionStore + ?Sized + 'static> {
    store: Arc<S>,
    lease: Option<Lease>,
}

impl<S: SessionStore + ?Sized + 'static> LeaseGuard<S> {
    async fn release(mut self) -> Result<(), StoreError> {
        match self.lease.take() {
            Some(lease) => self.store.unlock(lease).await,
            None => Ok(()),
        }
    }
}

impl<S: SessionStore + ?Sized + 'static> Drop for LeaseGuard<S> {
    fn drop(&mut self) {
        let Some(lease) = self.lease.take() else {
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(
                target: "session_store",
                "No runtime to release lock of {}, it expires on timeout",
                lease.session_id()
            );
            return;
        };
        let store = self.store.clone();
        runtime.spawn(async move {
            let session_id = lease.session_id().to_string();
            if let Err(err) = store.unlock(lease).await {
                tracing::warn!(
                    target: "session_store",
                    "Failed to release lock of {session_id} after cancellation: {err}"
                );
            }
        });
    }
}

/// Runs `f` while holding the lock of `session_id`.
///
/// The lock is released whatever `f` returns, and also when the returned future is dropped
/// before completion. An error from `f` takes precedence over a failed release.
pub async fn with_lock<S, F, Fut, T, E>(store: &Arc<S>, session_id: &str, f: F) -> Result<T, E>
where
    S: SessionStore + ?Sized + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<StoreError>,
{
    let lease = store.lock(session_id).await?;
    let guard = LeaseGuard { store: store.clone(), lease: Some(lease) };
    let outcome = f().await;
    let released = guard.release().await;
    if let Err(err) = &released {
        tracing::warn!(target: "session_store", "Failed to release lock of {session_id}: {err}");
    }
    let value = outcome?;
    released?;
    Ok(value)
}
