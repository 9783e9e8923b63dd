// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use async_trait::async_trait;
use game::Session;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use url::Url;

use crate::Lease;
use crate::SessionStore;
use crate::StoreConfig;
use crate::StoreError;

// Deletes the lock only while it still holds our token.
const RELEASE_LOCK_SCRIPT: &str = r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
else
    return 0
end
"#;

#[derive(Clone, Debug)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self { host: "localhost".to_string(), port: 6379, password: None }
    }
}

impl RedisConfig {
    pub fn url(&self) -> Result<Url, StoreError> {
        let mut url = Url::parse(&format!("redis://{}:{}/", self.host, self.port))?;
        if let Some(password) = &self.password {
            // Fails only for urls without a host, which the format above rules out.
            let _ = url.set_password(Some(password));
        }
        Ok(url)
    }
}

#[derive(Clone)]
pub struct RedisSessionStore {
    client: redis::Client,
    config: StoreConfig,
}

impl RedisSessionStore {
    pub fn new(redis: &RedisConfig, config: StoreConfig) -> Result<Self, StoreError> {
        let client = redis::Client::open(redis.url()?.as_str())?;
        tracing::info!(target: "session_store", "Using redis at {}:{}", redis.host, redis.port);
        Ok(Self { client, config })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, session: &Session) -> Result<(), StoreError> {
        let payload = bincode::serialize(session)?;
        let mut conn = self.connection().await?;
        let reply: Option<String> = redis::cmd("SET")
            .arg(session.session_id())
            .arg(payload)
            .arg("NX")
            .arg("EX")
            .arg(self.config.session_lifetime.as_secs())
            .query_async(&mut conn)
            .await?;
        match reply {
            Some(_) => Ok(()),
            None => Err(StoreError::SessionAlreadyExists(session.session_id().to_string())),
        }
    }

    async fn store(&self, session: &Session) -> Result<(), StoreError> {
        let payload = bincode::serialize(session)?;
        let mut conn = self.connection().await?;
        let _: () = conn
            .set_ex(session.session_id(), payload, self.config.session_lifetime.as_secs())
            .await?;
        Ok(())
    }

    async fn restore(&self, session_id: &str) -> Result<Session, StoreError> {
        let mut conn = self.connection().await?;
        let payload: Option<Vec<u8>> = conn.get(session_id).await?;
        let Some(payload) = payload else {
            return Err(StoreError::SessionNotFound(session_id.to_string()));
        };
        Ok(bincode::deserialize(&payload)?)
    }

    async fn lock(&self, session_id: &str) -> Result<Lease, StoreError> {
        let lease = Lease::new(session_id);
        let mut conn = self.connection().await?;
        let reply: Option<String> = redis::cmd("SET")
            .arg(lease.key())
            .arg(&lease.token)
            .arg("NX")
            .arg("PX")
            .arg(self.config.lock_timeout.as_millis() as u64)
            .query_async(&mut conn)
            .await?;
        match reply {
            Some(_) => Ok(lease),
            None => Err(StoreError::CannotStartTransaction(session_id.to_string())),
        }
    }

    async fn unlock(&self, lease: Lease) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let released: i64 = redis::Script::new(RELEASE_LOCK_SCRIPT)
            .key(lease.key())
            .arg(&lease.token)
            .invoke_async(&mut conn)
            .await?;
        if released == 0 {
            return Err(StoreError::TransactionExpired(lease.session_id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use game::Hand;

    use super::*;

    #[test]
    fn url_without_password() {
        let config = RedisConfig { host: "cache".into(), port: 6380, password: None };
        assert_eq!(config.url().unwrap().as_str(), "redis://cache:6380/");
    }

    #[test]
    fn url_with_password_is_escaped() {
        let config = RedisConfig { password: Some("p@ss word".into()), ..RedisConfig::default() };
        let url = config.url().unwrap();
        assert_eq!(url.password(), Some("p%40ss%20word"));
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(6379));
    }

    // Needs a redis server on localhost:6379.
    #[tokio::test]
    #[ignore]
    async fn redis_round_trip() {
        let store = RedisSessionStore::new(&RedisConfig::default(), StoreConfig::default()).unwrap();
        store.ping().await.unwrap();

        let mut session = Session::new(vec!["a".into(), "b".into()]);
        store.create(&session).await.unwrap();
        assert!(matches!(store.create(&session).await, Err(StoreError::SessionAlreadyExists(_))));

        let lease = store.lock(session.session_id()).await.unwrap();
        assert!(matches!(
            store.lock(session.session_id()).await,
            Err(StoreError::CannotStartTransaction(_))
        ));
        session.choose("a", Hand::Rock).unwrap();
        store.store(&session).await.unwrap();
        store.unlock(lease).await.unwrap();

        assert_eq!(store.restore(session.session_id()).await.unwrap(), session);
    }
}
