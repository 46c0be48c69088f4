use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::Profile;

/// Errors that can occur with session store operations
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Session key missing: {0}")]
    Missing(String),
}

/// Per-user key-value store
///
/// Plain values go through two tiers: a moka L1 in front of Redis. L1 is
/// per instance, so a value written elsewhere can lag here until the L1
/// entry expires. Connection lists skip L1 and go straight to Redis.
pub struct SessionStore {
    redis: Arc<tokio::sync::Mutex<ConnectionManager>>,
    l1_cache: moka::future::Cache<String, Vec<u8>>,
    ttl_secs: u64,
}

impl SessionStore {
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, SessionError> {
        let client = redis::Client::open(redis_url)?;
        let redis = redis::aio::ConnectionManager::new(client).await?;

        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Ok(Self {
            redis: Arc::new(tokio::sync::Mutex::new(redis)),
            l1_cache,
            ttl_secs,
        })
    }

    /// Get a value (L1 first, then Redis)
    pub async fn get<T>(&self, key: &str) -> Result<T, SessionError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.l1_cache.get(key).await {
            tracing::trace!("L1 session hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let mut conn = self.redis.lock().await;
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        if let Some(json) = value {
            tracing::trace!("Redis session hit: {}", key);
            self.l1_cache
                .insert(key.to_string(), json.as_bytes().to_vec())
                .await;
            return Ok(serde_json::from_str(&json)?);
        }

        tracing::trace!("Session miss: {}", key);
        Err(SessionError::Missing(key.to_string()))
    }

    /// Set a value in both tiers, refreshing the TTL
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), SessionError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;

        self.l1_cache
            .insert(key.to_string(), json.as_bytes().to_vec())
            .await;

        let mut conn = self.redis.lock().await;
        let _: () = redis::cmd("SETEX")
            .arg(key)
            .arg(self.ttl_secs)
            .arg(json)
            .query_async(&mut *conn)
            .await?;

        tracing::trace!("Session set: {}", key);
        Ok(())
    }

    /// Remove a value from both tiers
    pub async fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.l1_cache.invalidate(key).await;

        let mut conn = self.redis.lock().await;
        let _: () = redis::cmd("DEL")
            .arg(key)
            .query_async(&mut *conn)
            .await?;
        Ok(())
    }

    /// Connected profiles for a user, empty when none are stored
    ///
    /// Connections live in a Redis hash keyed by target email and bypass L1,
    /// so every instance sees the same list. Ordered by target email.
    pub async fn connections(&self, email: &str) -> Result<Vec<Profile>, SessionError> {
        let key = SessionKey::connections(email);

        let mut conn = self.redis.lock().await;
        let values: Vec<String> = redis::cmd("HVALS")
            .arg(&key)
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        decode_connections(values)
    }

    /// Store a connection; returns the updated list
    ///
    /// `HSETNX` makes the add atomic, so concurrent adds for one user never
    /// overwrite each other and a repeated target keeps its first snapshot.
    pub async fn add_connection(
        &self,
        email: &str,
        target: Profile,
    ) -> Result<Vec<Profile>, SessionError> {
        let key = SessionKey::connections(email);
        let json = serde_json::to_string(&target)?;

        let mut conn = self.redis.lock().await;
        let added: bool = redis::cmd("HSETNX")
            .arg(&key)
            .arg(&target.email)
            .arg(json)
            .query_async(&mut *conn)
            .await?;
        let _: () = redis::cmd("EXPIRE")
            .arg(&key)
            .arg(self.ttl_secs)
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        if added {
            tracing::debug!("User {} connected with {}", email, target.email);
        }

        self.connections(email).await
    }

    /// Drop a connection; returns whether one was removed and the updated list
    ///
    /// Redis deletes the hash once its last field is gone.
    pub async fn remove_connection(
        &self,
        email: &str,
        target_email: &str,
    ) -> Result<(bool, Vec<Profile>), SessionError> {
        let key = SessionKey::connections(email);

        let mut conn = self.redis.lock().await;
        let removed: i64 = redis::cmd("HDEL")
            .arg(&key)
            .arg(target_email)
            .query_async(&mut *conn)
            .await?;
        drop(conn);

        Ok((removed > 0, self.connections(email).await?))
    }
}

/// Decode stored connection snapshots, ordered by target email
pub fn decode_connections(values: Vec<String>) -> Result<Vec<Profile>, SessionError> {
    let mut list = values
        .iter()
        .map(|json| serde_json::from_str::<Profile>(json))
        .collect::<Result<Vec<_>, _>>()?;

    list.sort_by(|a, b| a.email.cmp(&b.email));
    Ok(list)
}

/// Session key builder
pub struct SessionKey;

impl SessionKey {
    /// Build a key for a user's connected profiles
    pub fn connections(email: &str) -> String {
        format!("connections:{}", email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_builder() {
        assert_eq!(SessionKey::connections("a@mail.com"), "connections:a@mail.com");
    }

    #[test]
    fn test_decode_connections_orders_by_email() {
        let values = vec![
            serde_json::to_string(&Profile::new("c@mail.com", "C")).unwrap(),
            serde_json::to_string(&Profile::new("b@mail.com", "B")).unwrap(),
        ];

        let list = decode_connections(values).unwrap();

        assert_eq!(list[0].email, "b@mail.com");
        assert_eq!(list[1].email, "c@mail.com");
    }

    #[test]
    fn test_decode_connections_rejects_corrupt_entry() {
        let values = vec!["{not json".to_string()];

        assert!(matches!(
            decode_connections(values),
            Err(SessionError::SerializationError(_))
        ));
    }

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_session_set_get_remove() {
        let store = SessionStore::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create session store");

        let key = "test_session_key";
        store.set(key, &vec!["a", "b"]).await.unwrap();
        let result: Vec<String> = store.get(key).await.unwrap();
        assert_eq!(result, vec!["a", "b"]);

        store.remove(key).await.unwrap();
        assert!(matches!(
            store.get::<Vec<String>>(key).await,
            Err(SessionError::Missing(_))
        ));
    }

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_connection_round_trip() {
        let store = SessionStore::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create session store");

        let email = "session-test@skillx.local";
        store.remove(&SessionKey::connections(email)).await.unwrap();

        store.add_connection(email, Profile::new("t@mail.com", "T")).await.unwrap();
        assert_eq!(store.connections(email).await.unwrap().len(), 1);

        let (removed, remaining) = store.remove_connection(email, "t@mail.com").await.unwrap();
        assert!(removed);
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_concurrent_adds_both_survive() {
        let store = SessionStore::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create session store");

        let email = "concurrent-test@skillx.local";
        store.remove(&SessionKey::connections(email)).await.unwrap();

        let (first, second) = tokio::join!(
            store.add_connection(email, Profile::new("x@mail.com", "X")),
            store.add_connection(email, Profile::new("y@mail.com", "Y")),
        );
        first.unwrap();
        second.unwrap();

        let emails: Vec<String> = store
            .connections(email)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.email)
            .collect();
        assert_eq!(emails, vec!["x@mail.com", "y@mail.com"]);

        // A repeated target keeps the first snapshot
        let list = store
            .add_connection(email, Profile::new("x@mail.com", "X again"))
            .await
            .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "X");

        store.remove(&SessionKey::connections(email)).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_removal_visible_to_other_store() {
        let first = SessionStore::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create session store");
        let second = SessionStore::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create session store");

        let email = "two-instances@skillx.local";
        first.remove(&SessionKey::connections(email)).await.unwrap();

        first.add_connection(email, Profile::new("t@mail.com", "T")).await.unwrap();
        assert_eq!(second.connections(email).await.unwrap().len(), 1);

        let (removed, _) = second.remove_connection(email, "t@mail.com").await.unwrap();
        assert!(removed);
        assert!(first.connections(email).await.unwrap().is_empty());
    }
}
