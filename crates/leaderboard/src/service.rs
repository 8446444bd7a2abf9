//! Async facade over a [`Host`].
//!
//! Callers on many tasks share one service. Each call runs on the blocking
//! pool while holding the host lock, so commands execute one at a time, in
//! the order the lock is acquired.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use leaderboard_core::{Identity, Score, Selector, U256};
use leaderboard_store::Store;

use crate::emitter::EventSink;
use crate::error::{LeaderboardError, Result};
use crate::host::Host;

/// A cloneable, thread-safe handle to a host.
pub struct LeaderboardService<S, E>
where
    S: Store + 'static,
    E: EventSink + Send + 'static,
{
    host: Arc<Mutex<Host<S, E>>>,
}

impl<S, E> Clone for LeaderboardService<S, E>
where
    S: Store + 'static,
    E: EventSink + Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
        }
    }
}

impl<S, E> LeaderboardService<S, E>
where
    S: Store + 'static,
    E: EventSink + Send + 'static,
{
    pub fn new(host: Host<S, E>) -> Self {
        Self {
            host: Arc::new(Mutex::new(host)),
        }
    }

    /// Run `f` with exclusive access to the host on the blocking pool.
    async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Host<S, E>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let host = Arc::clone(&self.host);
        tokio::task::spawn_blocking(move || {
            let mut host = host
                .lock()
                .map_err(|e| LeaderboardError::TaskFailed(format!("host lock poisoned: {}", e)))?;
            f(&mut *host)
        })
        .await
        .map_err(|e| LeaderboardError::TaskFailed(e.to_string()))?
    }

    pub async fn deploy(&self) -> Result<()> {
        self.run(|host| host.deploy()).await
    }

    pub async fn is_deployed(&self) -> Result<bool> {
        self.run(|host| host.is_deployed()).await
    }

    pub async fn execute(&self, caller: Identity, selector: Selector, calldata: Bytes) -> Result<Bytes> {
        self.run(move |host| host.execute(caller, selector, &calldata))
            .await
    }

    pub async fn submit_score(&self, caller: Identity, score: Score) -> Result<bool> {
        self.run(move |host| host.submit_score(caller, score)).await
    }

    pub async fn score_of(&self, player: Identity) -> Result<Score> {
        self.run(move |host| host.score_of(&player)).await
    }

    pub async fn top_score(&self) -> Result<Score> {
        self.run(|host| host.top_score()).await
    }

    pub async fn total_players(&self) -> Result<U256> {
        self.run(|host| host.total_players()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostConfig;
    use leaderboard_core::Notification;
    use leaderboard_store::MemoryStore;

    #[tokio::test]
    async fn test_service_serializes_concurrent_submissions() {
        let host = Host::new(MemoryStore::new(), Vec::<Notification>::new(), HostConfig::default());
        let service = LeaderboardService::new(host);
        service.deploy().await.unwrap();

        let mut handles = Vec::new();
        for i in 1..=16u8 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .submit_score(Identity::from_bytes([i; 32]), Score::from(i as u64 * 10))
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().unwrap());
        }

        assert_eq!(service.total_players().await.unwrap(), U256::from(16u64));
        assert_eq!(service.top_score().await.unwrap(), Score::from(160u64));
        assert_eq!(
            service.score_of(Identity::from_bytes([3; 32])).await.unwrap(),
            Score::from(30u64)
        );
    }
}
