//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use leaderboard::{Host, HostConfig, Identity, Notification, ScoreSubmitted};
use leaderboard_store::MemoryStore;
use rand::RngCore;

/// A deployed host over an in-memory store that records every notification.
pub struct TestFixture {
    pub host: Host<MemoryStore, Vec<Notification>>,
}

impl TestFixture {
    /// Create and deploy a fixture with default configuration.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Create and deploy a fixture with the given configuration.
    pub fn with_config(config: HostConfig) -> Self {
        let mut host = Host::new(MemoryStore::new(), Vec::new(), config);
        host.deploy().expect("in-memory deploy cannot fail");
        Self { host }
    }

    /// A deterministic identity for player number `n`.
    pub fn player(&self, n: u8) -> Identity {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x50;
        bytes[31] = n;
        Identity::from_bytes(bytes)
    }

    /// Decoded notifications published so far, in order.
    pub fn events(&self) -> Vec<ScoreSubmitted> {
        self.host
            .sink()
            .iter()
            .map(|n| ScoreSubmitted::try_from(n).expect("host only publishes ScoreSubmitted"))
            .collect()
    }

    /// Drop recorded notifications.
    pub fn clear_events(&mut self) {
        self.host.sink_mut().clear();
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Random distinct identities for multi-player tests.
pub fn multi_player_identities(count: usize) -> Vec<Identity> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            Identity::from_bytes(bytes)
        })
        .collect()
}
