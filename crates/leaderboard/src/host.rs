//! The host adapter: runs commands against a store with all-or-nothing effects.
//!
//! The host supplies what the contract treats as ambient: the authenticated
//! caller, the durable store, the notification channel, and the guarantee
//! that the lifecycle hook runs once before anything else.

use bytes::Bytes;
use leaderboard_core::{
    BytesWriter, Calldata, Identity, Notification, Score, Selector, Slot, StorageKey, StorageValue,
    U256,
};
use leaderboard_store::{Overlay, Store};

use crate::aggregates::Aggregates;
use crate::emitter::EventSink;
use crate::error::{LeaderboardError, Result};
use crate::lifecycle;
use crate::router::{CallContext, Command, Router};

/// Configuration for the host.
#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    /// Reject arguments followed by unread bytes.
    pub strict_calldata: bool,
}

/// Key of the marker written by [`Host::deploy`].
fn deployment_marker() -> StorageKey {
    StorageKey::singleton(Slot::HOST_METADATA)
}

/// Executes commands one at a time against a store.
///
/// Every command runs against an [`Overlay`]. If it succeeds, its writes are
/// applied in one atomic batch and only then are its notifications forwarded
/// to the sink. If it fails, both are discarded.
pub struct Host<S: Store, E: EventSink> {
    store: S,
    sink: E,
    router: Router,
}

impl<S: Store, E: EventSink> Host<S, E> {
    pub fn new(store: S, sink: E, config: HostConfig) -> Self {
        Self {
            store,
            sink,
            router: Router::new(config.strict_calldata),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    pub fn into_parts(self) -> (S, E) {
        (self.store, self.sink)
    }

    pub fn is_deployed(&self) -> Result<bool> {
        Ok(self.store.get(&deployment_marker())?.is_some())
    }

    /// Run the lifecycle hook. Fails with `AlreadyDeployed` on a second call.
    pub fn deploy(&mut self) -> Result<()> {
        if self.is_deployed()? {
            return Err(LeaderboardError::AlreadyDeployed);
        }

        let overlay = Overlay::new(&self.store);
        lifecycle::on_deploy(&Aggregates::new(&overlay))?;
        overlay.set(&deployment_marker(), StorageValue::from_u256(U256::one()))?;
        overlay.commit()?;
        Ok(())
    }

    /// Execute one command on behalf of `caller`.
    pub fn execute(&mut self, caller: Identity, selector: Selector, calldata: &[u8]) -> Result<Bytes> {
        if !self.is_deployed()? {
            return Err(LeaderboardError::NotDeployed);
        }

        let ctx = CallContext::new(caller);
        let overlay = Overlay::new(&self.store);
        let mut pending: Vec<Notification> = Vec::new();

        let output = match self
            .router
            .dispatch(&overlay, &mut pending, &ctx, selector, calldata)
        {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(
                    %selector,
                    %caller,
                    error = %e,
                    "command aborted; discarding buffered writes"
                );
                return Err(e);
            }
        };

        let written = overlay.commit()?;
        tracing::debug!(%selector, written, notifications = pending.len(), "command committed");

        for notification in pending {
            self.sink.publish(notification);
        }

        Ok(output)
    }

    /// Submit `score` as `caller`. Returns whether it became a new personal best.
    pub fn submit_score(&mut self, caller: Identity, score: Score) -> Result<bool> {
        let mut args = BytesWriter::new();
        args.write_u256(score);
        let output = self.execute(caller, Command::SubmitScore.selector(), &args.into_bytes())?;
        Ok(Calldata::new(&output).read_bool()?)
    }

    /// A player's best score; zero if they never submitted.
    pub fn score_of(&mut self, player: &Identity) -> Result<Score> {
        let mut args = BytesWriter::new();
        args.write_identity(player);
        self.query(Command::GetScore, &args.into_bytes())
    }

    pub fn top_score(&mut self) -> Result<Score> {
        self.query(Command::GetTopScore, &[])
    }

    pub fn total_players(&mut self) -> Result<U256> {
        self.query(Command::GetTotalPlayers, &[])
    }

    fn query(&mut self, command: Command, args: &[u8]) -> Result<U256> {
        let output = self.execute(Identity::ZERO, command.selector(), args)?;
        Ok(Calldata::new(&output).read_u256()?)
    }
}
