//! One-time initialization run by the host before the first command.

use leaderboard_core::{Score, U256};
use leaderboard_store::Store;

use crate::aggregates::Aggregates;
use crate::error::Result;

/// Zero the singleton aggregates and log the deployment.
///
/// The host guarantees this runs exactly once per storage instance.
pub fn on_deploy<S: Store + ?Sized>(aggregates: &Aggregates<'_, S>) -> Result<()> {
    aggregates.write_top(Score::zero())?;
    aggregates.write_count(U256::zero())?;
    tracing::info!("leaderboard deployed");
    Ok(())
}
