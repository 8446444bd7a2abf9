//! The monotonic update rule applied to every score submission.
//!
//! Steps run in a fixed order, each observing the previous one:
//!
//! 1. Read the player's current best (zero if absent).
//! 2. Remember whether that best is zero: the player counts as new.
//! 3. If the new score is strictly greater:
//!    write the player's best, raise the top score if exceeded, bump the
//!    player count for a new player, publish `ScoreSubmitted`, return `true`.
//! 4. Otherwise return `false` without touching anything.
//!
//! A genuine score of zero is indistinguishable from "never submitted". A
//! zero can never be accepted (it is not greater than the zero default), so
//! the player count only moves on a player's first non-zero score.

use leaderboard_core::{Identity, Score, U256};
use leaderboard_store::Store;

use crate::aggregates::Aggregates;
use crate::emitter::{emit_score_submitted, EventSink};
use crate::error::{LeaderboardError, Result};

/// Apply a submission. Returns whether it was committed.
pub fn submit<S, E>(
    aggregates: &Aggregates<'_, S>,
    events: &mut E,
    player: &Identity,
    new_score: Score,
) -> Result<bool>
where
    S: Store + ?Sized,
    E: EventSink + ?Sized,
{
    let current_best = aggregates.read_score(player)?;
    let is_new_player = current_best.is_zero();

    if new_score <= current_best {
        tracing::debug!(%player, %new_score, %current_best, "score not above personal best");
        return Ok(false);
    }

    aggregates.write_score(player, new_score)?;

    if new_score > aggregates.read_top()? {
        aggregates.write_top(new_score)?;
    }

    if is_new_player {
        let count = aggregates
            .read_count()?
            .checked_add(U256::one())
            .ok_or(LeaderboardError::Overflow("total players"))?;
        aggregates.write_count(count)?;
    }

    emit_score_submitted(events, player, new_score);
    tracing::info!(%player, %new_score, new_player = is_new_player, "new personal best");

    Ok(true)
}
