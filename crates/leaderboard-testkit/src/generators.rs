//! Proptest generators for property-based testing.

use proptest::prelude::*;

use leaderboard::{Identity, Score, U256};

/// Generate a random identity.
pub fn identity() -> impl Strategy<Value = Identity> {
    any::<[u8; 32]>().prop_map(Identity::from_bytes)
}

/// Generate a score across the whole 256-bit range.
pub fn full_range_score() -> impl Strategy<Value = Score> {
    any::<[u8; 32]>().prop_map(|bytes| U256::from_big_endian(&bytes))
}

/// Generate a small score, including zero, so that ties and repeats are common.
pub fn small_score() -> impl Strategy<Value = Score> {
    (0u64..=50).prop_map(Score::from)
}

/// Mostly small scores with the occasional full-width one.
pub fn score() -> impl Strategy<Value = Score> {
    prop_oneof![
        8 => small_score(),
        1 => full_range_score(),
        1 => Just(Score::MAX),
    ]
}

/// One `submitScore` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub player: Identity,
    pub score: Score,
}

/// A history of up to `max_len` submissions drawn from `players` distinct identities.
pub fn history(players: usize, max_len: usize) -> impl Strategy<Value = Vec<Submission>> {
    let players = players.max(1);
    prop::collection::vec(identity(), players..=players).prop_flat_map(move |pool| {
        prop::collection::vec((0..pool.len(), score()), 0..=max_len).prop_map(move |picks| {
            picks
                .into_iter()
                .map(|(i, score)| Submission {
                    player: pool[i],
                    score,
                })
                .collect()
        })
    })
}
