//! Command routing.
//!
//! Maps a 4-byte selector to one of four handlers, decodes its arguments,
//! and encodes the result.
//!
//! | Signature | Arguments | Result |
//! |---|---|---|
//! | `submitScore(uint256)` | 32-byte score | 1-byte bool |
//! | `getScore(address)` | 32-byte identity | 32-byte score |
//! | `getTopScore()` | none | 32-byte score |
//! | `getTotalPlayers()` | none | 32-byte count |
//!
//! Any other selector returns an empty result and touches no storage.

use std::sync::OnceLock;

use bytes::Bytes;
use leaderboard_core::{BytesWriter, Calldata, Identity, Selector, U256, WORD_LEN};
use leaderboard_store::Store;

use crate::aggregates::Aggregates;
use crate::emitter::EventSink;
use crate::error::Result;
use crate::rule;

/// The commands the router understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    SubmitScore,
    GetScore,
    GetTopScore,
    GetTotalPlayers,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::SubmitScore,
        Command::GetScore,
        Command::GetTopScore,
        Command::GetTotalPlayers,
    ];

    /// The human-readable method signature the selector is derived from.
    pub const fn signature(&self) -> &'static str {
        match self {
            Command::SubmitScore => "submitScore(uint256)",
            Command::GetScore => "getScore(address)",
            Command::GetTopScore => "getTopScore()",
            Command::GetTotalPlayers => "getTotalPlayers()",
        }
    }

    pub fn selector(&self) -> Selector {
        Selector::from_signature(self.signature())
    }

    /// Exact-match lookup. `None` for unknown selectors.
    pub fn from_selector(selector: Selector) -> Option<Self> {
        selector_table()
            .iter()
            .find(|(known, _)| *known == selector)
            .map(|(_, command)| *command)
    }
}

fn selector_table() -> &'static [(Selector, Command); 4] {
    static TABLE: OnceLock<[(Selector, Command); 4]> = OnceLock::new();
    TABLE.get_or_init(|| Command::ALL.map(|c| (Selector::from_signature(c.signature()), c)))
}

/// Per-command context injected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    /// The authenticated submitter. Never read from calldata.
    pub caller: Identity,
}

impl CallContext {
    pub fn new(caller: Identity) -> Self {
        Self { caller }
    }
}

/// Stateless dispatcher. Holds only decoding options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Router {
    strict_calldata: bool,
}

impl Router {
    /// With `strict_calldata`, arguments followed by extra bytes are malformed.
    pub fn new(strict_calldata: bool) -> Self {
        Self { strict_calldata }
    }

    /// Route one command against `store`, publishing notifications to `events`.
    pub fn dispatch<S, E>(
        &self,
        store: &S,
        events: &mut E,
        ctx: &CallContext,
        selector: Selector,
        calldata: &[u8],
    ) -> Result<Bytes>
    where
        S: Store + ?Sized,
        E: EventSink + ?Sized,
    {
        let Some(command) = Command::from_selector(selector) else {
            tracing::debug!(%selector, "unrecognized selector; returning empty result");
            return Ok(Bytes::new());
        };
        tracing::debug!(?command, caller = %ctx.caller, "dispatching");

        let aggregates = Aggregates::new(store);
        let mut args = Calldata::new(calldata);

        let output = match command {
            Command::SubmitScore => {
                let new_score = args.read_u256()?;
                self.finish(args)?;
                let committed = rule::submit(&aggregates, events, &ctx.caller, new_score)?;
                let mut writer = BytesWriter::with_capacity(1);
                writer.write_bool(committed);
                writer
            }
            Command::GetScore => {
                let player = args.read_identity()?;
                self.finish(args)?;
                word(aggregates.read_score(&player)?)
            }
            Command::GetTopScore => {
                self.finish(args)?;
                word(aggregates.read_top()?)
            }
            Command::GetTotalPlayers => {
                self.finish(args)?;
                word(aggregates.read_count()?)
            }
        };

        Ok(output.into_bytes())
    }

    fn finish(&self, args: Calldata<'_>) -> Result<()> {
        if self.strict_calldata {
            args.finish()?;
        }
        Ok(())
    }
}

fn word(value: U256) -> BytesWriter {
    let mut writer = BytesWriter::with_capacity(WORD_LEN);
    writer.write_u256(value);
    writer
}
