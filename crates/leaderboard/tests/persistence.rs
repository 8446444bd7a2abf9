//! A host over SQLite: state survives reopening and failed commands leave no trace.

use leaderboard::core::{Slot, StorageKey, StorageValue};
use leaderboard::store::{SqliteStore, Store};
use leaderboard::{
    BroadcastSink, Host, HostConfig, LeaderboardError, LeaderboardService, Notification, Score,
    ScoreSubmitted, U256,
};
use leaderboard_testkit::multi_player_identities;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Host<SqliteStore, Vec<Notification>> {
    let store = SqliteStore::open(dir.path().join("leaderboard.db")).unwrap();
    Host::new(store, Vec::new(), HostConfig::default())
}

#[test]
fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let players = multi_player_identities(3);

    {
        let mut host = open(&dir);
        host.deploy().unwrap();
        host.submit_score(players[0], Score::from(100u64)).unwrap();
        host.submit_score(players[1], Score::from(40u64)).unwrap();
        host.submit_score(players[0], Score::from(120u64)).unwrap();
    }

    let mut host = open(&dir);
    assert!(host.is_deployed().unwrap());
    assert!(matches!(host.deploy(), Err(LeaderboardError::AlreadyDeployed)));

    assert_eq!(host.score_of(&players[0]).unwrap(), Score::from(120u64));
    assert_eq!(host.score_of(&players[1]).unwrap(), Score::from(40u64));
    assert_eq!(host.score_of(&players[2]).unwrap(), Score::zero());
    assert_eq!(host.top_score().unwrap(), Score::from(120u64));
    assert_eq!(host.total_players().unwrap(), U256::from(2u64));

    assert!(host.submit_score(players[2], Score::from(500u64)).unwrap());
    assert_eq!(host.top_score().unwrap(), Score::from(500u64));
}

#[test]
fn overflow_rolls_back_on_disk() {
    let dir = TempDir::new().unwrap();
    let players = multi_player_identities(2);

    let mut host = open(&dir);
    host.deploy().unwrap();
    host.submit_score(players[0], Score::from(7u64)).unwrap();
    host.store()
        .set(
            &StorageKey::singleton(Slot::TOTAL_PLAYERS),
            StorageValue::from_u256(U256::MAX),
        )
        .unwrap();

    let err = host.submit_score(players[1], Score::from(9u64)).unwrap_err();
    assert!(matches!(err, LeaderboardError::Overflow(_)));
    drop(host);

    let mut host = open(&dir);
    assert_eq!(host.score_of(&players[1]).unwrap(), Score::zero());
    assert_eq!(host.top_score().unwrap(), Score::from(7u64));
    assert_eq!(host.total_players().unwrap(), U256::MAX);
}

#[tokio::test]
async fn service_broadcasts_committed_scores_in_order() {
    let sink = BroadcastSink::new(16);
    let mut rx = sink.subscribe();
    let host = Host::new(SqliteStore::open_memory().unwrap(), sink, HostConfig::default());
    let service = LeaderboardService::new(host);
    service.deploy().await.unwrap();

    let players = multi_player_identities(2);
    assert!(service.submit_score(players[0], Score::from(3u64)).await.unwrap());
    assert!(!service.submit_score(players[0], Score::from(2u64)).await.unwrap());
    assert!(service.submit_score(players[1], Score::from(8u64)).await.unwrap());

    let first = ScoreSubmitted::try_from(&rx.recv().await.unwrap()).unwrap();
    let second = ScoreSubmitted::try_from(&rx.recv().await.unwrap()).unwrap();
    assert_eq!(first, ScoreSubmitted::new(players[0], Score::from(3u64)));
    assert_eq!(second, ScoreSubmitted::new(players[1], Score::from(8u64)));
    assert!(rx.try_recv().is_err());
}
