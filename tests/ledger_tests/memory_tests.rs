//! Tests for MemoryLedger
//!
//! These tests verify:
//! - Point lookups and NotFound
//! - Win counting and monotonicity
//! - League ordering and contents
//! - No lost updates under concurrent wins

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use scoreledger::{Ledger, LedgerError, MemoryLedger, ScoreRecord};

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_get_score_unknown_player_on_empty_ledger() {
    let ledger = MemoryLedger::new();

    let err = ledger.get_player_score("Nobody").unwrap_err();

    assert!(matches!(err, LedgerError::NotFound(ref name) if name == "Nobody"));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn test_get_score_unknown_player_on_populated_ledger() {
    let ledger = MemoryLedger::new();
    ledger.record_win("ExistingPlayer").unwrap();

    assert!(ledger.get_player_score("Someone").unwrap_err().is_not_found());
}

#[test]
fn test_names_are_case_sensitive() {
    let ledger = MemoryLedger::new();
    ledger.record_win("alice").unwrap();

    assert!(ledger.get_player_score("Alice").unwrap_err().is_not_found());
    assert_eq!(ledger.get_player_score("alice").unwrap(), 1);
}

// =============================================================================
// Win Tests
// =============================================================================

#[test]
fn test_first_win_creates_player_at_one() {
    let ledger = MemoryLedger::new();

    let record = ledger.record_win("NewPlayer").unwrap();

    assert_eq!(record, ScoreRecord::new("NewPlayer", 1));
    assert_eq!(ledger.get_player_score("NewPlayer").unwrap(), 1);
}

#[test]
fn test_n_wins_give_score_n() {
    let ledger = MemoryLedger::new();

    for expected in 1..=25u64 {
        let record = ledger.record_win("Pepper").unwrap();
        assert_eq!(record.score, expected);
    }

    assert_eq!(ledger.get_player_score("Pepper").unwrap(), 25);
}

#[test]
fn test_wins_for_different_players_are_independent() {
    let ledger = MemoryLedger::new();

    ledger.record_win("PlayerA").unwrap();
    ledger.record_win("PlayerB").unwrap();
    ledger.record_win("PlayerA").unwrap();

    assert_eq!(ledger.get_player_score("PlayerA").unwrap(), 2);
    assert_eq!(ledger.get_player_score("PlayerB").unwrap(), 1);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_with_scores_skips_zero_entries() {
    let ledger = MemoryLedger::with_scores([("Ghost", 0), ("Real", 4)]);

    assert_eq!(ledger.len(), 1);
    assert!(ledger.get_player_score("Ghost").unwrap_err().is_not_found());
    assert_eq!(ledger.get_player_score("Real").unwrap(), 4);
}

#[test]
fn test_win_at_max_score_fails_without_change() {
    let ledger = MemoryLedger::with_scores([("Max", u64::MAX)]);

    let err = ledger.record_win("Max").unwrap_err();

    assert!(matches!(
        err,
        LedgerError::DataSourceUnavailable { operation: "record_win", ref cause, .. }
            if cause == "score overflow"
    ));
    assert_eq!(ledger.get_player_score("Max").unwrap(), u64::MAX);
}

// =============================================================================
// League Tests
// =============================================================================

#[test]
fn test_league_empty() {
    let ledger = MemoryLedger::new();

    assert!(ledger.is_empty());
    assert_eq!(ledger.get_league().unwrap(), Vec::<ScoreRecord>::new());
}

#[test]
fn test_league_bob_then_alice() {
    let ledger = MemoryLedger::new();
    for _ in 0..3 {
        ledger.record_win("Bob").unwrap();
    }
    ledger.record_win("Alice").unwrap();

    assert_eq!(
        ledger.get_league().unwrap(),
        vec![ScoreRecord::new("Bob", 3), ScoreRecord::new("Alice", 1)]
    );
}

#[test]
fn test_league_sorted_and_complete() {
    let ledger = MemoryLedger::new();
    let wins = [("Zoe", 3), ("Xavier", 2), ("Yannis", 1), ("Walt", 2), ("Vera", 5)];
    for (name, count) in wins {
        for _ in 0..count {
            ledger.record_win(name).unwrap();
        }
    }

    let league = ledger.get_league().unwrap();

    assert!(league.windows(2).all(|w| w[0].score >= w[1].score));

    let got: HashMap<String, u64> = league.into_iter().map(|r| (r.name, r.score)).collect();
    let expected: HashMap<String, u64> = wins
        .iter()
        .map(|(n, c)| (n.to_string(), *c as u64))
        .collect();
    assert_eq!(got, expected);
}

// =============================================================================
// Concurrent Access Tests
// =============================================================================

#[test]
fn test_concurrent_wins_same_player_no_lost_updates() {
    let ledger = Arc::new(MemoryLedger::new());
    let threads = 8;
    let wins_per_thread = 500;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                for _ in 0..wins_per_thread {
                    ledger.record_win("Contended").unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        ledger.get_player_score("Contended").unwrap(),
        (threads * wins_per_thread) as u64
    );
}

#[test]
fn test_concurrent_wins_many_players() {
    let ledger = Arc::new(MemoryLedger::new());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                for i in 0..50 {
                    ledger.record_win(&format!("player{}", i % 10)).unwrap();
                    ledger.record_win(&format!("thread{}", t)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..10 {
        assert_eq!(ledger.get_player_score(&format!("player{}", i)).unwrap(), 20);
    }
    for t in 0..4 {
        assert_eq!(ledger.get_player_score(&format!("thread{}", t)).unwrap(), 50);
    }
}

#[test]
fn test_concurrent_readers_see_monotonic_scores() {
    let ledger = Arc::new(MemoryLedger::new());
    ledger.record_win("Racer").unwrap();

    let writer = {
        let ledger = Arc::clone(&ledger);
        thread::spawn(move || {
            for _ in 0..1000 {
                ledger.record_win("Racer").unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..1000 {
                    let score = ledger.get_player_score("Racer").unwrap();
                    assert!(score >= last, "score went backwards: {} < {}", score, last);
                    last = score;

                    assert_eq!(ledger.get_league().unwrap().len(), 1);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(ledger.get_player_score("Racer").unwrap(), 1001);
}

#[test]
fn test_ledger_as_trait_object() {
    let ledger: Arc<dyn Ledger> = Arc::new(MemoryLedger::new());

    ledger.record_win("Dyn").unwrap();

    assert_eq!(ledger.get_player_score("Dyn").unwrap(), 1);
    assert_eq!(ledger.backend_name(), "memory");
}
