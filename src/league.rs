//! League ranking
//!
//! Turns a name → score mapping into the ranked sequence both backends
//! return from `get_league`.

use std::collections::HashMap;

use crate::record::ScoreRecord;

/// Rank all players by descending score.
///
/// Order among equal scores is unspecified and may differ between calls.
pub fn rank(scores: &HashMap<String, u64>) -> Vec<ScoreRecord> {
    let mut league: Vec<ScoreRecord> = scores
        .iter()
        .map(|(name, &score)| ScoreRecord::new(name.clone(), score))
        .collect();

    league.sort_unstable_by(|a, b| b.score.cmp(&a.score));
    league
}
