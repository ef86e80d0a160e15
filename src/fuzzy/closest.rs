//! Closest-word lookup over a candidate list.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypointError};
use crate::fuzzy::levenshtein::{levenshtein_distance, levenshtein_distance_threshold};

/// A candidate word paired with its edit distance from the query word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// The candidate word.
    pub word: String,
    /// Edit distance from the query word.
    pub distance: usize,
}

impl WordMatch {
    /// Create a new word match.
    pub fn new(word: String, distance: usize) -> Self {
        WordMatch { word, distance }
    }
}

/// Return the candidate with the smallest edit distance to `word`.
///
/// Ties are broken by input order: the earliest candidate among those with
/// the minimal distance wins.
///
/// # Errors
///
/// Returns an invalid-argument error when `word` is empty or `candidates`
/// is empty.
///
/// # Examples
///
/// ```
/// use waypoint::fuzzy::closest_word;
///
/// let word = closest_word("helo", &["hello", "world"]).unwrap();
/// assert_eq!(word, "hello");
/// ```
pub fn closest_word(word: &str, candidates: &[&str]) -> Result<String> {
    validate_inputs(word, candidates)?;

    let mut best = candidates[0];
    let mut best_distance = levenshtein_distance(word, best);

    for &candidate in &candidates[1..] {
        let distance = levenshtein_distance(word, candidate);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    Ok(best.to_string())
}

/// Return the closest candidate whose edit distance is at most
/// `max_distance`, or `None` when no candidate qualifies.
///
/// Uses the threshold-bounded distance so far-off candidates are abandoned
/// early. Same validation and tie-break rules as [`closest_word`].
pub fn closest_word_within(
    word: &str,
    candidates: &[&str],
    max_distance: usize,
) -> Result<Option<String>> {
    validate_inputs(word, candidates)?;

    let mut best: Option<(&str, usize)> = None;

    for &candidate in candidates {
        if let Some(distance) = levenshtein_distance_threshold(word, candidate, max_distance) {
            let better = match best {
                Some((_, best_distance)) => distance < best_distance,
                None => true,
            };
            if better {
                best = Some((candidate, distance));
            }
        }
    }

    Ok(best.map(|(candidate, _)| candidate.to_string()))
}

/// Rank all candidates by edit distance from `word`, closest first.
///
/// The sort is stable, so candidates at equal distance keep their input
/// order. Same validation rules as [`closest_word`].
pub fn rank_candidates(word: &str, candidates: &[&str]) -> Result<Vec<WordMatch>> {
    validate_inputs(word, candidates)?;

    let mut matches: Vec<WordMatch> = candidates
        .iter()
        .map(|candidate| {
            WordMatch::new(candidate.to_string(), levenshtein_distance(word, candidate))
        })
        .collect();

    matches.sort_by_key(|m| m.distance);

    Ok(matches)
}

fn validate_inputs(word: &str, candidates: &[&str]) -> Result<()> {
    if word.is_empty() {
        return Err(WaypointError::invalid_argument("word must not be empty"));
    }
    if candidates.is_empty() {
        return Err(WaypointError::invalid_argument(
            "candidate list must not be empty",
        ));
    }
    Ok(())
}
