//! Integration tests for closest-word lookup and edit distance.

use rand::Rng;
use rand::distr::Alphanumeric;
use waypoint::fuzzy::{
    closest_word, closest_word_within, levenshtein_distance, rank_candidates,
};

#[test]
fn test_empty_parameters_are_invalid_arguments() {
    assert!(closest_word("", &[]).is_err());
    assert!(closest_word("", &["hello"]).is_err());
    assert!(closest_word("hello", &[]).is_err());
}

#[test]
fn test_single_candidate_returns_single_candidate() {
    assert_eq!(closest_word("hello", &["hello"]).unwrap(), "hello");
}

#[test]
fn test_exact_match_returns_exact_match() {
    assert_eq!(closest_word("hello", &["hello", "world"]).unwrap(), "hello");
}

#[test]
fn test_closest_match_returns_closest_match() {
    assert_eq!(closest_word("helo", &["hello", "world"]).unwrap(), "hello");
}

#[test]
fn test_multiple_closest_matches_returns_earliest() {
    assert_eq!(
        closest_word("helo", &["hello", "world", "hllo"]).unwrap(),
        "hello"
    );
}

#[test]
fn test_closest_word_within_bounds_the_search() {
    let candidates = ["hello", "world", "help"];

    assert_eq!(
        closest_word_within("helo", &candidates, 1).unwrap(),
        Some("hello".to_string())
    );
    assert_eq!(closest_word_within("xyzzy", &candidates, 1).unwrap(), None);
}

#[test]
fn test_rank_candidates_orders_by_distance() {
    let ranked = rank_candidates("helo", &["world", "help", "hello"]).unwrap();

    // "help" and "hello" are both at distance 1; stable sort keeps input order
    let words: Vec<&str> = ranked.iter().map(|m| m.word.as_str()).collect();
    assert_eq!(words, vec!["help", "hello", "world"]);
    assert!(ranked[0].distance <= ranked[1].distance);
    assert!(ranked[1].distance <= ranked[2].distance);
}

#[test]
fn test_edit_distance_symmetry_randomized() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len_a = rng.random_range(0..12);
        let len_b = rng.random_range(0..12);
        let a: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len_a)
            .map(char::from)
            .collect();
        let b: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len_b)
            .map(char::from)
            .collect();

        assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        assert_eq!(levenshtein_distance(&a, &a), 0);
        assert!(levenshtein_distance(&a, &b) <= a.chars().count().max(b.chars().count()));
    }
}
