//! Candidate filtering
//!
//! A candidate survives a (guess, feedback) pair only if playing the guess
//! against it reproduces that feedback exactly.

use super::GuessRecord;
use crate::core::{Feedback, Word};

/// Check whether `candidate`, as the target, would have produced `feedback` for `guess`
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, feedback: Feedback) -> bool {
    Feedback::compute(guess, candidate) == feedback
}

/// Keep the candidates consistent with one observed guess
///
/// Order is preserved. Filtering an already-filtered set with the same pair
/// returns it unchanged.
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    feedback: Feedback,
) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| is_consistent(candidate, guess, feedback))
        .collect()
}

/// Keep the words consistent with every record in a guess history
#[must_use]
pub fn consistent_with_history<'a>(words: &'a [Word], history: &[GuessRecord]) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|candidate| {
            history
                .iter()
                .all(|record| is_consistent(candidate, &record.guess, record.feedback))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn record(guess: &str, target: &str) -> GuessRecord {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::compute(&guess, &Word::new(target).unwrap());
        GuessRecord { guess, feedback }
    }

    #[test]
    fn keeps_only_consistent_candidates() {
        let answers = words(&["irate", "crate", "grate", "slate", "plate"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let r = record("crane", "slate");

        let kept: Vec<&str> = filter_candidates(&refs, &r.guess, r.feedback)
            .iter()
            .map(|w| w.text())
            .collect();

        assert_eq!(kept, ["slate", "plate"]);
    }

    #[test]
    fn true_target_always_survives() {
        let answers = words(&["irate", "crate", "grate", "slate", "plate", "sheep"]);
        let refs: Vec<&Word> = answers.iter().collect();

        for target in &answers {
            for guess in &answers {
                let fb = Feedback::compute(guess, target);
                assert!(filter_candidates(&refs, guess, fb).contains(&target));
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let answers = words(&["irate", "crate", "grate", "slate", "plate", "trace"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let r = record("train", "grate");

        let once = filter_candidates(&refs, &r.guess, r.feedback);
        let twice = filter_candidates(&once, &r.guess, r.feedback);
        assert_eq!(once, twice);
    }

    #[test]
    fn filtering_never_grows() {
        let answers = words(&["irate", "crate", "grate", "slate", "plate", "trace"]);
        let refs: Vec<&Word> = answers.iter().collect();

        for target in &answers {
            let r = record("caret", target.text());
            assert!(filter_candidates(&refs, &r.guess, r.feedback).len() <= refs.len());
        }
    }

    #[test]
    fn impossible_feedback_empties_set() {
        let answers = words(&["irate", "crate", "grate"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let guess = Word::new("zzzzz").unwrap();

        assert!(filter_candidates(&refs, &guess, Feedback::ALL_HIT).is_empty());
    }

    #[test]
    fn history_filter_matches_stepwise_filter() {
        let answers = words(&["irate", "crate", "grate", "slate", "plate", "trace"]);
        let refs: Vec<&Word> = answers.iter().collect();
        let history = [record("crane", "grate"), record("irate", "grate")];

        let stepwise = history.iter().fold(refs, |set, r| {
            filter_candidates(&set, &r.guess, r.feedback)
        });
        let replayed = consistent_with_history(&answers, &history);

        assert_eq!(stepwise, replayed);
        assert!(replayed.iter().any(|w| w.text() == "grate"));
    }

    #[test]
    fn empty_history_keeps_everything() {
        let answers = words(&["irate", "crate"]);
        assert_eq!(consistent_with_history(&answers, &[]).len(), 2);
    }
}
