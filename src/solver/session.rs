//! Guess-recommendation session
//!
//! Holds one solving session: the guesses played so far, the answers still
//! consistent with them, and the next suggested guess.

use super::entropy::{Scan, select_best_guess};
use super::filter::{consistent_with_history, filter_candidates};
use crate::core::{Feedback, MAX_TURNS, ValidationError, Word};
use crate::wordlists::WordLists;
use thiserror::Error;

/// Fixed opening suggestion
///
/// Chosen offline instead of recomputed per session: before any feedback the
/// candidate set and guess pool never change. Whether it is the entropy
/// maximum for a particular pair of lists can be checked with the `opener`
/// command.
pub const OPENING_WORD: &str = "salet";

/// One played guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Outcome of submitting feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    /// Guess to play next, `None` once the session is finished
    pub next_suggestion: Option<Word>,
    /// Answers still consistent with every submitted feedback
    pub remaining_candidates: usize,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No answer is consistent with the history plus this feedback
    #[error("feedback {feedback} for '{guess}' contradicts an earlier guess: no candidates remain")]
    EmptyCandidateSet { guess: Word, feedback: Feedback },

    #[error("session is finished, start a new one")]
    Finished,

    #[error("nothing to undo")]
    NothingToUndo,
}

/// A single solving session over an immutable pair of word lists
///
/// Construct once per set of lists; `reset` starts a new game without
/// reloading anything.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    lists: &'a WordLists,
    opening: Word,
    scan: Scan,
    history: Vec<GuessRecord>,
    candidates: Vec<&'a Word>,
    suggestion: Option<Word>,
    finished: bool,
}

impl<'a> Session<'a> {
    /// Create a session that opens with [`OPENING_WORD`]
    ///
    /// # Panics
    /// Will not panic - `OPENING_WORD` is a valid word.
    #[must_use]
    pub fn new(lists: &'a WordLists) -> Self {
        let opening = Word::new(OPENING_WORD).expect("opening word constant is valid");
        Self::with_opening(lists, opening)
    }

    /// Create a session with a custom opening suggestion
    #[must_use]
    pub fn with_opening(lists: &'a WordLists, opening: Word) -> Self {
        Self {
            lists,
            candidates: lists.possible_answers().iter().collect(),
            suggestion: Some(opening.clone()),
            opening,
            scan: Scan::default(),
            history: Vec::new(),
            finished: false,
        }
    }

    /// Choose how the guess pool is scanned
    #[must_use]
    pub fn with_scan(mut self, scan: Scan) -> Self {
        self.scan = scan;
        self
    }

    /// Start over: empty history, all answers possible, opening word suggested
    pub fn reset(&mut self) -> &Word {
        self.history.clear();
        self.candidates = self.lists.possible_answers().iter().collect();
        self.finished = false;
        self.suggestion.insert(self.opening.clone())
    }

    /// Record the feedback received for `guess` and compute the next suggestion
    ///
    /// `guess` need not be the current suggestion, or even a remaining
    /// candidate. All-hit feedback, or reaching the turn cap, finishes the
    /// session without computing a new suggestion.
    ///
    /// # Errors
    /// - `Finished` if the session already finished
    /// - `EmptyCandidateSet` if no candidate matches; the session is left
    ///   exactly as it was so corrected feedback can be submitted
    pub fn submit_feedback(
        &mut self,
        guess: Word,
        feedback: Feedback,
    ) -> Result<SubmitResult, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }

        let remaining = filter_candidates(&self.candidates, &guess, feedback);

        // an all-hit is a win even when the answer is missing from the list
        if remaining.is_empty() && !feedback.is_all_hit() {
            return Err(SessionError::EmptyCandidateSet { guess, feedback });
        }

        self.history.push(GuessRecord { guess, feedback });
        self.candidates = remaining;

        if feedback.is_all_hit() || self.history.len() >= MAX_TURNS {
            self.finished = true;
            self.suggestion = None;
        } else {
            self.suggestion = Some(self.recommend());
        }

        Ok(self.result())
    }

    /// Parse text input and submit it
    ///
    /// # Errors
    /// `Validation` for a malformed word or feedback, otherwise as
    /// [`Session::submit_feedback`].
    pub fn submit_str(&mut self, guess: &str, feedback: &str) -> Result<SubmitResult, SessionError> {
        let guess = Word::new(guess.trim())?;
        let feedback = feedback.trim().parse::<Feedback>()?;
        self.submit_feedback(guess, feedback)
    }

    /// Take back the last submission
    ///
    /// # Errors
    /// `NothingToUndo` on an empty history.
    pub fn undo(&mut self) -> Result<SubmitResult, SessionError> {
        if self.history.pop().is_none() {
            return Err(SessionError::NothingToUndo);
        }

        self.finished = false;
        self.candidates = consistent_with_history(self.lists.possible_answers(), &self.history);
        self.suggestion = Some(if self.history.is_empty() {
            self.opening.clone()
        } else {
            self.recommend()
        });

        Ok(self.result())
    }

    /// Best next guess for the current candidates
    ///
    /// One candidate left is the answer. Otherwise the whole guess pool is
    /// scanned for maximum entropy, ties going to the earliest word in the
    /// pool.
    fn recommend(&self) -> Word {
        if let [only] = self.candidates.as_slice() {
            return (*only).clone();
        }

        select_best_guess(self.lists.allowed_guesses(), &self.candidates, self.scan)
            .map(|(word, _)| word)
            .or_else(|| self.candidates.first().copied())
            .unwrap_or(&self.opening)
            .clone()
    }

    fn result(&self) -> SubmitResult {
        SubmitResult {
            next_suggestion: self.suggestion.clone(),
            remaining_candidates: self.candidates.len(),
            finished: self.finished,
        }
    }

    #[must_use]
    pub const fn lists(&self) -> &'a WordLists {
        self.lists
    }

    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.opening
    }

    #[must_use]
    pub const fn scan(&self) -> Scan {
        self.scan
    }

    /// Current suggestion, `None` once finished
    #[must_use]
    pub const fn suggestion(&self) -> Option<&Word> {
        self.suggestion.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Answers still consistent with every submitted feedback
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// 1-based number of the turn about to be played
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the last submission was all hits
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|record| record.feedback.is_all_hit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile::{Hit, Miss, Present};

    fn lists() -> WordLists {
        WordLists::from_strs(
            "crane\nslate\nirate\ncrate\ngrate\nsalet\ntrace\nplate\nzzzzz\n",
            "irate\ncrate\ngrate\nslate\nplate\ntrace\n",
        )
        .unwrap()
    }

    fn play(session: &mut Session, guess: &str, target: &str) -> SubmitResult {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::compute(&guess, &Word::new(target).unwrap());
        session.submit_feedback(guess, feedback).unwrap()
    }

    #[test]
    fn new_session_suggests_opening() {
        let lists = lists();
        let session = Session::new(&lists);

        assert_eq!(session.suggestion().unwrap().text(), OPENING_WORD);
        assert_eq!(session.candidates().len(), 6);
        assert!(session.history().is_empty());
        assert_eq!(session.turn(), 1);
        assert!(!session.is_finished());
    }

    #[test]
    fn reset_restores_initial_state() {
        let lists = lists();
        let mut session = Session::new(&lists);
        play(&mut session, "salet", "grate");

        assert_eq!(session.reset().text(), OPENING_WORD);
        assert!(session.history().is_empty());
        assert_eq!(session.candidates().len(), lists.possible_answers().len());
        assert!(!session.is_finished());
    }

    #[test]
    fn submit_shrinks_candidates() {
        let lists = lists();
        let mut session = Session::new(&lists);

        let result = play(&mut session, "salet", "grate");

        assert!(result.remaining_candidates < 6);
        assert!(!result.finished);
        assert!(result.next_suggestion.is_some());
        assert!(session.candidates().iter().any(|w| w.text() == "grate"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn all_hit_finishes_without_suggestion() {
        let lists = lists();
        let mut session = Session::new(&lists);

        let result = session
            .submit_feedback(Word::new("crate").unwrap(), Feedback::ALL_HIT)
            .unwrap();

        assert!(result.finished);
        assert_eq!(result.next_suggestion, None);
        assert_eq!(result.remaining_candidates, 1);
        assert!(session.is_solved());
        assert_eq!(session.suggestion(), None);
    }

    #[test]
    fn all_hit_on_unlisted_answer_still_finishes() {
        let lists = lists();
        let mut session = Session::new(&lists);

        let result = session
            .submit_feedback(Word::new("zzzzz").unwrap(), Feedback::ALL_HIT)
            .unwrap();

        assert!(result.finished);
        assert_eq!(result.remaining_candidates, 0);
    }

    #[test]
    fn contradictory_feedback_is_rejected_and_state_kept() {
        let lists = lists();
        let mut session = Session::new(&lists);
        play(&mut session, "salet", "grate");
        let before = session.clone();

        // no remaining answer starts with a hit on z
        let err = session
            .submit_feedback(
                Word::new("zzzzz").unwrap(),
                Feedback::new([Hit, Miss, Miss, Miss, Miss]),
            )
            .unwrap_err();

        assert!(matches!(err, SessionError::EmptyCandidateSet { .. }));
        assert_eq!(session.history(), before.history());
        assert_eq!(session.candidates(), before.candidates());
        assert_eq!(session.suggestion(), before.suggestion());
    }

    #[test]
    fn turn_cap_finishes_session() {
        let lists = lists();
        let mut session = Session::new(&lists);
        let guess = Word::new("zzzzz").unwrap();

        for turn in 1..=MAX_TURNS {
            let result = session
                .submit_feedback(guess.clone(), Feedback::ALL_MISS)
                .unwrap();
            assert_eq!(result.finished, turn == MAX_TURNS);
        }

        assert_eq!(session.suggestion(), None);
        assert_eq!(
            session.submit_feedback(guess, Feedback::ALL_MISS),
            Err(SessionError::Finished)
        );
    }

    #[test]
    fn single_candidate_is_suggested_directly() {
        let lists = lists();
        let mut session = Session::new(&lists);

        // crate is the only answer with c and r in place
        let result = session
            .submit_feedback(
                Word::new("crane").unwrap(),
                Feedback::new([Hit, Hit, Hit, Miss, Hit]),
            )
            .unwrap();

        assert_eq!(result.remaining_candidates, 1);
        assert_eq!(result.next_suggestion.unwrap().text(), "crate");
    }

    #[test]
    fn suggestion_maximizes_entropy_over_whole_pool() {
        let lists = lists();
        let mut session = Session::new(&lists).with_scan(Scan::Serial);

        let result = play(&mut session, "zzzzz", "grate");
        let expected = select_best_guess(lists.allowed_guesses(), session.candidates(), Scan::Serial)
            .unwrap()
            .0;

        assert_eq!(result.next_suggestion.as_ref(), Some(expected));
    }

    #[test]
    fn undo_restores_previous_turn() {
        let lists = lists();
        let mut session = Session::new(&lists);
        let first = play(&mut session, "salet", "trace");
        let after_first: Vec<&Word> = session.candidates().to_vec();
        play(&mut session, "crane", "trace");

        let undone = session.undo().unwrap();
        assert_eq!(undone, first);
        assert_eq!(session.candidates(), after_first.as_slice());

        let back_to_start = session.undo().unwrap();
        assert_eq!(back_to_start.next_suggestion.unwrap().text(), OPENING_WORD);
        assert_eq!(back_to_start.remaining_candidates, 6);
        assert_eq!(session.undo(), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn undo_reopens_finished_session() {
        let lists = lists();
        let mut session = Session::new(&lists);
        session
            .submit_feedback(Word::new("trace").unwrap(), Feedback::ALL_HIT)
            .unwrap();

        session.undo().unwrap();
        assert!(!session.is_finished());
        assert!(session.suggestion().is_some());
    }

    #[test]
    fn submit_str_validates_input() {
        let lists = lists();
        let mut session = Session::new(&lists);

        assert_eq!(
            session.submit_str("sal3t", "-----"),
            Err(SessionError::Validation(ValidationError::InvalidCharacter('3')))
        );
        assert_eq!(
            session.submit_str("salet", "--G-"),
            Err(SessionError::Validation(ValidationError::InvalidWordLength(4)))
        );
        assert_eq!(
            session.submit_str("salet", "--Q--"),
            Err(SessionError::Validation(ValidationError::InvalidFeedbackSymbol('Q')))
        );
        assert!(session.history().is_empty());

        let ok = session
            .submit_str(" SALET ", "-Y-YY")
            .map(|r| r.finished);
        assert_eq!(ok, Ok(false));
        assert_eq!(
            session.history()[0].feedback,
            Feedback::new([Miss, Present, Miss, Present, Present])
        );
    }

    #[test]
    fn custom_opening() {
        let lists = lists();
        let mut session = Session::with_opening(&lists, Word::new("crane").unwrap());

        assert_eq!(session.suggestion().unwrap().text(), "crane");
        assert_eq!(session.reset().text(), "crane");
    }
}
